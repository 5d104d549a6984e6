//! Catalog ingestion and document output for the skychart pipeline.
//!
//! Responsibilities:
//! - Parse line-oriented boundary catalogs into ordered region groups.
//! - Serialise accepted region features as a GeoJSON feature collection.
//! - Drive the read → build → emit → write conversion for files on disk.
//!
//! Boundaries:
//! - Geometry rules live in `skychart-core`; this crate only moves data in
//!   and out.
//!
//! Invariants:
//! - Catalog line defects are tolerated; I/O failures are fatal.
//! - Output for an unchanged catalog is byte-identical between runs.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod geojson;
pub mod pipeline;

pub use catalog::{CatalogError, CatalogLine, parse_catalog, parse_line, read_catalog};
pub use geojson::{
    EmitError, Feature, FeatureCollection, Geometry, PROPERTY_KEY, Properties, emit, render,
};
pub use pipeline::{ConversionSummary, ConvertError, ConvertOptions, convert};
