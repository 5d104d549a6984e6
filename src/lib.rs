//! Facade crate for the skychart boundary pipeline.
//!
//! This crate re-exports the polygon builder and its diagnostics, and exposes
//! the catalog parser and GeoJSON emitter behind the `data` feature.

#![forbid(unsafe_code)]

pub use skychart_core::{
    BoundaryPoint, DiagnosticSink, GeometryRepair, GeometryState, LogSink, NoRepair,
    PolygonBuilder, RegionFeature, RegionGroup, RegionGroups, Severity, SkipDiagnostic,
    SkipReason, ZeroBufferRepair, boundary_point,
};

#[cfg(feature = "data")]
pub use skychart_data::{
    ConversionSummary, ConvertError, ConvertOptions, FeatureCollection, convert, emit,
    parse_catalog, read_catalog, render,
};
