//! Core domain types for turning celestial boundary catalogs into region
//! polygons.
//!
//! The crate is pure: it owns the in-memory model (points, region groups,
//! rings, accepted features) and the polygon builder, but performs no I/O.
//! Reading catalogs and writing documents live in `skychart-data`.
//!
//! Coordinates are planar. Right ascension is converted from hours to degrees
//! and used as `x`; declination in degrees is used as `y`.
#![forbid(unsafe_code)]

pub mod builder;
pub mod diagnostics;
pub mod feature;
pub mod geometry;
pub mod groups;
pub mod point;
pub mod repair;
pub mod ring;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use builder::{MIN_RING_POINTS, PolygonBuilder};
pub use diagnostics::{DiagnosticSink, LogSink, Severity, SkipDiagnostic, SkipReason};
pub use feature::{RegionFeature, RegionFeatureError};
pub use geometry::GeometryState;
pub use groups::{RegionGroup, RegionGroups};
pub use point::{BoundaryPoint, DEGREES_PER_HOUR, boundary_point};
pub use repair::{GeometryRepair, NoRepair, RepairError, ZeroBufferRepair};
pub use ring::{ConstructionError, Ring, close_ring, dedupe_consecutive};
