//! Pluggable best-effort repair for invalid polygons.
//!
//! The builder only consults a repair strategy once a polygon has failed the
//! validity predicate. Whatever a strategy returns is validated again before
//! it can be accepted, so a strategy may be optimistic.

use geo::{Buffer, MultiPolygon, Polygon};
use thiserror::Error;

/// Reasons a repair attempt produced no usable polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    /// The strategy does not repair geometry.
    #[error("repair disabled")]
    Declined,
    /// The repaired geometry covers no area.
    #[error("repair produced empty geometry")]
    Empty,
    /// The repaired geometry fell apart into several polygons.
    #[error("repair split the region into {parts} polygons")]
    Split {
        /// Number of polygons produced.
        parts: usize,
    },
    /// The repaired geometry carries interior rings.
    #[error("repair produced {count} interior ring(s)")]
    Holes {
        /// Number of interior rings produced.
        count: usize,
    },
}

/// Strategy for turning an invalid polygon into a candidate replacement.
pub trait GeometryRepair {
    /// Short label used in diagnostics and logs.
    fn name(&self) -> &'static str;

    /// Attempt to rebuild `polygon`.
    ///
    /// # Errors
    /// Returns [`RepairError`] when no single simple polygon can be produced.
    fn repair(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError>;
}

impl<R: GeometryRepair + ?Sized> GeometryRepair for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn repair(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        (**self).repair(polygon)
    }
}

impl<R: GeometryRepair + ?Sized> GeometryRepair for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn repair(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        (**self).repair(polygon)
    }
}

/// Regularise geometry with a zero-distance buffer.
///
/// Buffering by zero rebuilds the boundary through the overlay engine, which
/// resolves minor self-intersections and collapses degenerate spikes. Regions
/// are single-ring, so the result is only kept when it is one polygon without
/// holes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroBufferRepair;

impl GeometryRepair for ZeroBufferRepair {
    fn name(&self) -> &'static str {
        "zero-buffer"
    }

    fn repair(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        single_polygon(polygon.buffer(0.0))
    }
}

/// Repair strategy that never changes geometry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRepair;

impl GeometryRepair for NoRepair {
    fn name(&self) -> &'static str {
        "none"
    }

    fn repair(&self, _polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        Err(RepairError::Declined)
    }
}

fn single_polygon(buffered: MultiPolygon<f64>) -> Result<Polygon<f64>, RepairError> {
    let mut parts = buffered.0;
    if parts.len() > 1 {
        return Err(RepairError::Split { parts: parts.len() });
    }
    let polygon = parts.pop().ok_or(RepairError::Empty)?;
    match polygon.interiors().len() {
        0 => Ok(polygon),
        count => Err(RepairError::Holes { count }),
    }
}
