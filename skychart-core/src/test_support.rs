//! Test-only repair strategies and group builders used by unit and behaviour
//! tests.

use geo::{Coord, Polygon};

use crate::{GeometryRepair, RegionGroup, RepairError};

/// Repair strategy that always answers with the same polygon.
#[derive(Debug, Clone)]
pub struct FixedRepair {
    replacement: Polygon<f64>,
}

impl FixedRepair {
    /// Create a strategy returning `replacement` for every input.
    #[must_use]
    pub const fn new(replacement: Polygon<f64>) -> Self {
        Self { replacement }
    }
}

impl GeometryRepair for FixedRepair {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn repair(&self, _polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        Ok(self.replacement.clone())
    }
}

/// Repair strategy that reports every polygon as empty after repair.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRepair;

impl GeometryRepair for FailingRepair {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn repair(&self, _polygon: &Polygon<f64>) -> Result<Polygon<f64>, RepairError> {
        Err(RepairError::Empty)
    }
}

/// Build a [`RegionGroup`] from raw `(x, y)` pairs.
#[must_use]
pub fn group(code: &str, raw: &[(f64, f64)]) -> RegionGroup {
    RegionGroup {
        code: code.to_owned(),
        points: raw.iter().map(|&(x, y)| Coord { x, y }).collect(),
    }
}
