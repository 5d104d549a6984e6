//! Accepted region polygons.

use geo::{Area, Polygon, Validation};
use thiserror::Error;

/// A region code paired with a valid, positive-area simple polygon.
///
/// # Examples
/// ```
/// use geo::polygon;
/// use skychart_core::RegionFeature;
///
/// # fn main() -> Result<(), skychart_core::RegionFeatureError> {
/// let triangle = polygon![(x: 0.0, y: 0.0), (x: 15.0, y: 0.0), (x: 15.0, y: 15.0)];
/// let feature = RegionFeature::new("Tri", triangle)?;
/// assert_eq!(feature.code(), "Tri");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegionFeature {
    code: String,
    polygon: Polygon<f64>,
}

/// Errors returned by [`RegionFeature::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionFeatureError {
    /// The polygon fails the simple-polygon validity predicate.
    #[error("polygon is not valid")]
    Invalid,
    /// The polygon has multiple rings.
    #[error("polygon has {count} interior ring(s)")]
    Holes {
        /// Number of interior rings.
        count: usize,
    },
    /// The polygon encloses no area.
    #[error("polygon area {area} is not positive")]
    NonPositiveArea {
        /// Measured unsigned area.
        area: f64,
    },
}

impl RegionFeature {
    /// Validates and constructs a [`RegionFeature`].
    ///
    /// # Errors
    /// Returns [`RegionFeatureError`] when the polygon is invalid, has holes,
    /// or has zero area.
    pub fn new(code: impl Into<String>, polygon: Polygon<f64>) -> Result<Self, RegionFeatureError> {
        if !polygon.is_valid() {
            return Err(RegionFeatureError::Invalid);
        }
        let holes = polygon.interiors().len();
        if holes > 0 {
            return Err(RegionFeatureError::Holes { count: holes });
        }
        let area = polygon.unsigned_area();
        if area.is_nan() || area <= 0.0 {
            return Err(RegionFeatureError::NonPositiveArea { area });
        }
        Ok(Self {
            code: code.into(),
            polygon,
        })
    }

    /// Region code the polygon is tagged with.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The accepted polygon.
    #[must_use]
    pub const fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Unsigned planar area in square degrees.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygon.unsigned_area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use rstest::rstest;

    #[rstest]
    fn accepts_triangle() {
        let triangle = polygon![(x: 0.0, y: 0.0), (x: 15.0, y: 0.0), (x: 15.0, y: 15.0)];
        let feature = RegionFeature::new("Tri", triangle).expect("triangle accepted");
        assert!((feature.area() - 112.5).abs() < 1.0e-9);
    }

    #[rstest]
    fn rejects_collinear_ring() {
        let flat = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
        assert!(RegionFeature::new("Flat", flat).is_err());
    }

    #[rstest]
    fn rejects_self_intersection() {
        let bowtie = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 2.0), (x: 2.0, y: 0.0), (x: 0.0, y: 2.0)];
        assert_eq!(
            RegionFeature::new("Bow", bowtie),
            Err(RegionFeatureError::Invalid)
        );
    }

    #[rstest]
    fn rejects_holes() {
        let framed = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0)]]
        );
        assert_eq!(
            RegionFeature::new("Frame", framed),
            Err(RegionFeatureError::Holes { count: 1 })
        );
    }
}
