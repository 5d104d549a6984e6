//! Ring preparation: consecutive dedupe, closure and polygon construction.

use geo::{LineString, Polygon};
use thiserror::Error;

use crate::BoundaryPoint;

/// Collapse immediately repeated points, keeping the first of each run.
///
/// Equality is exact. Points that repeat further apart are kept because they
/// mark legitimate boundary crossings.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use skychart_core::dedupe_consecutive;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 1.0, y: 0.0 };
/// assert_eq!(dedupe_consecutive(&[a, a, b, a, b]), vec![a, b, a, b]);
/// ```
#[must_use]
pub fn dedupe_consecutive(points: &[BoundaryPoint]) -> Vec<BoundaryPoint> {
    let mut deduped: Vec<BoundaryPoint> = Vec::with_capacity(points.len());
    for &point in points {
        if deduped.last() != Some(&point) {
            deduped.push(point);
        }
    }
    deduped
}

/// Append the first point when the sequence is not already closed.
///
/// Calling this on a closed (or empty) sequence does nothing.
pub fn close_ring(points: &mut Vec<BoundaryPoint>) {
    if let (Some(&first), Some(&last)) = (points.first(), points.last())
        && first != last
    {
        points.push(first);
    }
}

/// A closed sequence of boundary points whose first and last entries match.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<BoundaryPoint>,
}

/// Raised when a ring cannot be turned into polygon geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A vertex holds NaN or an infinite component.
    #[error("vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the vertex within the ring.
        index: usize,
        /// Offending `x` value.
        x: f64,
        /// Offending `y` value.
        y: f64,
    },
}

impl Ring {
    /// Close `points` into a ring.
    #[must_use]
    pub fn close(mut points: Vec<BoundaryPoint>) -> Self {
        close_ring(&mut points);
        Self { points }
    }

    /// Ring vertices, including the repeated closing point.
    #[must_use]
    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// Build a single-ring polygon from the vertices.
    ///
    /// # Errors
    /// Returns [`ConstructionError::NonFiniteCoordinate`] when any vertex
    /// cannot participate in planar geometry.
    pub fn to_polygon(&self) -> Result<Polygon<f64>, ConstructionError> {
        if let Some((index, point)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, point)| !(point.x.is_finite() && point.y.is_finite()))
        {
            return Err(ConstructionError::NonFiniteCoordinate {
                index,
                x: point.x,
                y: point.y,
            });
        }
        Ok(Polygon::new(LineString::new(self.points.clone()), Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn coords(raw: &[(f64, f64)]) -> Vec<BoundaryPoint> {
        raw.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[rstest]
    fn dedupe_keeps_non_adjacent_repeats() {
        let input = coords(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        let expected = coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(dedupe_consecutive(&input), expected);
    }

    #[rstest]
    fn dedupe_uses_exact_equality() {
        let input = coords(&[(0.0, 0.0), (0.0, 1.0e-12)]);
        assert_eq!(dedupe_consecutive(&input).len(), 2);
    }

    #[rstest]
    fn dedupe_of_empty_is_empty() {
        assert!(dedupe_consecutive(&[]).is_empty());
    }

    #[rstest]
    #[case(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], 4)]
    #[case(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)], 4)]
    fn closure_appends_only_when_open(#[case] raw: &[(f64, f64)], #[case] expected_len: usize) {
        let ring = Ring::close(coords(raw));
        assert_eq!(ring.points().len(), expected_len);
        assert_eq!(ring.points().first(), ring.points().last());
    }

    #[rstest]
    fn closing_twice_is_a_no_op() {
        let mut points = coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        close_ring(&mut points);
        let once = points.clone();
        close_ring(&mut points);
        assert_eq!(points, once);
    }

    #[rstest]
    fn builds_polygon_from_finite_ring() {
        let ring = Ring::close(coords(&[(0.0, 0.0), (15.0, 0.0), (15.0, 15.0)]));
        let polygon = ring.to_polygon().expect("finite ring builds");
        assert_eq!(polygon.exterior().0, ring.points());
        assert!(polygon.interiors().is_empty());
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_non_finite_vertices(#[case] x: f64, #[case] y: f64) {
        let ring = Ring::close(coords(&[(0.0, 0.0), (x, y), (1.0, 1.0)]));
        let err = ring.to_polygon().expect_err("non-finite vertex must fail");
        match err {
            ConstructionError::NonFiniteCoordinate { index, .. } => assert_eq!(index, 1),
        }
    }
}
