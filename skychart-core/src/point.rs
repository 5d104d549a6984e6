//! Boundary points in planar sky coordinates.

use geo::Coord;

/// A single catalog vertex.
///
/// `x` is right ascension in degrees and `y` is declination in degrees. The
/// plane is treated as Euclidean; no wrap-around at 360° is applied.
pub type BoundaryPoint = Coord<f64>;

/// Degrees of right ascension per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Convert an equatorial position into a [`BoundaryPoint`].
///
/// # Examples
/// ```
/// use skychart_core::boundary_point;
///
/// let point = boundary_point(2.0, -12.5);
/// assert_eq!(point.x, 30.0);
/// assert_eq!(point.y, -12.5);
/// ```
#[must_use]
pub fn boundary_point(ra_hours: f64, dec_degrees: f64) -> BoundaryPoint {
    Coord {
        x: ra_hours * DEGREES_PER_HOUR,
        y: dec_degrees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 15.0)]
    #[case(2.0, 30.0)]
    #[case(23.5, 352.5)]
    fn converts_hours_to_degrees(#[case] hours: f64, #[case] degrees: f64) {
        let point = boundary_point(hours, 45.0);
        assert_eq!(point.x, degrees);
        assert_eq!(point.y, 45.0, "declination passes through unchanged");
    }
}
