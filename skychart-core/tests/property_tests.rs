//! Property-based tests for ring preparation.
//!
//! # Invariants tested
//!
//! - **No immediate repeats:** deduped output never holds two equal
//!   neighbours.
//! - **Order preserved:** deduped output is a subsequence of the input that
//!   keeps every run's first point.
//! - **Closure:** closed rings start and end on the same point and closing
//!   twice changes nothing.
//! - **Acceptance:** every accepted feature is valid with positive area.

use geo::{Area, Coord, Validation};
use proptest::prelude::*;
use skychart_core::{
    PolygonBuilder, RegionGroup, Ring, ZeroBufferRepair, close_ring, dedupe_consecutive,
};

/// Small integer grid so that repeats and collinear runs are common.
fn point_strategy() -> impl Strategy<Value = Coord<f64>> {
    (0_i8..4, 0_i8..4).prop_map(|(x, y)| Coord {
        x: f64::from(x),
        y: f64::from(y),
    })
}

fn points_strategy() -> impl Strategy<Value = Vec<Coord<f64>>> {
    prop::collection::vec(point_strategy(), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn dedupe_leaves_no_adjacent_duplicates(points in points_strategy()) {
        let deduped = dedupe_consecutive(&points);
        for pair in deduped.windows(2) {
            prop_assert_ne!(pair.first(), pair.get(1));
        }
    }

    #[test]
    fn dedupe_matches_run_starts(points in points_strategy()) {
        let deduped = dedupe_consecutive(&points);
        let run_starts: Vec<_> = points
            .iter()
            .enumerate()
            .filter(|(index, point)| {
                index.checked_sub(1).and_then(|prev| points.get(prev)) != Some(*point)
            })
            .map(|(_, point)| *point)
            .collect();
        prop_assert_eq!(deduped, run_starts);
    }

    #[test]
    fn dedupe_is_idempotent(points in points_strategy()) {
        let once = dedupe_consecutive(&points);
        prop_assert_eq!(dedupe_consecutive(&once), once);
    }

    #[test]
    fn closed_rings_start_and_end_together(points in prop::collection::vec(point_strategy(), 1..24)) {
        let ring = Ring::close(points.clone());
        prop_assert_eq!(ring.points().first(), ring.points().last());

        let mut closed = ring.points().to_vec();
        close_ring(&mut closed);
        prop_assert_eq!(closed.as_slice(), ring.points());
    }

    #[test]
    fn accepted_features_are_valid(points in points_strategy()) {
        let group = RegionGroup { code: "P".to_owned(), points };
        if let Ok(feature) = PolygonBuilder::new(ZeroBufferRepair).build_region(&group) {
            prop_assert!(feature.polygon().is_valid());
            prop_assert!(feature.polygon().unsigned_area() > 0.0);
        }
    }
}
