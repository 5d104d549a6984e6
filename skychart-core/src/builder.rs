//! Turn region point sequences into accepted region polygons.

use log::debug;

use crate::{
    DiagnosticSink, GeometryRepair, GeometryState, RegionFeature, RegionGroup, RegionGroups, Ring,
    SkipDiagnostic, SkipReason, dedupe_consecutive,
};

/// Minimum number of distinct vertices a region needs before closure.
pub const MIN_RING_POINTS: usize = 3;

/// Builds [`RegionFeature`]s from [`RegionGroups`].
///
/// Each region is processed independently: dedupe immediate repeats, close
/// the ring, construct a polygon, validate it, try one repair if invalid and
/// keep the result only when it is valid with positive area. A failing region
/// is reported to the diagnostic sink and never stops the batch.
///
/// # Examples
/// ```
/// use skychart_core::{PolygonBuilder, RegionGroups, SkipDiagnostic, ZeroBufferRepair, boundary_point};
///
/// let mut groups = RegionGroups::default();
/// for (ra, dec) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
///     groups.push("Tri", boundary_point(ra, dec));
/// }
/// groups.push("Pair", boundary_point(0.0, 0.0));
/// groups.push("Pair", boundary_point(1.0, 0.0));
///
/// let mut skipped: Vec<SkipDiagnostic> = Vec::new();
/// let features = PolygonBuilder::new(ZeroBufferRepair).build(&groups, &mut skipped);
///
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].code(), "Tri");
/// assert_eq!(skipped[0].reason.to_string(), "too_few_points(2)");
/// ```
#[derive(Debug, Default, Clone)]
pub struct PolygonBuilder<R> {
    repair: R,
}

impl<R: GeometryRepair> PolygonBuilder<R> {
    /// Create a builder that repairs invalid polygons with `repair`.
    pub const fn new(repair: R) -> Self {
        Self { repair }
    }

    /// The configured repair strategy.
    pub const fn repair_strategy(&self) -> &R {
        &self.repair
    }

    /// Build every region in iteration order, reporting skips to `sink`.
    pub fn build(&self, groups: &RegionGroups, sink: &mut dyn DiagnosticSink) -> Vec<RegionFeature> {
        let mut features = Vec::with_capacity(groups.len());
        for group in groups {
            match self.build_region(group) {
                Ok(feature) => features.push(feature),
                Err(diagnostic) => sink.record(diagnostic),
            }
        }
        debug!(
            "accepted {} of {} regions using {} repair",
            features.len(),
            groups.len(),
            self.repair.name()
        );
        features
    }

    /// Build a single region.
    ///
    /// # Errors
    /// Returns the [`SkipDiagnostic`] describing why the region produced no
    /// feature.
    pub fn build_region(&self, group: &RegionGroup) -> Result<RegionFeature, SkipDiagnostic> {
        let code = group.code.as_str();
        let raw = group.len();
        if raw < MIN_RING_POINTS {
            return Err(SkipDiagnostic::new(code, SkipReason::TooFewPoints(raw)));
        }

        let deduped = dedupe_consecutive(&group.points);
        if deduped.len() < MIN_RING_POINTS {
            return Err(SkipDiagnostic::new(
                code,
                SkipReason::TooFewAfterDedupe(deduped.len()),
            ));
        }

        let ring = Ring::close(deduped);
        let polygon = ring.to_polygon().map_err(|err| {
            SkipDiagnostic::new(code, SkipReason::ConstructionError(err.to_string()))
        })?;

        let checked = GeometryState::Unchecked(polygon).check();
        let needed_repair = matches!(checked, GeometryState::Invalid { .. });
        let settled = checked.repair(&self.repair).check();
        if needed_repair && matches!(settled, GeometryState::Valid(_)) {
            debug!("repaired region {code} with {} repair", self.repair.name());
        }

        let polygon = settled.into_valid().map_err(|detail| {
            SkipDiagnostic::new(code, SkipReason::InvalidOrZeroArea).with_detail(detail)
        })?;
        RegionFeature::new(code, polygon).map_err(|err| {
            SkipDiagnostic::new(code, SkipReason::InvalidOrZeroArea).with_detail(err.to_string())
        })
    }
}
