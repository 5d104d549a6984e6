//! Ordered grouping of boundary points by region code.

use std::collections::HashMap;

use crate::BoundaryPoint;

/// The ordered boundary points recorded for one region.
///
/// Point order is the catalog's traversal order and is never rearranged.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup {
    /// Opaque region identifier, e.g. a constellation abbreviation.
    pub code: String,
    /// Points in the order they appeared in the catalog.
    pub points: Vec<BoundaryPoint>,
}

impl RegionGroup {
    /// Number of raw points recorded for the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the region has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Append-only mapping from region code to its ordered boundary points.
///
/// Iteration follows the order in which each code first appeared, which keeps
/// downstream output deterministic for an unchanged catalog.
///
/// # Examples
/// ```
/// use skychart_core::{RegionGroups, boundary_point};
///
/// let mut groups = RegionGroups::default();
/// let shared = boundary_point(1.0, 0.0);
/// groups.push("AND", shared);
/// groups.push("PEG", shared);
/// groups.push("AND", boundary_point(1.5, 2.0));
///
/// let codes: Vec<_> = groups.codes().collect();
/// assert_eq!(codes, ["AND", "PEG"]);
/// assert_eq!(groups.get("AND").map(|group| group.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionGroups {
    groups: Vec<RegionGroup>,
    index: HashMap<String, usize>,
}

impl RegionGroups {
    /// Append `point` to the sequence for `code`, creating the group on first
    /// use.
    pub fn push(&mut self, code: &str, point: BoundaryPoint) {
        if let Some(group) = self
            .index
            .get(code)
            .and_then(|&slot| self.groups.get_mut(slot))
        {
            group.points.push(point);
            return;
        }
        self.index.insert(code.to_owned(), self.groups.len());
        self.groups.push(RegionGroup {
            code: code.to_owned(),
            points: vec![point],
        });
    }

    /// Look up the group recorded for `code`.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&RegionGroup> {
        self.index
            .get(code)
            .and_then(|&slot| self.groups.get(slot))
    }

    /// Number of distinct region codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no region has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegionGroup> {
        self.groups.iter()
    }

    /// Iterate region codes in first-appearance order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|group| group.code.as_str())
    }
}

impl<'a> IntoIterator for &'a RegionGroups {
    type Item = &'a RegionGroup;
    type IntoIter = std::slice::Iter<'a, RegionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RegionGroups {
    type Item = RegionGroup;
    type IntoIter = std::vec::IntoIter<RegionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn coord(x: f64, y: f64) -> BoundaryPoint {
        Coord { x, y }
    }

    #[fixture]
    fn interleaved() -> RegionGroups {
        let mut groups = RegionGroups::default();
        groups.push("B", coord(0.0, 0.0));
        groups.push("A", coord(1.0, 0.0));
        groups.push("B", coord(2.0, 0.0));
        groups.push("C", coord(3.0, 0.0));
        groups.push("A", coord(4.0, 0.0));
        groups
    }

    #[rstest]
    fn iterates_in_first_appearance_order(interleaved: RegionGroups) {
        let codes: Vec<_> = interleaved.codes().collect();
        assert_eq!(codes, ["B", "A", "C"]);
    }

    #[rstest]
    fn preserves_point_order_within_group(interleaved: RegionGroups) {
        let group = interleaved.get("A").expect("group A recorded");
        assert_eq!(group.points, vec![coord(1.0, 0.0), coord(4.0, 0.0)]);
    }

    #[rstest]
    fn keeps_repeated_points() {
        let mut groups = RegionGroups::default();
        groups.push("X", coord(1.0, 1.0));
        groups.push("X", coord(1.0, 1.0));
        assert_eq!(groups.get("X").map(RegionGroup::len), Some(2));
    }

    #[rstest]
    fn empty_mapping_reports_empty() {
        let groups = RegionGroups::default();
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert!(groups.get("X").is_none());
    }
}
