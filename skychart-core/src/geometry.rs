//! Validate-then-repair state tracking for a region polygon.
//!
//! A polygon moves through `Unchecked → Valid | Invalid`, an invalid polygon
//! through `Invalid → Repaired | Rejected`, and a repaired polygon is checked
//! once more: `Repaired → Valid | Rejected`. Only one repair is attempted.

use geo::{Polygon, Validation};

use crate::GeometryRepair;

/// Where a polygon stands in the validity check.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryState {
    /// Freshly constructed, not yet checked.
    Unchecked(Polygon<f64>),
    /// Passed the simple-polygon validity predicate.
    Valid(Polygon<f64>),
    /// Failed the validity predicate and awaits repair.
    Invalid {
        /// The offending polygon.
        polygon: Polygon<f64>,
        /// First validity problem reported.
        problem: String,
    },
    /// Produced by a repair strategy, not yet re-checked.
    Repaired(Polygon<f64>),
    /// Could not be made valid.
    Rejected {
        /// Why the polygon was given up on.
        detail: String,
    },
}

impl GeometryState {
    /// Run the full check, repair, re-check sequence for `polygon`.
    ///
    /// # Examples
    /// ```
    /// use geo::polygon;
    /// use skychart_core::{GeometryState, NoRepair};
    ///
    /// let triangle = polygon![(x: 0.0, y: 0.0), (x: 15.0, y: 0.0), (x: 15.0, y: 15.0)];
    /// let state = GeometryState::settle(triangle, &NoRepair);
    /// assert!(matches!(state, GeometryState::Valid(_)));
    /// ```
    #[must_use]
    pub fn settle<R>(polygon: Polygon<f64>, strategy: &R) -> Self
    where
        R: GeometryRepair + ?Sized,
    {
        Self::Unchecked(polygon).check().repair(strategy).check()
    }

    /// Apply the validity predicate to unchecked or repaired geometry.
    ///
    /// Other states are returned unchanged.
    #[must_use]
    pub fn check(self) -> Self {
        match self {
            Self::Unchecked(polygon) => match validity_problem(&polygon) {
                None => Self::Valid(polygon),
                Some(problem) => Self::Invalid { polygon, problem },
            },
            Self::Repaired(polygon) => match validity_problem(&polygon) {
                None => Self::Valid(polygon),
                Some(problem) => Self::Rejected {
                    detail: format!("repaired geometry still invalid: {problem}"),
                },
            },
            settled => settled,
        }
    }

    /// Hand invalid geometry to `strategy`.
    ///
    /// Other states are returned unchanged.
    #[must_use]
    pub fn repair<R>(self, strategy: &R) -> Self
    where
        R: GeometryRepair + ?Sized,
    {
        match self {
            Self::Invalid { polygon, problem } => match strategy.repair(&polygon) {
                Ok(repaired) => Self::Repaired(repaired),
                Err(err) => Self::Rejected {
                    detail: format!("{problem}; {} repair failed: {err}", strategy.name()),
                },
            },
            other => other,
        }
    }

    /// Extract the polygon of a [`GeometryState::Valid`] state.
    ///
    /// # Errors
    /// Returns a description of the state when the polygon is not valid.
    pub fn into_valid(self) -> Result<Polygon<f64>, String> {
        match self {
            Self::Valid(polygon) => Ok(polygon),
            Self::Rejected { detail } => Err(detail),
            Self::Invalid { problem, .. } => Err(problem),
            Self::Unchecked(_) => Err("geometry was never checked".to_owned()),
            Self::Repaired(_) => Err("repaired geometry was never re-checked".to_owned()),
        }
    }
}

fn validity_problem(polygon: &Polygon<f64>) -> Option<String> {
    polygon.check_validation().err().map(|err| err.to_string())
}
