//! Structured reporting of regions that produced no feature.
//!
//! Skips are values, not errors: the builder records one
//! [`SkipDiagnostic`] per rejected region and carries on with the batch.

use std::fmt;

use log::{error, warn};

/// How serious a skip is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected data-quality problem.
    Warning,
    /// Geometry could not even be constructed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Why a region was excluded from the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three raw catalog points.
    TooFewPoints(usize),
    /// Fewer than three points once immediate repeats were collapsed.
    TooFewAfterDedupe(usize),
    /// Geometry stayed invalid after repair, or encloses no area.
    InvalidOrZeroArea,
    /// Polygon construction failed.
    ConstructionError(String),
}

impl SkipReason {
    /// Machine-readable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TooFewPoints(_) => "too_few_points",
            Self::TooFewAfterDedupe(_) => "too_few_after_dedupe",
            Self::InvalidOrZeroArea => "invalid_or_zero_area",
            Self::ConstructionError(_) => "construction_error",
        }
    }

    /// Severity attached to this reason.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::ConstructionError(_) => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints(count) | Self::TooFewAfterDedupe(count) => {
                write!(f, "{}({count})", self.code())
            }
            Self::InvalidOrZeroArea => f.write_str(self.code()),
            Self::ConstructionError(detail) => write!(f, "{}({detail})", self.code()),
        }
    }
}

/// One skipped region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipDiagnostic {
    /// Severity derived from the reason.
    pub severity: Severity,
    /// Region that was skipped.
    pub region_code: String,
    /// Reason code and its parameters.
    pub reason: SkipReason,
    /// Free-form context, empty when the reason says it all.
    pub detail: String,
}

impl SkipDiagnostic {
    /// Build a diagnostic for `region_code` with no extra detail.
    #[must_use]
    pub fn new(region_code: &str, reason: SkipReason) -> Self {
        Self {
            severity: reason.severity(),
            region_code: region_code.to_owned(),
            reason,
            detail: String::new(),
        }
    }

    /// Attach free-form context.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

impl fmt::Display for SkipDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skip {}: {}", self.region_code, self.reason)?;
        if !self.detail.is_empty() {
            write!(f, " ({})", self.detail)?;
        }
        Ok(())
    }
}

/// Destination for skip diagnostics.
pub trait DiagnosticSink {
    /// Record a skipped region.
    fn record(&mut self, diagnostic: SkipDiagnostic);
}

impl DiagnosticSink for Vec<SkipDiagnostic> {
    fn record(&mut self, diagnostic: SkipDiagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that writes each diagnostic as one `log` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, diagnostic: SkipDiagnostic) {
        match diagnostic.severity {
            Severity::Warning => warn!("{diagnostic}"),
            Severity::Error => error!("{diagnostic}"),
        }
    }
}
