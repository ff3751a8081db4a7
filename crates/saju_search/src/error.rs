//! Error types for solar-term search and pillar calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::CycleError;
use saju_time::TimeError;

/// Errors from boundary search and Four Pillars calculation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed or out-of-range civil date-time input.
    InvalidCivilDateTime(String),
    /// Year outside the range the solar model is trusted for.
    UnsupportedYearRange { year: i32, min: i32, max: i32 },
    /// Stem/branch parity mismatch. Never produced by the calculator itself.
    InvalidPillarCombination { stem: u8, branch: u8 },
    /// Malformed canonical key text.
    InvalidCanonicalKey(String),
    /// Scan failed to bracket a boundary.
    NoConvergence(&'static str),
    /// Invalid search configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCivilDateTime(msg) => write!(f, "invalid civil date-time: {msg}"),
            Self::UnsupportedYearRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}..={max}")
            }
            Self::InvalidPillarCombination { stem, branch } => write!(
                f,
                "invalid pillar combination: stem {stem}, branch {branch}"
            ),
            Self::InvalidCanonicalKey(msg) => write!(f, "invalid canonical key: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::InvalidCivilDateTime(e.to_string())
    }
}

impl From<CycleError> for SearchError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::InvalidPillarCombination { stem, branch } => {
                Self::InvalidPillarCombination { stem, branch }
            }
            other => Self::InvalidCanonicalKey(other.to_string()),
        }
    }
}
