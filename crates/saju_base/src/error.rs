//! Error types for sexagenary cycle arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from stem/branch combination and symbol lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch differ in parity; no pillar pairs them.
    InvalidPillarCombination { stem: u8, branch: u8 },
    /// Cycle index outside 0..60.
    IndexOutOfRange(u8),
    /// Character is neither a hanja nor a hangul stem/branch symbol.
    UnknownSymbol(char),
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPillarCombination { stem, branch } => write!(
                f,
                "invalid pillar combination: stem {stem} and branch {branch} differ in parity"
            ),
            Self::IndexOutOfRange(i) => write!(f, "cycle index {i} outside 0..60"),
            Self::UnknownSymbol(c) => write!(f, "unknown stem/branch symbol '{c}'"),
        }
    }
}

impl Error for CycleError {}
