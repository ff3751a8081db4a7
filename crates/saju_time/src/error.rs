//! Error types for civil date-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date-time parsing, validation, or arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input could not be parsed or names a non-existent date/time.
    InvalidCivilDateTime(String),
    /// UTC offset outside ±14:00.
    OffsetOutOfRange(i32),
    /// Date arithmetic left the representable range.
    Overflow,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCivilDateTime(msg) => write!(f, "invalid civil date-time: {msg}"),
            Self::OffsetOutOfRange(min) => {
                write!(f, "UTC offset {min} min is outside the ±14:00 range")
            }
            Self::Overflow => write!(f, "date arithmetic overflow"),
        }
    }
}

impl Error for TimeError {}
