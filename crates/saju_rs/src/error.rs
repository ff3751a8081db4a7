//! Unified error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_config::ConfigError;
use saju_search::SearchError;

/// Errors from the `saju_rs` convenience API.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// [`init`](crate::init) has not been called.
    NotInitialized,
    /// [`init`](crate::init) was called more than once.
    AlreadyInitialized,
    /// Error from calculation or boundary search.
    Search(SearchError),
    /// Error from configuration.
    Config(ConfigError),
    /// Legacy record is missing fields or holds unknown symbols.
    InvalidLegacyRecord(String),
    /// JSON encoding or decoding failed.
    Json(String),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "saju engine not initialized; call init() first"),
            Self::AlreadyInitialized => write!(f, "saju engine already initialized"),
            Self::Search(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::InvalidLegacyRecord(msg) => write!(f, "invalid legacy record: {msg}"),
            Self::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl Error for SajuError {}

impl From<SearchError> for SajuError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ConfigError> for SajuError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<serde_json::Error> for SajuError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
