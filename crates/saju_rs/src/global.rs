//! Process-wide engine state.
//!
//! Initialised once with a [`SajuConfig`]; afterwards only the solar-term
//! memo inside it changes, under its own lock.

use std::sync::OnceLock;

use saju_config::SajuConfig;
use saju_search::{AstronomicalTerms, CachedTerms, FourPillarsCalculator};

use crate::error::SajuError;

pub(crate) struct Global {
    pub(crate) config: SajuConfig,
    pub(crate) calculator: FourPillarsCalculator<CachedTerms<AstronomicalTerms>>,
}

static GLOBAL: OnceLock<Global> = OnceLock::new();

/// Initialise the global engine. Fails if already initialised.
pub fn init(config: SajuConfig) -> Result<(), SajuError> {
    config.validate()?;
    let terms = AstronomicalTerms::new(config.search_config())?;
    let global = Global {
        config,
        calculator: FourPillarsCalculator::new(CachedTerms::new(terms)),
    };
    GLOBAL
        .set(global)
        .map_err(|_| SajuError::AlreadyInitialized)?;
    tracing::debug!("saju engine initialized");
    Ok(())
}

/// Whether [`init`] has completed.
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

pub(crate) fn global() -> Result<&'static Global, SajuError> {
    GLOBAL.get().ok_or(SajuError::NotInitialized)
}
