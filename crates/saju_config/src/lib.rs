//! TOML configuration for the saju engine.
//!
//! ```toml
//! [locale.ko]
//! fixed_offset_minutes = -30
//! utc_offset_minutes = 540
//!
//! [search]
//! step_days = 1.0
//! max_iterations = 60
//! convergence_days = 1e-6
//!
//! [log]
//! filter = "info"
//! ```
//!
//! Every section and field is optional. Missing values fall back to the
//! built-in locale profiles and search defaults.

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

use saju_search::{Locale, LocaleProfile, SolarTermConfig};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    /// Per-tag locale overrides, keyed by lower-case locale tag.
    pub locale: BTreeMap<String, LocaleSection>,
    pub search: SearchSection,
    pub log: LogSection,
}

/// `[locale.<tag>]`: overrides for one locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleSection {
    /// Wall-clock correction in minutes; defaults to the tag's built-in.
    pub fixed_offset_minutes: Option<i32>,
    /// Zone assumed for inputs without an offset; defaults to the built-in.
    pub utc_offset_minutes: Option<i32>,
}

/// `[search]`: solar-term search tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub step_days: f64,
    pub max_iterations: u32,
    pub convergence_days: f64,
}

impl Default for SearchSection {
    fn default() -> Self {
        let d = SolarTermConfig::default();
        Self {
            step_days: d.step_days,
            max_iterations: d.max_iterations,
            convergence_days: d.convergence_days,
        }
    }
}

/// `[log]`: logging filter for front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// `tracing` env-filter directive, e.g. `"info"` or `"saju_search=debug"`.
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SajuConfig {
    /// Read, parse and validate a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), locales = config.locale.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.locale = config
            .locale
            .into_iter()
            .map(|(tag, section)| (tag.trim().to_ascii_lowercase(), section))
            .collect();
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search_config()
            .validate()
            .map_err(|message| ConfigError::Invalid {
                field: "search".to_string(),
                message,
            })?;
        for tag in self.locale.keys() {
            self.locale_profile(tag)
                .validate()
                .map_err(|message| ConfigError::Invalid {
                    field: format!("locale.{tag}"),
                    message,
                })?;
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log.filter".to_string(),
                message: "filter must not be empty",
            });
        }
        Ok(())
    }

    /// Search configuration from `[search]`.
    pub fn search_config(&self) -> SolarTermConfig {
        SolarTermConfig {
            step_days: self.search.step_days,
            max_iterations: self.search.max_iterations,
            convergence_days: self.search.convergence_days,
        }
    }

    /// Locale profile for a tag: the built-in profile of its family with
    /// any `[locale.<tag>]` overrides applied.
    pub fn locale_profile(&self, tag: &str) -> LocaleProfile {
        let key = tag.trim().to_ascii_lowercase();
        let locale = Locale::from_tag(&key);
        let builtin = LocaleProfile::for_locale(locale);
        match self.locale.get(&key) {
            Some(section) => LocaleProfile {
                locale,
                fixed_offset_minutes: section
                    .fixed_offset_minutes
                    .unwrap_or(builtin.fixed_offset_minutes),
                default_utc_offset_minutes: section
                    .utc_offset_minutes
                    .unwrap_or(builtin.default_utc_offset_minutes),
            },
            None => builtin,
        }
    }
}
