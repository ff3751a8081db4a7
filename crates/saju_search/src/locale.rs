//! Locale profiles and wall-clock normalisation.
//!
//! A profile carries a fixed correction applied to the birth clock before
//! the hour and the comparison instant are derived. Korean practice
//! subtracts 30 minutes: civil time runs on the 135°E meridian while the
//! peninsula sits near 127.5°E.

use saju_time::{CivilDateTime, validate_offset};

use crate::error::SearchError;

/// Locale family of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Korean,
    Other,
}

impl Locale {
    /// Map a locale tag to a family. `ko`, `ko-KR`, `ko_KR` and `kr` (any
    /// case) are Korean; everything else is Other.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "ko" | "kr" => Self::Korean,
            _ => Self::Other,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::Other => "other",
        }
    }
}

/// Clock correction and default zone of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleProfile {
    pub locale: Locale,
    /// Minutes added to the wall clock before hour and instant derivation.
    pub fixed_offset_minutes: i32,
    /// Zone assumed when the input text carries no UTC offset.
    pub default_utc_offset_minutes: i32,
}

impl LocaleProfile {
    /// Korean: −30 minute correction, KST (+09:00) by default.
    pub const KOREAN: Self = Self {
        locale: Locale::Korean,
        fixed_offset_minutes: -30,
        default_utc_offset_minutes: 9 * 60,
    };

    /// Everything else: no correction, UTC by default.
    pub const OTHER: Self = Self {
        locale: Locale::Other,
        fixed_offset_minutes: 0,
        default_utc_offset_minutes: 0,
    };

    /// Built-in profile for a locale family.
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Korean => Self::KOREAN,
            Locale::Other => Self::OTHER,
        }
    }

    /// Built-in profile for a locale tag.
    pub fn for_tag(tag: &str) -> Self {
        Self::for_locale(Locale::from_tag(tag))
    }

    /// Validate a custom profile.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.fixed_offset_minutes.abs() > 12 * 60 {
            return Err("fixed_offset_minutes must be within ±720");
        }
        validate_offset(self.default_utc_offset_minutes)
            .map_err(|_| "default_utc_offset_minutes must be within ±840")
    }

    /// Apply this profile's correction to a wall clock.
    pub fn normalize(&self, civil: &CivilDateTime) -> Result<CivilDateTime, SearchError> {
        Ok(civil.add_minutes(self.fixed_offset_minutes)?)
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::OTHER
    }
}

/// Corrected wall clock for `civil` under `profile`.
pub fn normalize(civil: &CivilDateTime, profile: &LocaleProfile) -> Result<CivilDateTime, SearchError> {
    profile.normalize(civil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_tags() {
        for tag in ["ko", "ko-KR", "ko_KR", "kr", "KO-kr", " Ko "] {
            assert_eq!(Locale::from_tag(tag), Locale::Korean, "{tag}");
        }
    }

    #[test]
    fn other_tags() {
        for tag in ["en", "en-US", "ja", "", "kor", "zh-Hans"] {
            assert_eq!(Locale::from_tag(tag), Locale::Other, "{tag}");
        }
    }

    #[test]
    fn korean_subtracts_thirty_minutes() {
        let civil = CivilDateTime::new(1990, 5, 15, 14, 30, 0).unwrap();
        let corrected = normalize(&civil, &LocaleProfile::KOREAN).unwrap();
        assert_eq!(corrected, CivilDateTime::new(1990, 5, 15, 14, 0, 0).unwrap());
    }

    #[test]
    fn other_is_identity() {
        let civil = CivilDateTime::new(1990, 5, 15, 14, 30, 0).unwrap();
        assert_eq!(LocaleProfile::OTHER.normalize(&civil).unwrap(), civil);
    }

    #[test]
    fn correction_can_cross_midnight() {
        let civil = CivilDateTime::new(2000, 1, 1, 0, 15, 0).unwrap();
        let corrected = LocaleProfile::KOREAN.normalize(&civil).unwrap();
        assert_eq!(corrected, CivilDateTime::new(1999, 12, 31, 23, 45, 0).unwrap());
    }

    #[test]
    fn profile_validation() {
        assert!(LocaleProfile::KOREAN.validate().is_ok());
        let bad = LocaleProfile {
            default_utc_offset_minutes: 900,
            ..LocaleProfile::OTHER
        };
        assert!(bad.validate().is_err());
    }
}
