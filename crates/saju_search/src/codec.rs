//! Equality and canonical text keys for Four Pillars.
//!
//! Two requests describe the same Saju exactly when their eight characters
//! match; the original timestamp, zone and locale play no part. The
//! canonical key is the fixed-order hanja string, with `--` standing in for
//! an unknown hour, so it can serve directly as a cache key.

use saju_base::Pillar;

use crate::error::SearchError;
use crate::pillars_types::FourPillars;

/// Key text for an unknown hour.
pub const UNKNOWN_HOUR_KEY: &str = "--";

/// Whether two results share all four pillars (two unknown hours match).
pub fn equals(a: &FourPillars, b: &FourPillars) -> bool {
    a.pillars() == b.pillars()
}

/// `庚午辛巳庚辰癸未`, or `庚午辛巳庚辰--` without an hour.
pub fn canonical_key(p: &FourPillars) -> String {
    let mut key = String::with_capacity(8 * 3);
    for pillar in [p.year, p.month, p.day] {
        key.push_str(&pillar.hanja());
    }
    match p.hour {
        Some(h) => key.push_str(&h.hanja()),
        None => key.push_str(UNKNOWN_HOUR_KEY),
    }
    key
}

/// Inverse of [`canonical_key`]. Hangul syllables are accepted too.
pub fn parse_canonical_key(key: &str) -> Result<FourPillars, SearchError> {
    let chars: Vec<char> = key.trim().chars().collect();
    if chars.len() != 8 {
        return Err(SearchError::InvalidCanonicalKey(format!(
            "'{key}': expected 8 characters, found {}",
            chars.len()
        )));
    }
    let pillar = |i: usize| Pillar::from_chars(chars[2 * i], chars[2 * i + 1]);
    let hour = if chars[6..] == ['-', '-'] {
        None
    } else {
        Some(pillar(3)?)
    };
    Ok(FourPillars::new(pillar(0)?, pillar(1)?, pillar(2)?, hour))
}
