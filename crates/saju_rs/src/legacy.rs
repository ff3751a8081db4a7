//! The flat `sky`/`grd` record used by existing stores and clients.
//!
//! Index 3 is the year, 2 the month, 1 the day and 0 the hour; `sky` holds
//! the stem and `grd` the branch, each as one hangul syllable. The hour
//! fields are null when the birth time is unknown.

use saju_base::{Branch, Pillar, Stem};
use saju_search::FourPillars;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Field names in year, month, day, hour order.
pub const LEGACY_KEYS: [&str; 8] = ["sky3", "grd3", "sky2", "grd2", "sky1", "grd1", "sky0", "grd0"];

/// Legacy record form of [`FourPillars`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegacyPillars {
    pub sky3: String,
    pub grd3: String,
    pub sky2: String,
    pub grd2: String,
    pub sky1: String,
    pub grd1: String,
    pub sky0: Option<String>,
    pub grd0: Option<String>,
}

fn stem_text(p: Pillar) -> String {
    p.stem().hangul().to_string()
}

fn branch_text(p: Pillar) -> String {
    p.branch().hangul().to_string()
}

impl From<&FourPillars> for LegacyPillars {
    fn from(fp: &FourPillars) -> Self {
        Self {
            sky3: stem_text(fp.year),
            grd3: branch_text(fp.year),
            sky2: stem_text(fp.month),
            grd2: branch_text(fp.month),
            sky1: stem_text(fp.day),
            grd1: branch_text(fp.day),
            sky0: fp.hour.map(stem_text),
            grd0: fp.hour.map(branch_text),
        }
    }
}

fn single_char(field: &str, text: &str) -> Result<char, SajuError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SajuError::InvalidLegacyRecord(format!(
            "{field}: expected one character, found '{text}'"
        ))),
    }
}

fn pillar_from(
    sky_field: &str,
    sky: &str,
    grd_field: &str,
    grd: &str,
) -> Result<Pillar, SajuError> {
    let s = single_char(sky_field, sky)?;
    let b = single_char(grd_field, grd)?;
    let stem = Stem::from_char(s)
        .ok_or_else(|| SajuError::InvalidLegacyRecord(format!("{sky_field}: unknown stem '{s}'")))?;
    let branch = Branch::from_char(b).ok_or_else(|| {
        SajuError::InvalidLegacyRecord(format!("{grd_field}: unknown branch '{b}'"))
    })?;
    Pillar::new(stem, branch)
        .map_err(|e| SajuError::InvalidLegacyRecord(format!("{sky_field}/{grd_field}: {e}")))
}

impl TryFrom<&LegacyPillars> for FourPillars {
    type Error = SajuError;

    /// Accepts hangul or hanja characters.
    fn try_from(r: &LegacyPillars) -> Result<Self, Self::Error> {
        let year = pillar_from("sky3", &r.sky3, "grd3", &r.grd3)?;
        let month = pillar_from("sky2", &r.sky2, "grd2", &r.grd2)?;
        let day = pillar_from("sky1", &r.sky1, "grd1", &r.grd1)?;
        let hour = match (&r.sky0, &r.grd0) {
            (Some(s), Some(g)) => Some(pillar_from("sky0", s, "grd0", g)?),
            (None, None) => None,
            _ => {
                return Err(SajuError::InvalidLegacyRecord(
                    "sky0 and grd0 must both be set or both be null".to_string(),
                ));
            }
        };
        Ok(FourPillars::new(year, month, day, hour))
    }
}

impl LegacyPillars {
    pub fn to_json(&self) -> Result<String, SajuError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SajuError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Whether two legacy records name the same Saju.
///
/// Records are compared by their decoded pillars, so hanja and hangul
/// spellings match. A record that does not decode equals nothing.
pub fn legacy_equals(a: &LegacyPillars, b: &LegacyPillars) -> bool {
    match (FourPillars::try_from(a), FourPillars::try_from(b)) {
        (Ok(x), Ok(y)) => saju_search::equals(&x, &y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden() -> FourPillars {
        saju_search::parse_canonical_key("庚午辛巳庚辰癸未").unwrap()
    }

    #[test]
    fn hangul_fields() {
        let r = LegacyPillars::from(&golden());
        assert_eq!((r.sky3.as_str(), r.grd3.as_str()), ("경", "오"));
        assert_eq!((r.sky2.as_str(), r.grd2.as_str()), ("신", "사"));
        assert_eq!((r.sky1.as_str(), r.grd1.as_str()), ("경", "진"));
        assert_eq!(r.sky0.as_deref(), Some("계"));
        assert_eq!(r.grd0.as_deref(), Some("미"));
    }

    #[test]
    fn json_shape() {
        let mut fp = golden();
        fp.hour = None;
        let json = LegacyPillars::from(&fp).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in LEGACY_KEYS {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        assert!(v["sky0"].is_null());
        assert_eq!(v["sky3"], "경");
    }

    #[test]
    fn decode_back() {
        let r = LegacyPillars::from(&golden());
        assert_eq!(FourPillars::try_from(&r).unwrap(), golden());
        let parsed = LegacyPillars::from_json(&r.to_json().unwrap()).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn hanja_and_hangul_records_are_equal() {
        let hangul = LegacyPillars::from(&golden());
        let hanja = LegacyPillars {
            sky3: "庚".into(),
            grd3: "午".into(),
            sky2: "辛".into(),
            grd2: "巳".into(),
            sky1: "庚".into(),
            grd1: "辰".into(),
            sky0: Some("癸".into()),
            grd0: Some("未".into()),
        };
        assert!(legacy_equals(&hangul, &hanja));
    }

    #[test]
    fn broken_records() {
        let mut r = LegacyPillars::from(&golden());
        r.grd0 = None;
        assert!(matches!(
            FourPillars::try_from(&r),
            Err(SajuError::InvalidLegacyRecord(_))
        ));
        assert!(!legacy_equals(&r, &r));

        let mut r = LegacyPillars::from(&golden());
        r.grd3 = "축".into();
        assert!(FourPillars::try_from(&r).is_err());

        let mut r = LegacyPillars::from(&golden());
        r.sky1 = "경경".into();
        assert!(FourPillars::try_from(&r).is_err());
    }
}
