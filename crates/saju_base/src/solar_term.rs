//! The 24 solar terms (절기).
//!
//! Each term starts when the Sun's apparent ecliptic longitude reaches a
//! multiple of 15°. Numbering starts at Minor Cold (小寒, 285°), the first
//! term of the Gregorian year, so Lichun (立春, 315°) is index 2. The even
//! indices are the twelve Jie (節) terms that open the solar months; the odd
//! indices are the Qi (氣) mid-month terms.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::util::normalize_360;

/// Number of solar terms in a year.
pub const SOLAR_TERM_COUNT: usize = 24;

/// Index of 立春 (Lichun), the start of the Saju year.
pub const LICHUN_INDEX: u8 = 2;

/// Apparent solar longitude of term index 0 (小寒).
pub const FIRST_TERM_LONGITUDE_DEG: f64 = 285.0;

/// Degrees between consecutive terms.
pub const TERM_SPACING_DEG: f64 = 15.0;

/// One of the 24 solar terms, in Gregorian-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// All 24 terms in order (0 = 小寒, 23 = 冬至).
pub const ALL_SOLAR_TERMS: [SolarTerm; SOLAR_TERM_COUNT] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const TERM_HANJA: [&str; SOLAR_TERM_COUNT] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

const TERM_HANGUL: [&str; SOLAR_TERM_COUNT] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

const TERM_ENGLISH: [&str; SOLAR_TERM_COUNT] = [
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Full",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
];

impl SolarTerm {
    /// 0-based index (小寒 = 0 .. 冬至 = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at a 0-based index, `None` past 23.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < SOLAR_TERM_COUNT {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self as usize]
    }

    pub const fn hangul(self) -> &'static str {
        TERM_HANGUL[self as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        TERM_ENGLISH[self as usize]
    }

    /// Apparent solar longitude at which the term begins, in [0, 360).
    pub fn longitude_deg(self) -> f64 {
        normalize_360(FIRST_TERM_LONGITUDE_DEG + TERM_SPACING_DEG * self.index() as f64)
    }

    /// Whether the term opens a solar month (節).
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch of the solar month this term opens, `None` for mid-month terms.
    ///
    /// 小寒 opens 丑, 立春 opens 寅, … 大雪 opens 子.
    pub const fn month_branch(self) -> Option<Branch> {
        if self.is_jie() {
            Some(ALL_BRANCHES[((self.index() / 2 + 1) % 12) as usize])
        } else {
            None
        }
    }

    /// The following term, wrapping 冬至 → 小寒.
    pub const fn next(self) -> Self {
        ALL_SOLAR_TERMS[(self.index() as usize + 1) % SOLAR_TERM_COUNT]
    }

    /// The preceding term, wrapping 小寒 → 冬至.
    pub const fn prev(self) -> Self {
        ALL_SOLAR_TERMS[(self.index() as usize + SOLAR_TERM_COUNT - 1) % SOLAR_TERM_COUNT]
    }

    /// All 24 terms in order.
    pub const fn all() -> &'static [SolarTerm; SOLAR_TERM_COUNT] {
        &ALL_SOLAR_TERMS
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

/// Term in force at an apparent solar longitude (degrees, any range).
///
/// The term whose start longitude is the greatest one not exceeding `deg`.
pub fn solar_term_from_longitude(deg: f64) -> SolarTerm {
    let offset = normalize_360(deg - FIRST_TERM_LONGITUDE_DEG);
    let idx = (offset / TERM_SPACING_DEG).floor() as usize;
    ALL_SOLAR_TERMS[idx.min(SOLAR_TERM_COUNT - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(SolarTerm::from_index(i as u8), Some(*t));
        }
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn longitudes() {
        assert!((SolarTerm::Sohan.longitude_deg() - 285.0).abs() < 1e-12);
        assert!((SolarTerm::Ipchun.longitude_deg() - 315.0).abs() < 1e-12);
        assert!(SolarTerm::Chunbun.longitude_deg().abs() < 1e-12);
        assert!((SolarTerm::Haji.longitude_deg() - 90.0).abs() < 1e-12);
        assert!((SolarTerm::Chubun.longitude_deg() - 180.0).abs() < 1e-12);
        assert!((SolarTerm::Dongji.longitude_deg() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn lichun_is_index_two() {
        assert_eq!(SolarTerm::Ipchun.index(), LICHUN_INDEX);
        assert_eq!(SolarTerm::Ipchun.hanja(), "立春");
        assert_eq!(SolarTerm::Ipchun.hangul(), "입춘");
    }

    #[test]
    fn twelve_jie_with_distinct_branches() {
        let branches: Vec<Branch> = ALL_SOLAR_TERMS
            .iter()
            .filter_map(|t| t.month_branch())
            .collect();
        assert_eq!(branches.len(), 12);
        for b in ALL_BRANCHES {
            assert!(branches.contains(&b));
        }
        assert_eq!(SolarTerm::Sohan.month_branch(), Some(Branch::Chuk));
        assert_eq!(SolarTerm::Ipchun.month_branch(), Some(Branch::In));
        assert_eq!(SolarTerm::Ipha.month_branch(), Some(Branch::Sa));
        assert_eq!(SolarTerm::Daeseol.month_branch(), Some(Branch::Ja));
        assert_eq!(SolarTerm::Usu.month_branch(), None);
    }

    #[test]
    fn term_from_longitude() {
        assert_eq!(solar_term_from_longitude(285.0), SolarTerm::Sohan);
        assert_eq!(solar_term_from_longitude(299.99), SolarTerm::Sohan);
        assert_eq!(solar_term_from_longitude(315.0), SolarTerm::Ipchun);
        assert_eq!(solar_term_from_longitude(0.5), SolarTerm::Chunbun);
        assert_eq!(solar_term_from_longitude(284.9), SolarTerm::Dongji);
        assert_eq!(solar_term_from_longitude(-75.0), SolarTerm::Sohan);
    }

    #[test]
    fn next_prev_wrap() {
        assert_eq!(SolarTerm::Dongji.next(), SolarTerm::Sohan);
        assert_eq!(SolarTerm::Sohan.prev(), SolarTerm::Dongji);
        for t in ALL_SOLAR_TERMS {
            assert_eq!(t.next().prev(), t);
        }
    }
}
