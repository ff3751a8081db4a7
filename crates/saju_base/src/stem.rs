//! Heavenly stems (천간).
//!
//! Ten stems cycle 甲乙丙丁戊己庚辛壬癸. Each pair shares an element and
//! the even member of the pair is Yang. Variant names follow the Korean
//! reading.

use std::fmt::{Display, Formatter};

use crate::element::{Element, Polarity};

/// The ten heavenly stems, starting from 甲 (Gap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_HANGUL: [char; 10] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];
const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a 0-based index, `None` past 9.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Romanised Korean reading.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Hanja character.
    pub const fn hanja(self) -> char {
        STEM_HANJA[self as usize]
    }

    /// Hangul syllable.
    pub const fn hangul(self) -> char {
        STEM_HANGUL[self as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self as u8)
    }

    /// Look a stem up by its hanja or hangul character.
    pub fn from_char(c: char) -> Option<Self> {
        STEM_HANJA
            .iter()
            .position(|&h| h == c)
            .or_else(|| STEM_HANGUL.iter().position(|&h| h == c))
            .map(|i| ALL_STEMS[i])
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Some(*s));
        }
        assert_eq!(Stem::from_index(10), None);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Eul.element(), Element::Wood);
        assert_eq!(Stem::Gyeong.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
        assert_eq!(Stem::Im.polarity(), Polarity::Yang);
    }

    #[test]
    fn lookup_by_either_script() {
        assert_eq!(Stem::from_char('庚'), Some(Stem::Gyeong));
        assert_eq!(Stem::from_char('경'), Some(Stem::Gyeong));
        assert_eq!(Stem::from_char('子'), None);
    }

    #[test]
    fn display_is_hanja() {
        assert_eq!(Stem::Sin.to_string(), "辛");
        assert_eq!(Stem::Sin.hangul(), '신');
    }
}
