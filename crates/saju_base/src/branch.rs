//! Earthly branches (지지) and their zodiac animals.
//!
//! Twelve branches cycle 子丑寅卯辰巳午未申酉戌亥. Branch index also names
//! the two-hour block of the day (子 = 23:00–01:00) and, offset by two,
//! the solar month (寅 = the month opened by Lichun).

use std::fmt::{Display, Formatter};

use crate::element::{Element, Polarity};

/// The twelve earthly branches, starting from 子 (Ja).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_HANGUL: [char; 12] = [
    '자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해',
];
const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

/// Zodiac animal of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Animal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a 0-based index, `None` past 11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Romanised Korean reading.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    /// Hanja character.
    pub const fn hanja(self) -> char {
        BRANCH_HANJA[self as usize]
    }

    /// Hangul syllable.
    pub const fn hangul(self) -> char {
        BRANCH_HANGUL[self as usize]
    }

    pub const fn animal(self) -> Animal {
        match self {
            Self::Ja => Animal::Rat,
            Self::Chuk => Animal::Ox,
            Self::In => Animal::Tiger,
            Self::Myo => Animal::Rabbit,
            Self::Jin => Animal::Dragon,
            Self::Sa => Animal::Snake,
            Self::O => Animal::Horse,
            Self::Mi => Animal::Goat,
            Self::Sin => Animal::Monkey,
            Self::Yu => Animal::Rooster,
            Self::Sul => Animal::Dog,
            Self::Hae => Animal::Pig,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self as u8)
    }

    /// Look a branch up by its hanja or hangul character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_HANJA
            .iter()
            .position(|&h| h == c)
            .or_else(|| BRANCH_HANGUL.iter().position(|&h| h == c))
            .map(|i| ALL_BRANCHES[i])
    }

    /// Branch of the two-hour block containing a wall-clock hour (0..=23).
    ///
    /// 子 spans 23:00–00:59, 丑 01:00–02:59, … 亥 21:00–22:59.
    pub const fn from_clock_hour(hour: u32) -> Self {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}
