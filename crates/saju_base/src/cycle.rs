//! Sexagenary cycle (육십갑자) arithmetic.
//!
//! Stems advance mod 10 and branches mod 12 in lockstep, so only pairs of
//! equal parity occur and the combined cycle has length lcm(10, 12) = 60.
//! A [`Pillar`] stores just its cycle index; stem and branch are derived.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::CycleError;
use crate::stem::{ALL_STEMS, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// Stem at any integer position (negative positions wrap).
pub fn stem_at(i: i64) -> Stem {
    ALL_STEMS[i.rem_euclid(10) as usize]
}

/// Branch at any integer position (negative positions wrap).
pub fn branch_at(i: i64) -> Branch {
    ALL_BRANCHES[i.rem_euclid(12) as usize]
}

/// Unique cycle index 0..60 of a stem/branch pair.
///
/// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)` as
/// `i = (6·stem − 5·branch) mod 60`, valid only for equal parity.
pub fn cycle_index_of(stem: Stem, branch: Branch) -> Result<u8, CycleError> {
    let s = stem.index() as i32;
    let b = branch.index() as i32;
    if s % 2 != b % 2 {
        return Err(CycleError::InvalidPillarCombination {
            stem: stem.index(),
            branch: branch.index(),
        });
    }
    Ok((6 * s - 5 * b).rem_euclid(60) as u8)
}

/// Move `delta` steps along the cycle, result in [0, 60).
pub fn advance(i: u8, delta: i64) -> u8 {
    (i as i64 + delta).rem_euclid(CYCLE_LENGTH as i64) as u8
}

/// One stem/branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pillar {
    index: u8,
}

impl Pillar {
    /// Pillar from a stem and branch, rejecting mixed parity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CycleError> {
        Ok(Self {
            index: cycle_index_of(stem, branch)?,
        })
    }

    /// Pillar from a cycle index in 0..60.
    pub fn from_index(index: u8) -> Result<Self, CycleError> {
        if index >= CYCLE_LENGTH {
            return Err(CycleError::IndexOutOfRange(index));
        }
        Ok(Self { index })
    }

    /// Pillar at any integer position, wrapped into the cycle.
    pub fn from_position(position: i64) -> Self {
        Self {
            index: advance(0, position),
        }
    }

    /// Parse two characters (stem then branch), hanja or hangul.
    pub fn from_chars(stem: char, branch: char) -> Result<Self, CycleError> {
        let s = Stem::from_char(stem).ok_or(CycleError::UnknownSymbol(stem))?;
        let b = Branch::from_char(branch).ok_or(CycleError::UnknownSymbol(branch))?;
        Self::new(s, b)
    }

    /// 0-based cycle index (甲子 = 0 .. 癸亥 = 59).
    pub const fn index(self) -> u8 {
        self.index
    }

    pub fn stem(self) -> Stem {
        stem_at(self.index as i64)
    }

    pub fn branch(self) -> Branch {
        branch_at(self.index as i64)
    }

    /// Pillar `delta` steps further along the cycle.
    pub fn advance(self, delta: i64) -> Self {
        Self {
            index: advance(self.index, delta),
        }
    }

    /// Two hanja characters, e.g. `甲子`.
    pub fn hanja(self) -> String {
        [self.stem().hanja(), self.branch().hanja()].iter().collect()
    }

    /// Two hangul syllables, e.g. `갑자`.
    pub fn hangul(self) -> String {
        [self.stem().hangul(), self.branch().hangul()].iter().collect()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}
