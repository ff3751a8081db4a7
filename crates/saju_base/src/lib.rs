//! Heavenly stems, earthly branches, the sexagenary cycle and solar terms.
//!
//! Everything here is pure lookup and modular arithmetic with no
//! dependencies; the astronomical and calendrical layers build on it.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod solar_term;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, Animal, Branch};
pub use cycle::{CYCLE_LENGTH, Pillar, advance, branch_at, cycle_index_of, stem_at};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::CycleError;
pub use solar_term::{
    ALL_SOLAR_TERMS, FIRST_TERM_LONGITUDE_DEG, LICHUN_INDEX, SOLAR_TERM_COUNT, SolarTerm,
    TERM_SPACING_DEG, solar_term_from_longitude,
};
pub use stem::{ALL_STEMS, Stem};
pub use util::{normalize_360, normalize_pm180};
