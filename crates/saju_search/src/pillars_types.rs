//! Input and output types for Four Pillars calculation.

use std::fmt::{Display, Formatter};

use saju_base::Pillar;
use saju_time::{CivilDateTime, CivilStamp, validate_offset};

use crate::error::SearchError;
use crate::locale::LocaleProfile;

/// One birth moment as given by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    /// Wall clock as entered (midnight when the time is unknown).
    pub civil: CivilDateTime,
    /// Zone of the wall clock, minutes east of UTC.
    pub tz_offset_minutes: i32,
    /// Whether only the date is known.
    pub is_time_unknown: bool,
    /// Clock correction profile.
    pub profile: LocaleProfile,
}

impl BirthInput {
    /// Build an input, rejecting zone offsets beyond ±14:00.
    pub fn new(
        civil: CivilDateTime,
        tz_offset_minutes: i32,
        is_time_unknown: bool,
        profile: LocaleProfile,
    ) -> Result<Self, SearchError> {
        validate_offset(tz_offset_minutes)?;
        Ok(Self {
            civil,
            tz_offset_minutes,
            is_time_unknown,
            profile,
        })
    }

    /// Parse birth text such as `1990-05-15T14:30` or `1990-05-15T14:30+09:00`.
    ///
    /// The zone comes from the text when present, else from the profile's
    /// default. A known-time request must carry a clock value.
    pub fn parse(
        text: &str,
        is_time_unknown: bool,
        profile: LocaleProfile,
    ) -> Result<Self, SearchError> {
        let stamp = CivilStamp::parse(text)?;
        if !stamp.has_time && !is_time_unknown {
            return Err(SearchError::InvalidCivilDateTime(format!(
                "'{text}': time of day required unless the time is unknown"
            )));
        }
        let tz = stamp
            .utc_offset_minutes
            .unwrap_or(profile.default_utc_offset_minutes);
        Self::new(stamp.civil, tz, is_time_unknown, profile)
    }
}

/// Year, month, day and hour pillars of one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` exactly when the birth time is unknown.
    pub hour: Option<Pillar>,
}

impl FourPillars {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Option<Pillar>; 4] {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
    }

    pub fn is_time_unknown(&self) -> bool {
        self.hour.is_none()
    }
}

impl Display for FourPillars {
    /// Space-separated hanja, `--` for an unknown hour: `庚午 辛巳 庚辰 癸未`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} ", self.year, self.month, self.day)?;
        match self.hour {
            Some(h) => write!(f, "{h}"),
            None => f.write_str("--"),
        }
    }
}
