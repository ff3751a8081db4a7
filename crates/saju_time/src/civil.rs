//! Civil (wall-clock) date-time values and the textual input format.
//!
//! A [`CivilDateTime`] is a local calendar date and clock reading with no
//! zone attached. Zone information travels separately as a UTC offset in
//! minutes, so the same wall clock can be reinterpreted under a locale's
//! correction without touching the date parser.
//!
//! Accepted text forms (see [`CivilStamp::parse`]):
//!
//! ```text
//! 1990-05-15
//! 1990-05-15T14:30
//! 1990-05-15 14:30:05
//! 1990-05-15T14:30:05.250+09:00
//! 1990-05-15T05:30Z
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest accepted UTC offset magnitude in minutes (±14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Local calendar date and wall-clock time, whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    inner: NaiveDateTime,
}

impl CivilDateTime {
    /// Build from calendar fields, rejecting non-existent dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidCivilDateTime(format!("no such date {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            TimeError::InvalidCivilDateTime(format!(
                "no such time {hour:02}:{minute:02}:{second:02}"
            ))
        })?;
        Ok(Self {
            inner: NaiveDateTime::new(date, time),
        })
    }

    /// Local midnight at the start of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            inner: date.and_time(NaiveTime::MIN),
        }
    }

    /// Wrap a chrono value, dropping sub-second precision.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let time = dt.time();
        let whole = NaiveTime::from_hms_opt(time.hour(), time.minute(), time.second())
            .unwrap_or(NaiveTime::MIN);
        Self {
            inner: dt.date().and_time(whole),
        }
    }

    /// Wall clock at `offset_minutes` east of UTC for a UTC instant.
    pub fn from_utc(instant: DateTime<Utc>, offset_minutes: i32) -> Result<Self, TimeError> {
        let local = instant
            .naive_utc()
            .checked_add_signed(TimeDelta::minutes(offset_minutes as i64))
            .ok_or(TimeError::Overflow)?;
        Ok(Self::from_naive(local))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.inner
    }

    /// Calendar date component.
    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// Shift the wall clock by a signed number of minutes.
    pub fn add_minutes(&self, minutes: i32) -> Result<Self, TimeError> {
        self.inner
            .checked_add_signed(TimeDelta::minutes(minutes as i64))
            .map(|inner| Self { inner })
            .ok_or(TimeError::Overflow)
    }

    /// Interpret this wall clock at `offset_minutes` east of UTC.
    pub fn to_utc(&self, offset_minutes: i32) -> Result<DateTime<Utc>, TimeError> {
        validate_offset(offset_minutes)?;
        self.inner
            .checked_sub_signed(TimeDelta::minutes(offset_minutes as i64))
            .map(|naive| naive.and_utc())
            .ok_or(TimeError::Overflow)
    }

    /// Julian Date of this wall clock read on the same scale (no zone shift).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day() as f64
            + self.hour() as f64 / 24.0
            + self.minute() as f64 / 1440.0
            + self.second() as f64 / 86_400.0;
        calendar_to_jd(self.year(), self.month(), day_frac)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%dT%H:%M:%S"))
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse the wall-clock part only; any offset suffix is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stamp = CivilStamp::parse(s)?;
        if stamp.utc_offset_minutes.is_some() {
            return Err(TimeError::InvalidCivilDateTime(format!(
                "unexpected UTC offset in '{s}'"
            )));
        }
        Ok(stamp.civil)
    }
}

/// A parsed textual timestamp: wall clock plus what the text said about
/// the clock and the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilStamp {
    /// Wall clock (midnight when the text had no time part).
    pub civil: CivilDateTime,
    /// Offset east of UTC if the text carried one (`Z`, `+09:00`, `-0330`).
    pub utc_offset_minutes: Option<i32>,
    /// Whether the text carried a time part at all.
    pub has_time: bool,
}

impl CivilStamp {
    /// Parse `YYYY-MM-DD[(T| )HH:MM[:SS[.fff]][Z|±HH:MM|±HHMM]]`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(invalid(s, "empty input"));
        }
        let (date_part, time_part) = match s.find(['T', 't', ' ']) {
            Some(pos) => (&s[..pos], Some(s[pos + 1..].trim())),
            None => (s, None),
        };
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| invalid(s, &e.to_string()))?;

        let Some(time_part) = time_part else {
            return Ok(Self {
                civil: CivilDateTime::from_date(date),
                utc_offset_minutes: None,
                has_time: false,
            });
        };

        let (clock, offset) = split_offset(time_part).map_err(|msg| invalid(s, msg))?;
        let time = parse_clock(clock).ok_or_else(|| invalid(s, "bad clock value"))?;
        if let Some(min) = offset {
            validate_offset(min)?;
        }
        Ok(Self {
            civil: CivilDateTime::from_naive(NaiveDateTime::new(date, time)),
            utc_offset_minutes: offset,
            has_time: true,
        })
    }
}

impl FromStr for CivilStamp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reject offsets beyond ±14:00.
pub fn validate_offset(offset_minutes: i32) -> Result<(), TimeError> {
    if offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(TimeError::OffsetOutOfRange(offset_minutes));
    }
    Ok(())
}

fn invalid(input: &str, msg: &str) -> TimeError {
    TimeError::InvalidCivilDateTime(format!("'{input}': {msg}"))
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let parsed = NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()?;
    // chrono accepts a leap second as 23:59:60; a birth clock cannot.
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(parsed)
}

/// Split `14:30+09:00` into (`14:30`, Some(540)).
fn split_offset(time_part: &str) -> Result<(&str, Option<i32>), &'static str> {
    if let Some(clock) = time_part
        .strip_suffix('Z')
        .or_else(|| time_part.strip_suffix('z'))
    {
        return Ok((clock, Some(0)));
    }
    let Some(pos) = time_part.rfind(['+', '-']) else {
        return Ok((time_part, None));
    };
    let (clock, zone) = time_part.split_at(pos);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("bad UTC offset");
    }
    let hours: i32 = digits[..2].parse().map_err(|_| "bad UTC offset")?;
    let minutes: i32 = digits[2..].parse().map_err(|_| "bad UTC offset")?;
    if minutes >= 60 {
        return Err("bad UTC offset");
    }
    Ok((clock, Some(sign * (hours * 60 + minutes))))
}
