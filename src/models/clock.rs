//! Wall-clock time parsing and minute ranges.
//!
//! Times of day travel as `H:MM` / `HH:MM` strings and are handled
//! internally as minutes since midnight.
//!
//! # Leniency
//! [`time_to_minutes`] checks digit shape only, so `"25:99"` parses as
//! 1599 minutes. [`TimeParsing::Strict`] adds `HH < 24` and `MM < 60`.

use serde::{Deserialize, Serialize};

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
///
/// Returns `None` for anything else: empty strings, seconds, suffixes
/// like `"8am"`, surrounding whitespace.
///
/// # Examples
///
/// ```
/// use u_timetable::models::time_to_minutes;
///
/// assert_eq!(time_to_minutes("08:00"), Some(480));
/// assert_eq!(time_to_minutes("8:00"), Some(480));
/// assert_eq!(time_to_minutes("8am"), None);
/// ```
pub fn time_to_minutes(t: &str) -> Option<u32> {
    let (hours, minutes) = t.split_once(':')?;
    let shape_ok = (1..=2).contains(&hours.len())
        && minutes.len() == 2
        && hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    Some(h * 60 + m)
}

/// Like [`time_to_minutes`], but rejects hours >= 24 and minutes >= 60.
pub fn time_to_minutes_strict(t: &str) -> Option<u32> {
    let total = time_to_minutes(t)?;
    let (hours, minutes) = t.split_once(':')?;
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    (h < 24 && m < 60).then_some(total)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// How clock strings are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeParsing {
    /// Digit shape only (`"25:99"` is accepted).
    #[default]
    Lenient,
    /// Digit shape plus hour/minute range checks.
    Strict,
}

impl TimeParsing {
    /// Parses a clock string under this mode.
    #[inline]
    pub fn parse(self, t: &str) -> Option<u32> {
        match self {
            TimeParsing::Lenient => time_to_minutes(t),
            TimeParsing::Strict => time_to_minutes_strict(t),
        }
    }
}

/// A minute-of-day range [start, end).
///
/// Half-open: a range ending at 10:00 does not overlap one starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockRange {
    /// Start minute (inclusive).
    pub start: u32,
    /// End minute (exclusive).
    pub end: u32,
}

impl ClockRange {
    /// Creates a new range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Parses a pair of clock strings.
    pub fn parse(start: &str, end: &str, parsing: TimeParsing) -> Option<Self> {
        Some(Self::new(parsing.parse(start)?, parsing.parse(end)?))
    }

    /// Whether the end precedes the start.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
