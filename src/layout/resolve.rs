//! Effective time resolution.
//!
//! A lesson's wall-clock range comes from one of two sources:
//!
//! 1. Explicit `startTime`/`endTime`, used verbatim when both parse.
//! 2. `startPeriod`/`endPeriod` looked up in the period schedule. A missing
//!    or unknown end period falls back to the start slot's end, so a lesson
//!    with only `startPeriod` occupies exactly that period.
//!
//! A lesson that resolves through neither cannot be placed.

use crate::models::{find_slot, ClockRange, LessonItem, PeriodSlot, TimeParsing};

/// Times derived from period numbers. Either end may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedTimes<'a> {
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

/// A lesson's resolved wall-clock range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveTimes {
    /// Start time as given by the source.
    pub start: String,
    /// End time as given by the source.
    pub end: String,
    /// Parsed minutes.
    pub range: ClockRange,
}

/// Derives start/end times from the lesson's period numbers.
///
/// Returns empty times when no schedule is given.
pub fn derive_times_from_periods<'a>(
    lesson: &LessonItem,
    slots: Option<&'a [PeriodSlot]>,
) -> DerivedTimes<'a> {
    let Some(slots) = slots else {
        return DerivedTimes::default();
    };

    let start_slot = lesson.start_period.and_then(|no| find_slot(slots, no));
    let end_slot = lesson.end_period.and_then(|no| find_slot(slots, no));

    let non_empty = |t: &'a String| Some(t.as_str()).filter(|t| !t.is_empty());
    DerivedTimes {
        start: start_slot.and_then(|s| non_empty(&s.start_time)),
        end: end_slot
            .and_then(|s| non_empty(&s.end_time))
            .or_else(|| start_slot.and_then(|s| non_empty(&s.end_time))),
    }
}

/// Resolves a lesson's effective times with lenient clock parsing.
///
/// # Examples
///
/// ```
/// use u_timetable::layout::get_effective_times;
/// use u_timetable::models::{LessonItem, PeriodSlot};
///
/// let slots = vec![
///     PeriodSlot::new(1, "Period 1", "08:00", "08:45"),
///     PeriodSlot::new(2, "Period 2", "08:55", "09:40"),
/// ];
/// let lesson = LessonItem::new("L1", 1).with_periods(1, 2);
///
/// let eff = get_effective_times(&lesson, Some(slots.as_slice())).unwrap();
/// assert_eq!((eff.start.as_str(), eff.end.as_str()), ("08:00", "09:40"));
/// ```
pub fn get_effective_times(
    lesson: &LessonItem,
    slots: Option<&[PeriodSlot]>,
) -> Option<EffectiveTimes> {
    resolve_effective_times(lesson, slots, TimeParsing::Lenient)
}

/// Resolves a lesson's effective times under the given parsing mode.
///
/// Explicit times win when both parse; otherwise period-derived times are
/// used when both ends are present and parse. `None` means unplaceable.
pub fn resolve_effective_times(
    lesson: &LessonItem,
    slots: Option<&[PeriodSlot]>,
    parsing: TimeParsing,
) -> Option<EffectiveTimes> {
    if let (Some(start), Some(end)) = (lesson.start_time.as_deref(), lesson.end_time.as_deref()) {
        if let Some(range) = ClockRange::parse(start, end, parsing) {
            return Some(EffectiveTimes {
                start: start.to_string(),
                end: end.to_string(),
                range,
            });
        }
    }

    let derived = derive_times_from_periods(lesson, slots);
    let (start, end) = (derived.start?, derived.end?);
    let range = ClockRange::parse(start, end, parsing)?;
    Some(EffectiveTimes {
        start: start.to_string(),
        end: end.to_string(),
        range,
    })
}
