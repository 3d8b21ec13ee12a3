//! Timetable domain models.
//!
//! Provides the data types exchanged with the rest of a school system:
//! lessons as delivered by the timetable API, the period schedule used to
//! turn period numbers into wall-clock times, and the clock helpers both
//! rely on.
//!
//! # Wire Format
//!
//! | Type | JSON shape |
//! |------|-----------|
//! | `LessonItem` | `{ id, term, dayOfWeek, startTime?, endTime?, startPeriod?, endPeriod?, courseName, ... }` |
//! | `PeriodSlot` | `{ no, label, startTime, endTime, isBreak? }` |
//! | `WeekSpec` | `"1-16"`, `"1,3,5"`, `""` or `[1, 3, 5]` |

mod clock;
mod lesson;
mod period;
mod weeks;

pub use clock::{
    format_minutes, time_to_minutes, time_to_minutes_strict, ClockRange, TimeParsing,
};
pub use lesson::{filter_for_week, LessonItem, Weekday};
pub use period::{find_slot, PeriodSchedule, PeriodSlot};
pub use weeks::{WeekSpec, WeekType};
