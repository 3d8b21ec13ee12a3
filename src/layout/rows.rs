//! Period-grid row mapping.
//!
//! In the period view each slot of the schedule is one row of equal height
//! and a lesson covers a contiguous run of rows. The run is found from the
//! lesson's times first, then from its period numbers.

use serde::{Deserialize, Serialize};

use crate::models::{LessonItem, PeriodSlot, TimeParsing};

/// Rows covered by a lesson in the period grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRowSpan {
    /// Zero-based index of the first covered slot.
    pub first_row: usize,
    /// Number of covered slots (at least 1).
    pub row_count: usize,
}

impl PeriodRowSpan {
    /// Zero-based index of the last covered slot.
    pub fn last_row(&self) -> usize {
        self.first_row + self.row_count - 1
    }
}

/// Maps a lesson onto period-grid rows.
///
/// - first row: first slot ending after the lesson starts, else the slot
///   numbered `startPeriod`;
/// - last row: first slot ending at or after the lesson ends, else the slot
///   numbered `endPeriod`;
/// - a missing first row takes the last row, then row 0; a missing last
///   row takes the first row.
///
/// Never fails; a lesson nothing matches lands on row 0.
pub fn period_row_span(
    lesson: &LessonItem,
    slots: &[PeriodSlot],
    parsing: TimeParsing,
) -> PeriodRowSpan {
    let slot_ends: Vec<Option<u32>> = slots.iter().map(|s| parsing.parse(&s.end_time)).collect();
    let minutes = |t: &Option<String>| t.as_deref().and_then(|t| parsing.parse(t));
    let position_of = |no: Option<u32>| no.and_then(|no| slots.iter().position(|s| s.no == no));

    let first = minutes(&lesson.start_time)
        .and_then(|start| slot_ends.iter().position(|e| e.is_some_and(|e| start < e)))
        .or_else(|| position_of(lesson.start_period));
    let last = minutes(&lesson.end_time)
        .and_then(|end| slot_ends.iter().position(|e| e.is_some_and(|e| end <= e)))
        .or_else(|| position_of(lesson.end_period));

    let first_row = first.or(last).unwrap_or(0);
    let last_row = last.unwrap_or(first_row);

    PeriodRowSpan {
        first_row,
        row_count: if last_row >= first_row {
            last_row - first_row + 1
        } else {
            1
        },
    }
}
