//! Period slot model.
//!
//! A school day is tiled by period slots: numbered teaching periods plus
//! breaks. Breaks conventionally use `no = 0`, so a period number can be
//! shared by a break and a teaching slot; lookups prefer the teaching slot.

use serde::{Deserialize, Serialize};

use super::clock::{ClockRange, TimeParsing};

/// One teaching period or break in the daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSlot {
    /// Period number (0 for breaks, otherwise 1..N).
    pub no: u32,
    /// Display name ("Period 3", "Lunch").
    #[serde(default)]
    pub label: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// End time (`HH:MM`).
    pub end_time: String,
    /// Non-instructional slot.
    #[serde(default)]
    pub is_break: bool,
}

impl PeriodSlot {
    /// Creates a teaching period.
    pub fn new(
        no: u32,
        label: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            no,
            label: label.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_break: false,
        }
    }

    /// Creates a break slot numbered `no`.
    pub fn break_slot(
        no: u32,
        label: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            is_break: true,
            ..Self::new(no, label, start_time, end_time)
        }
    }

    /// Parsed time range, if both ends are well-formed.
    pub fn range(&self, parsing: TimeParsing) -> Option<ClockRange> {
        ClockRange::parse(&self.start_time, &self.end_time, parsing)
    }
}

/// Finds the slot numbered `no`, preferring a non-break slot.
pub fn find_slot(slots: &[PeriodSlot], no: u32) -> Option<&PeriodSlot> {
    slots
        .iter()
        .find(|s| s.no == no && !s.is_break)
        .or_else(|| slots.iter().find(|s| s.no == no))
}

/// An ordered daily period schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodSchedule {
    slots: Vec<PeriodSlot>,
}

impl PeriodSchedule {
    /// Creates a schedule from slots in day order.
    pub fn new(slots: Vec<PeriodSlot>) -> Self {
        Self { slots }
    }

    /// Uses `slots` unless empty, in which case the K12 default applies.
    pub fn or_default(slots: Vec<PeriodSlot>) -> Self {
        if slots.is_empty() {
            Self::k12_default()
        } else {
            Self::new(slots)
        }
    }

    /// Built-in K12 school day: nine periods, a lunch break and an
    /// evening self-study block.
    pub fn k12_default() -> Self {
        Self::new(vec![
            PeriodSlot::new(1, "Period 1", "08:00", "08:45"),
            PeriodSlot::new(2, "Period 2", "08:55", "09:40"),
            PeriodSlot::new(3, "Period 3", "10:00", "10:45"),
            PeriodSlot::new(4, "Period 4", "10:55", "11:40"),
            PeriodSlot::new(5, "Period 5", "11:50", "12:35"),
            PeriodSlot::break_slot(0, "Lunch", "12:35", "14:00"),
            PeriodSlot::new(6, "Period 6", "14:00", "14:45"),
            PeriodSlot::new(7, "Period 7", "14:55", "15:40"),
            PeriodSlot::new(8, "Period 8", "16:00", "16:45"),
            PeriodSlot::new(9, "Period 9", "16:55", "17:40"),
            PeriodSlot::new(10, "Evening Study", "19:00", "20:30"),
        ])
    }

    /// Slots in day order.
    pub fn slots(&self) -> &[PeriodSlot] {
        &self.slots
    }

    /// Finds the slot numbered `no`, preferring a non-break slot.
    pub fn find(&self, no: u32) -> Option<&PeriodSlot> {
        find_slot(&self.slots, no)
    }

    /// Number of slots (rows in a period grid).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the schedule has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for PeriodSchedule {
    fn default() -> Self {
        Self::k12_default()
    }
}
