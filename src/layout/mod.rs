//! Timetable layout engine.
//!
//! Turns a set of lessons into positioned blocks for a week grid:
//!
//! 1. **Time resolution** ([`resolve`]): explicit times, else period-derived.
//! 2. **Vertical placement** ([`window`]): `top`/`height` as percentages of
//!    the display window.
//! 3. **Lane assignment** ([`lanes`]): per weekday, overlapping lessons are
//!    grouped into clusters and given side-by-side lanes.
//!
//! # Error Policy
//!
//! Layout never fails. A lesson whose time cannot be resolved, or whose
//! `dayOfWeek` is outside 1..=7, is left out of the result.
//! [`TimetableLayout::layout_with_report`] lists what was left out and why.
//!
//! # Output Order
//!
//! Monday to Sunday; within a day, by start time with ties in input order.

mod lanes;
mod resolve;
mod rows;
mod window;

pub use lanes::{assign_lanes, LaneAssignment};
pub use resolve::{
    derive_times_from_periods, get_effective_times, resolve_effective_times, DerivedTimes,
    EffectiveTimes,
};
pub use rows::{period_row_span, PeriodRowSpan};
pub use window::{
    DisplayWindow, HourMark, VerticalBand, DEFAULT_MIN_HEIGHT_PERCENT, DEFAULT_WINDOW_END,
    DEFAULT_WINDOW_START,
};

use serde::Serialize;
use tracing::debug;

use crate::models::{ClockRange, LessonItem, PeriodSlot, TimeParsing, Weekday};

/// A lesson with its computed position.
///
/// `lesson.start_time`/`end_time` hold the effective times, so
/// period-only lessons come out with explicit times filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutLesson {
    #[serde(flatten)]
    pub lesson: LessonItem,
    /// Offset from the window start (%).
    pub top: f64,
    /// Block height (%).
    pub height: f64,
    /// Lane within the cluster.
    #[serde(rename = "__lane")]
    pub lane: usize,
    /// Day-scoped cluster identifier.
    #[serde(rename = "__cluster")]
    pub cluster: usize,
    /// Lanes used by the cluster.
    #[serde(rename = "__clusterSize")]
    pub cluster_size: usize,
}

/// Horizontal position of a block within its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalBand {
    /// Offset from the column's left edge (%).
    pub left: f64,
    /// Block width (%).
    pub width: f64,
}

impl LaidOutLesson {
    /// Identifier of the source lesson.
    pub fn id(&self) -> &str {
        &self.lesson.id
    }

    /// Column this lesson is drawn in.
    pub fn weekday(&self) -> Option<Weekday> {
        self.lesson.weekday()
    }

    /// Splits the column evenly among the cluster's lanes.
    pub fn horizontal_band(&self) -> HorizontalBand {
        let lanes = self.cluster_size.max(1) as f64;
        HorizontalBand {
            left: self.lane as f64 / lanes * 100.0,
            width: 100.0 / lanes,
        }
    }
}

/// Why a lesson was left out of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "dayOfWeek", rename_all = "camelCase")]
pub enum DropReason {
    /// Neither explicit times nor periods gave a parseable range.
    UnresolvableTimes,
    /// `dayOfWeek` is not a weekday number.
    InvalidDay(i32),
}

/// A lesson left out of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedLesson {
    pub id: String,
    pub reason: DropReason,
}

/// Layout result together with the lessons that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Placed lessons, in output order.
    pub lessons: Vec<LaidOutLesson>,
    /// Left-out lessons, in input order.
    pub dropped: Vec<DroppedLesson>,
}

impl LayoutReport {
    /// Whether every input lesson was placed.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Placed lessons for one day column.
    pub fn lessons_on(&self, day: Weekday) -> impl Iterator<Item = &LaidOutLesson> {
        self.lessons
            .iter()
            .filter(move |l| l.lesson.day_of_week == day.number())
    }
}

/// A lesson that passed vertical placement.
struct Placed {
    lesson: LessonItem,
    range: ClockRange,
    band: VerticalBand,
}

/// Layout engine.
///
/// # Example
///
/// ```
/// use u_timetable::layout::TimetableLayout;
/// use u_timetable::models::LessonItem;
///
/// let lessons = vec![
///     LessonItem::new("math", 1).with_times("09:00", "10:00"),
///     LessonItem::new("art", 1).with_times("09:30", "10:30"),
/// ];
/// let laid_out = TimetableLayout::new().layout(&lessons, None);
///
/// assert_eq!(laid_out.len(), 2);
/// assert!(laid_out.iter().all(|l| l.cluster_size == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableLayout {
    window: DisplayWindow,
    parsing: TimeParsing,
}

impl TimetableLayout {
    /// Creates an engine with the 07:30–21:30 window and lenient parsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display window.
    pub fn with_window(mut self, window: DisplayWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the clock parsing mode.
    pub fn with_time_parsing(mut self, parsing: TimeParsing) -> Self {
        self.parsing = parsing;
        self
    }

    /// The display window.
    pub fn window(&self) -> &DisplayWindow {
        &self.window
    }

    /// The clock parsing mode.
    pub fn time_parsing(&self) -> TimeParsing {
        self.parsing
    }

    /// Lays out lessons. Unplaceable lessons are silently left out.
    pub fn layout(&self, lessons: &[LessonItem], slots: Option<&[PeriodSlot]>) -> Vec<LaidOutLesson> {
        self.layout_with_report(lessons, slots).lessons
    }

    /// Lays out lessons and reports the ones left out.
    ///
    /// Inputs are not modified; every output record is a fresh copy.
    pub fn layout_with_report(
        &self,
        lessons: &[LessonItem],
        slots: Option<&[PeriodSlot]>,
    ) -> LayoutReport {
        let mut dropped = Vec::new();
        let mut days: [Vec<Placed>; 7] = Default::default();

        for lesson in lessons {
            let Some(eff) = resolve_effective_times(lesson, slots, self.parsing) else {
                debug!(lesson_id = %lesson.id, "dropping lesson with unresolvable times");
                dropped.push(DroppedLesson {
                    id: lesson.id.clone(),
                    reason: DropReason::UnresolvableTimes,
                });
                continue;
            };

            let Some(day) = lesson.weekday() else {
                debug!(
                    lesson_id = %lesson.id,
                    day_of_week = lesson.day_of_week,
                    "dropping lesson outside Monday..Sunday"
                );
                dropped.push(DroppedLesson {
                    id: lesson.id.clone(),
                    reason: DropReason::InvalidDay(lesson.day_of_week),
                });
                continue;
            };

            let band = self.window.place(eff.range);
            days[day.index()].push(Placed {
                lesson: LessonItem {
                    start_time: Some(eff.start),
                    end_time: Some(eff.end),
                    ..lesson.clone()
                },
                range: eff.range,
                band,
            });
        }

        let mut laid_out = Vec::with_capacity(lessons.len() - dropped.len());
        for day in Weekday::ALL {
            let bucket = std::mem::take(&mut days[day.index()]);
            let ranges: Vec<ClockRange> = bucket.iter().map(|p| p.range).collect();
            let mut bucket: Vec<Option<Placed>> = bucket.into_iter().map(Some).collect();

            for a in assign_lanes(&ranges) {
                if let Some(p) = bucket[a.index].take() {
                    laid_out.push(LaidOutLesson {
                        lesson: p.lesson,
                        top: p.band.top,
                        height: p.band.height,
                        lane: a.lane,
                        cluster: a.cluster,
                        cluster_size: a.cluster_size,
                    });
                }
            }
        }

        debug!(
            laid_out = laid_out.len(),
            dropped = dropped.len(),
            "timetable layout computed"
        );

        LayoutReport {
            lessons: laid_out,
            dropped,
        }
    }
}

/// Lays out lessons with the default 07:30–21:30 window.
///
/// Lessons whose times cannot be resolved, or whose weekday is invalid,
/// are omitted.
pub fn compute_time_layout(
    lessons: &[LessonItem],
    slots: Option<&[PeriodSlot]>,
) -> Vec<LaidOutLesson> {
    TimetableLayout::new().layout(lessons, slots)
}
