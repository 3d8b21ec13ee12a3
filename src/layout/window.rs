//! Display window and vertical placement.
//!
//! Lessons are drawn as blocks in a day column that spans a fixed window of
//! the day (07:30–21:30 by default). Positions are percentages of that
//! window, so the renderer is free to pick pixel dimensions.
//!
//! Blocks are not clipped: a lesson outside the window yields `top` or
//! bottom values outside [0, 100].

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::models::{format_minutes, ClockRange};

/// Window start: 07:30.
pub const DEFAULT_WINDOW_START: u32 = 7 * 60 + 30;
/// Window end: 21:30.
pub const DEFAULT_WINDOW_END: u32 = 21 * 60 + 30;
/// Shortest block, as a percentage of the window.
pub const DEFAULT_MIN_HEIGHT_PERCENT: f64 = 2.0;

/// Vertical position of a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalBand {
    /// Offset from the window start (%).
    pub top: f64,
    /// Block height (%), never below the window's minimum.
    pub height: f64,
}

/// An hour gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourMark {
    /// `HH:00`.
    pub label: String,
    /// Offset from the window start (%).
    pub top: f64,
}

/// The visible span of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    start: u32,
    end: u32,
    min_height_percent: f64,
}

impl DisplayWindow {
    /// Creates a window over [start, end) minutes.
    ///
    /// # Errors
    /// [`TimetableError::EmptyWindow`] if `end <= start`.
    pub fn new(start: u32, end: u32) -> Result<Self, TimetableError> {
        if end <= start {
            return Err(TimetableError::EmptyWindow {
                start: format_minutes(start),
                end: format_minutes(end),
            });
        }
        Ok(Self {
            start,
            end,
            min_height_percent: DEFAULT_MIN_HEIGHT_PERCENT,
        })
    }

    /// Sets the minimum block height.
    ///
    /// # Errors
    /// [`TimetableError::InvalidMinHeight`] unless positive and finite.
    pub fn with_min_height(mut self, percent: f64) -> Result<Self, TimetableError> {
        if !(percent.is_finite() && percent > 0.0) {
            return Err(TimetableError::InvalidMinHeight(percent));
        }
        self.min_height_percent = percent;
        Ok(self)
    }

    /// Window start (minutes since midnight).
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Window end (minutes since midnight).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Minimum block height (%).
    pub fn min_height_percent(&self) -> f64 {
        self.min_height_percent
    }

    /// Window length in minutes.
    #[inline]
    pub fn total_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Position of a minute-of-day within the window (%). Unclamped.
    #[inline]
    pub fn offset_percent(&self, minute: u32) -> f64 {
        (f64::from(minute) - f64::from(self.start)) / f64::from(self.total_minutes()) * 100.0
    }

    /// Places a time range as a vertical band.
    ///
    /// `height = max(bottom - top, min_height)`, so zero-length and inverted
    /// ranges stay visible.
    pub fn place(&self, range: ClockRange) -> VerticalBand {
        let top = self.offset_percent(range.start);
        let bottom = self.offset_percent(range.end);
        VerticalBand {
            top,
            height: (bottom - top).max(self.min_height_percent),
        }
    }

    /// One gridline per whole hour inside the window, inclusive.
    pub fn hour_marks(&self) -> Vec<HourMark> {
        let first_hour = self.start.div_ceil(60);
        let last_hour = self.end / 60;
        (first_hour..=last_hour)
            .map(|h| HourMark {
                label: format_minutes(h * 60),
                top: self.offset_percent(h * 60),
            })
            .collect()
    }

    /// Position of the "now" indicator, or `None` outside the window.
    pub fn now_offset(&self, minute_of_day: u32) -> Option<f64> {
        (self.start..=self.end)
            .contains(&minute_of_day)
            .then(|| self.offset_percent(minute_of_day))
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
            min_height_percent: DEFAULT_MIN_HEIGHT_PERCENT,
        }
    }
}
