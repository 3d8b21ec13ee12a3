//! Layout configuration.
//!
//! The expected YAML structure is:
//! ```yaml
//! window:
//!   start: "07:30"
//!   end: "21:30"
//! min_height_percent: 2.0
//! strict_times: false
//! period_slots:
//!   - { no: 1, label: "Period 1", startTime: "08:00", endTime: "08:45" }
//!   - { no: 0, label: "Lunch", startTime: "12:35", endTime: "14:00", isBreak: true }
//! ```
//!
//! Every field is optional. Omitted fields take the built-in values, and
//! an empty or missing `period_slots` list selects the K12 default schedule.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TimetableError;
use crate::layout::{DisplayWindow, TimetableLayout, DEFAULT_MIN_HEIGHT_PERCENT};
use crate::models::{time_to_minutes, PeriodSchedule, PeriodSlot, TimeParsing};

/// Display window bounds as clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_start")]
    pub start: String,
    #[serde(default = "default_window_end")]
    pub end: String,
}

fn default_window_start() -> String {
    "07:30".to_string()
}

fn default_window_end() -> String {
    "21:30".to_string()
}

fn default_min_height_percent() -> f64 {
    DEFAULT_MIN_HEIGHT_PERCENT
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start: default_window_start(),
            end: default_window_end(),
        }
    }
}

/// Settings for building a [`TimetableLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub window: WindowConfig,
    /// Shortest block height, as a percentage of the window.
    #[serde(default = "default_min_height_percent")]
    pub min_height_percent: f64,
    /// Reject clock times with hours >= 24 or minutes >= 60.
    #[serde(default)]
    pub strict_times: bool,
    /// School period schedule. Empty = K12 default.
    #[serde(default)]
    pub period_slots: Vec<PeriodSlot>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            min_height_percent: DEFAULT_MIN_HEIGHT_PERCENT,
            strict_times: false,
            period_slots: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Reads and validates a YAML configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// describes an unusable window.
    pub fn load_from_file(path: &Path) -> Result<Self, TimetableError> {
        info!("Loading layout configuration from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LayoutConfig =
            serde_yaml::from_str(&content).map_err(|source| TimetableError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;

        // surface window errors at load time
        config.display_window()?;

        if config.period_slots.is_empty() {
            warn!("No period slots in configuration, using the default K12 schedule");
        } else {
            for slot in &config.period_slots {
                debug!(
                    "  Slot {} '{}' {}-{}{}",
                    slot.no,
                    slot.label,
                    slot.start_time,
                    slot.end_time,
                    if slot.is_break { " (break)" } else { "" },
                );
            }
        }

        info!(
            window_start = %config.window.start,
            window_end = %config.window.end,
            strict_times = config.strict_times,
            slots = config.period_slots.len(),
            "Layout configuration loaded"
        );
        Ok(config)
    }

    /// Clock parsing mode selected by `strict_times`.
    pub fn time_parsing(&self) -> TimeParsing {
        if self.strict_times {
            TimeParsing::Strict
        } else {
            TimeParsing::Lenient
        }
    }

    /// The configured display window.
    ///
    /// # Errors
    /// Fails on malformed clock strings, an empty window, or a non-positive
    /// minimum height.
    pub fn display_window(&self) -> Result<DisplayWindow, TimetableError> {
        let start = parse_window_bound("window.start", &self.window.start)?;
        let end = parse_window_bound("window.end", &self.window.end)?;
        DisplayWindow::new(start, end)?.with_min_height(self.min_height_percent)
    }

    /// The configured period schedule, or the K12 default.
    pub fn schedule(&self) -> PeriodSchedule {
        PeriodSchedule::or_default(self.period_slots.clone())
    }

    /// Builds a layout engine from this configuration.
    pub fn build(&self) -> Result<TimetableLayout, TimetableError> {
        Ok(TimetableLayout::new()
            .with_window(self.display_window()?)
            .with_time_parsing(self.time_parsing()))
    }
}

fn parse_window_bound(field: &'static str, value: &str) -> Result<u32, TimetableError> {
    time_to_minutes(value).ok_or_else(|| TimetableError::InvalidClockTime {
        field,
        value: value.to_string(),
    })
}
