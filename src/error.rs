//! Error types.
//!
//! The layout pipeline itself never fails: lessons it cannot place are
//! dropped and reported through [`LayoutReport`](crate::layout::LayoutReport).
//! Errors only arise when building a layout from configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a timetable layout.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// A configured clock string is not `H:MM`/`HH:MM`.
    #[error("invalid clock time '{value}' for {field}")]
    InvalidClockTime { field: &'static str, value: String },

    /// The display window does not span a positive number of minutes.
    #[error("display window {start}..{end} is empty or inverted")]
    EmptyWindow { start: String, end: String },

    /// The minimum block height must be a positive percentage.
    #[error("minimum height must be positive, got {0}")]
    InvalidMinHeight(f64),

    /// The configuration file could not be read.
    #[error("cannot read configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`LayoutConfig`](crate::config::LayoutConfig).
    #[error("failed to parse configuration file {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
