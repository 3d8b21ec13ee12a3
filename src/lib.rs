//! Timetable layout for the U-Engine ecosystem.
//!
//! Turns school lessons into a week grid: resolves each lesson's wall-clock
//! time (explicit or from period numbers), positions it vertically inside
//! a display window, and assigns side-by-side lanes to lessons that
//! overlap on the same day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `LessonItem`, `PeriodSlot`,
//!   `PeriodSchedule`, `Weekday`, `WeekSpec`, clock parsing
//! - **`layout`**: The layout pipeline — `compute_time_layout`,
//!   `TimetableLayout`, lane assignment, period-grid rows
//! - **`validation`**: Optional integrity checks (duplicate IDs, bad days,
//!   malformed times, overlapping slots)
//! - **`config`**: YAML-loaded `LayoutConfig`
//!
//! # Architecture
//!
//! The layout core is pure and synchronous. Fetching lessons and drawing
//! the grid belong to the caller; this crate only maps records to geometry.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//!   (interval graph coloring)

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::TimetableError;
pub use layout::{compute_time_layout, LaidOutLesson, TimetableLayout};
