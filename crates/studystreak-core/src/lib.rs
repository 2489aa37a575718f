//! # Studystreak Core Library
//!
//! Core business logic for Studystreak, a personal study-time tracker.
//! The heart of the library is the heatmap engine: pure functions that
//! reduce a snapshot of committed study sessions into per-day intensity
//! buckets, streak counts, and a week-aligned calendar grid, the way a
//! GitHub contribution graph is derived from commits.
//!
//! ## Architecture
//!
//! - **Heatmap engine**: aggregation, level classification, streaks,
//!   grid building, and the live-session overlay; all derive-on-read,
//!   no cached state
//! - **Live stopwatch**: a wall-clock state machine the caller ticks;
//!   uncommitted elapsed time surfaces only through the overlay
//! - **Storage**: SQLite session store and TOML configuration
//! - **Export/import**: JSON data export; import applies settings only
//!
//! ## Key Components
//!
//! - [`StudySession`]: one committed interval of study time
//! - [`UserStats`]: derived totals and streaks
//! - [`YearGrid`]: week-aligned heatmap grid for rendering
//! - [`LiveSession`]: the running stopwatch
//! - [`SessionStore`]: session persistence

pub mod error;
pub mod export;
pub mod heatmap;
pub mod live;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, ImportError, StorageError, ValidationError};
pub use export::{export_document, export_json, import_settings, ExportDocument};
pub use heatmap::{
    active_dates, aggregate_sessions, build_year_grid, current_streak, goal_progress, level_for,
    longest_streak, overlay_today, user_stats, year_buckets, CalendarWeek, DayBucket,
    LevelThresholds, LiveTick, TodayView, UserStats, WeekStart, YearGrid,
};
pub use live::{LiveSession, LiveState};
pub use session::{parse_date, validate_duration_minutes, StudySession};
pub use storage::{Config, SessionStore};
