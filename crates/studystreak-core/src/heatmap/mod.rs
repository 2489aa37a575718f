//! Heatmap engine for Studystreak
//!
//! Turns the raw list of committed study sessions into calendar-bucketed
//! intensity levels, streaks, and a week-aligned grid ready for
//! rendering. Everything here is pure and recomputed from a fresh
//! session snapshot on every read.

mod aggregate;
mod grid;
mod level;
mod overlay;
mod stats;
mod streak;

pub use aggregate::{aggregate_sessions, days_in_year, year_buckets, DayBucket};
pub use grid::{build_year_grid, CalendarWeek, WeekStart, YearGrid};
pub use level::{level_for, LevelThresholds};
pub use overlay::{overlay_today, LiveTick, TodayView};
pub use stats::{goal_progress, user_stats, UserStats};
pub use streak::{active_dates, current_streak, longest_streak};
