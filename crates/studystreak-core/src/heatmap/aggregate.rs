//! Per-day aggregation of committed sessions.
//!
//! Reduces the raw session list into total-minutes buckets keyed by
//! calendar date. Aggregation is pure and recomputed from scratch on
//! every read; per-user yearly volumes are small enough that caching
//! derived buckets would only add invalidation surface.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::session::StudySession;

use super::level::{level_for, LevelThresholds};

/// Aggregated study time for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_minutes: u32,
    /// Intensity level 0-5 derived from `total_minutes`.
    pub level: u8,
}

impl DayBucket {
    /// Tooltip text for this bucket's heatmap cell.
    pub fn tooltip(&self) -> String {
        format!("{}: {} minutes", self.date, self.total_minutes)
    }
}

/// Sum session durations per calendar date.
///
/// Sessions never overlap or conflict; durations simply add. An empty
/// input yields an empty map. The function is side-effect-free and
/// idempotent over an immutable snapshot. A day's total saturates at
/// `u32::MAX` rather than wrapping, so the function stays total even
/// for absurd same-day duration sums.
pub fn aggregate_sessions(sessions: &[StudySession]) -> BTreeMap<NaiveDate, u32> {
    let mut buckets = BTreeMap::new();
    for session in sessions {
        let total: &mut u32 = buckets.entry(session.date).or_insert(0);
        *total = total.saturating_add(session.duration_min);
    }
    buckets
}

/// Expand a full calendar year into classified day buckets.
///
/// Every day of `year` gets a bucket, zero-filled where no sessions
/// exist. Sessions outside the year are simply absent from the result,
/// never an error.
pub fn year_buckets(
    year: i32,
    totals: &BTreeMap<NaiveDate, u32>,
    thresholds: &LevelThresholds,
) -> Vec<DayBucket> {
    days_in_year(year)
        .map(|date| {
            let total_minutes = totals.get(&date).copied().unwrap_or(0);
            DayBucket {
                date,
                total_minutes,
                level: level_for(total_minutes, thresholds),
            }
        })
        .collect()
}

/// Iterate every calendar date of `year` in order.
pub fn days_in_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    start.iter_days().take_while(move |d| d.year() == year)
}
