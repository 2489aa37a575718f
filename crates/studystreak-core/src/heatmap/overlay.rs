//! Live-session overlay for today's bucket.
//!
//! While a stopwatch is running its elapsed time has no committed
//! session yet; the overlay merges it into today's bucket at read time
//! so the heatmap reflects progress immediately. The stored aggregation
//! is never touched, and a tick from a session that is no longer the
//! active one is ignored.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::DayBucket;
use super::level::{level_for, LevelThresholds};

/// Elapsed-time report from the running stopwatch.
///
/// Carries the id of the session it was measured from so stale ticks
/// (emitted before a commit or reset landed) can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTick {
    pub session_id: Uuid,
    pub elapsed_minutes: u32,
}

/// Today's bucket after the overlay has been considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayView {
    pub bucket: DayBucket,
    /// True when uncommitted live minutes are included in the bucket.
    pub is_live: bool,
}

impl TodayView {
    /// Tooltip text, marking uncommitted time when present.
    pub fn tooltip(&self) -> String {
        if self.is_live {
            format!("{} (including current session)", self.bucket.tooltip())
        } else {
            self.bucket.tooltip()
        }
    }
}

/// Merge a live tick into today's stored total and re-classify.
///
/// `active_session` is the id of the stopwatch session that currently
/// exists, if any; a tick whose id differs is stale and contributes
/// nothing. The input map is read, never mutated.
pub fn overlay_today(
    totals: &BTreeMap<NaiveDate, u32>,
    today: NaiveDate,
    tick: Option<LiveTick>,
    active_session: Option<Uuid>,
    thresholds: &LevelThresholds,
) -> TodayView {
    let stored = totals.get(&today).copied().unwrap_or(0);
    let live = tick
        .filter(|t| active_session == Some(t.session_id))
        .map(|t| t.elapsed_minutes)
        .unwrap_or(0);

    let total_minutes = stored + live;
    TodayView {
        bucket: DayBucket {
            date: today,
            total_minutes,
            level: level_for(total_minutes, thresholds),
        },
        is_live: live > 0,
    }
}
