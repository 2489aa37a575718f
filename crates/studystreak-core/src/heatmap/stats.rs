//! Derived user statistics.
//!
//! A pure snapshot recomputed on demand from the session list; nothing
//! here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::session::StudySession;

use super::streak::{active_dates, current_streak, longest_streak};

/// Aggregate statistics for one user's session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub total_sessions: u64,
    pub total_minutes: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl UserStats {
    /// Fold uncommitted live minutes into the totals for display.
    ///
    /// The running stopwatch counts as one extra session while it has
    /// accrued at least a whole minute.
    pub fn with_live(self, elapsed_minutes: u32) -> Self {
        if elapsed_minutes == 0 {
            return self;
        }
        Self {
            total_sessions: self.total_sessions + 1,
            total_minutes: self.total_minutes + u64::from(elapsed_minutes),
            ..self
        }
    }
}

/// Compute the stats snapshot for a session list.
pub fn user_stats(sessions: &[StudySession], today: NaiveDate) -> UserStats {
    let dates = active_dates(sessions);
    UserStats {
        total_sessions: sessions.len() as u64,
        total_minutes: sessions.iter().map(|s| u64::from(s.duration_min)).sum(),
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
    }
}

/// Percentage of the daily goal reached, capped at 100.
pub fn goal_progress(minutes: u32, goal_minutes: u32) -> u8 {
    if goal_minutes == 0 {
        return 100;
    }
    let pct = (u64::from(minutes) * 100) / u64::from(goal_minutes);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn session(d: &str, minutes: i64) -> StudySession {
        StudySession::new("alice", date(d), minutes).unwrap()
    }

    #[test]
    fn test_empty_stats() {
        let stats = user_stats(&[], date("2024-03-10"));
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_stats_totals_and_streaks() {
        let sessions = vec![
            session("2024-03-08", 10),
            session("2024-03-09", 10),
            session("2024-03-10", 10),
            session("2024-03-10", 5),
        ];
        let stats = user_stats(&sessions, date("2024-03-10"));
        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.total_minutes, 35);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_with_live_adds_one_session() {
        let stats = user_stats(&[session("2024-03-10", 20)], date("2024-03-10"));
        let live = stats.with_live(15);
        assert_eq!(live.total_sessions, 2);
        assert_eq!(live.total_minutes, 35);
        assert_eq!(stats.with_live(0), stats);
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal_progress(0, 60), 0);
        assert_eq!(goal_progress(30, 60), 50);
        assert_eq!(goal_progress(60, 60), 100);
        assert_eq!(goal_progress(600, 60), 100);
        assert_eq!(goal_progress(10, 0), 100);
    }
}
