//! Live study stopwatch.
//!
//! The stopwatch is a wall-clock-based state machine with no internal
//! thread; the caller passes the current time into every operation and
//! reads elapsed minutes back. Its state is serializable so the CLI can
//! park a running session on disk between invocations.
//!
//! ## State transitions
//!
//! ```text
//! Running -> Paused -> Running -> (commit | discard)
//! ```
//!
//! Committing produces a `StudySession` for today's date and consumes
//! the stopwatch; a tick captured before the commit carries the old
//! session id and is rejected by the overlay's stale-tick guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::heatmap::LiveTick;
use crate::session::StudySession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveState {
    Running,
    Paused,
}

/// An in-progress, not-yet-committed study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSession {
    pub id: Uuid,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    state: LiveState,
    /// Milliseconds accrued across completed running spans.
    accrued_ms: u64,
    /// Start of the current running span, when running.
    resumed_at: Option<DateTime<Utc>>,
}

impl LiveSession {
    /// Start a new stopwatch for `user_id` at `now`.
    pub fn start(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            started_at: now,
            state: LiveState::Running,
            accrued_ms: 0,
            resumed_at: Some(now),
        }
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    /// Pause the stopwatch, folding the running span into the total.
    /// No-op when already paused.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if let Some(resumed) = self.resumed_at.take() {
            self.accrued_ms += span_ms(resumed, now);
        }
        self.state = LiveState::Paused;
    }

    /// Resume a paused stopwatch. No-op when already running.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.state == LiveState::Paused {
            self.resumed_at = Some(now);
            self.state = LiveState::Running;
        }
    }

    /// Total elapsed milliseconds as of `now`.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        let running = self
            .resumed_at
            .map(|resumed| span_ms(resumed, now))
            .unwrap_or(0);
        self.accrued_ms + running
    }

    /// Whole elapsed minutes as of `now`, floored.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        (self.elapsed_ms(now) / 60_000).min(u64::from(u32::MAX)) as u32
    }

    /// Elapsed-time report for the heatmap overlay.
    pub fn tick(&self, now: DateTime<Utc>) -> LiveTick {
        LiveTick {
            session_id: self.id,
            elapsed_minutes: self.elapsed_minutes(now),
        }
    }

    /// Commit the stopwatch into a study session dated today (local
    /// date of `now`), consuming it.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDuration` when less than one
    /// whole minute has accrued; committed sessions carry at least one.
    pub fn commit(self, now: DateTime<Utc>) -> Result<StudySession, ValidationError> {
        let minutes = self.elapsed_minutes(now);
        StudySession::new(self.user_id, now.date_naive(), i64::from(minutes))
    }
}

fn span_ms(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    to.signed_duration_since(from)
        .num_milliseconds()
        .max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2024-03-10T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_elapsed_while_running() {
        let live = LiveSession::start("alice", t0());
        assert_eq!(live.elapsed_minutes(t0()), 0);
        assert_eq!(live.elapsed_minutes(t0() + Duration::seconds(59)), 0);
        assert_eq!(live.elapsed_minutes(t0() + Duration::minutes(15)), 15);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut live = LiveSession::start("alice", t0());
        live.pause(t0() + Duration::minutes(10));
        assert_eq!(live.state(), LiveState::Paused);
        assert_eq!(live.elapsed_minutes(t0() + Duration::minutes(30)), 10);
    }

    #[test]
    fn test_resume_accumulates_spans() {
        let mut live = LiveSession::start("alice", t0());
        live.pause(t0() + Duration::minutes(10));
        live.resume(t0() + Duration::minutes(20));
        assert_eq!(live.elapsed_minutes(t0() + Duration::minutes(25)), 15);
    }

    #[test]
    fn test_commit_produces_todays_session() {
        let live = LiveSession::start("alice", t0());
        let session = live.commit(t0() + Duration::minutes(45)).unwrap();
        assert_eq!(session.duration_min, 45);
        assert_eq!(session.date, t0().date_naive());
        assert_eq!(session.user_id, "alice");
    }

    #[test]
    fn test_commit_under_a_minute_rejected() {
        let live = LiveSession::start("alice", t0());
        let err = live.commit(t0() + Duration::seconds(30)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDuration { .. }));
    }

    #[test]
    fn test_tick_carries_session_id() {
        let live = LiveSession::start("alice", t0());
        let tick = live.tick(t0() + Duration::minutes(5));
        assert_eq!(tick.session_id, live.id);
        assert_eq!(tick.elapsed_minutes, 5);
    }

    #[test]
    fn test_clock_going_backward_is_clamped() {
        let live = LiveSession::start("alice", t0());
        assert_eq!(live.elapsed_ms(t0() - Duration::minutes(5)), 0);
    }
}
