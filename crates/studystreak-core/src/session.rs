//! Committed study sessions.
//!
//! A session is one committed interval of study time: a whole-minute
//! duration attached to a local calendar date. Sessions are immutable
//! once created and are only ever produced by the commit path; the
//! derived layers (aggregation, streaks, grid) treat the session list
//! as a read-only snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// One committed study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: Uuid,
    pub user_id: String,
    /// Local calendar date the session counts toward.
    pub date: NaiveDate,
    /// Whole minutes, always >= 1 for a committed session.
    pub duration_min: u32,
    pub created_at: DateTime<Utc>,
}

impl StudySession {
    /// Create a new session after validating the duration.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDuration` for zero or negative
    /// durations; committed sessions carry at least one whole minute.
    pub fn new(
        user_id: impl Into<String>,
        date: NaiveDate,
        duration_min: i64,
    ) -> Result<Self, ValidationError> {
        let duration_min = validate_duration_minutes(duration_min)?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            date,
            duration_min,
            created_at: Utc::now(),
        })
    }
}

/// Validate a duration at the input boundary.
///
/// Negative and zero durations are rejected before anything reaches
/// the aggregator; the derived layers only ever see `u32` minutes.
pub fn validate_duration_minutes(minutes: i64) -> Result<u32, ValidationError> {
    if minutes < 1 {
        return Err(ValidationError::InvalidDuration {
            minutes,
            message: "duration must be at least 1 minute".into(),
        });
    }
    u32::try_from(minutes).map_err(|_| ValidationError::InvalidDuration {
        minutes,
        message: "duration out of range".into(),
    })
}

/// Parse a `YYYY-MM-DD` calendar date string.
///
/// # Errors
/// Returns `ValidationError::InvalidDate` for anything chrono cannot
/// parse as an ISO calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}
