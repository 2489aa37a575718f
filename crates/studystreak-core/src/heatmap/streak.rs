//! Streak calculation over active study dates.
//!
//! A streak is a maximal run of consecutive calendar dates with nonzero
//! study activity. Both operations are pure and take a de-duplicated
//! date set; `active_dates` builds that set from a raw session list.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::session::StudySession;

/// Maximum number of days `current_streak` walks backward.
///
/// Matches the single-year scope of the heatmap view; a streak longer
/// than a leap year is outside the data this system retains.
const MAX_WALK_DAYS: u32 = 366;

/// Collect the distinct dates with at least one committed session.
pub fn active_dates(sessions: &[StudySession]) -> BTreeSet<NaiveDate> {
    sessions.iter().map(|s| s.date).collect()
}

/// Count consecutive active days walking backward from `today`.
///
/// A day missing from the set ends the walk, except on the very first
/// iteration: `today` itself being inactive does not break a streak
/// that is still alive through yesterday. Only that first step is
/// forgiven; any later gap terminates the count.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;

    for checked in 0..MAX_WALK_DAYS {
        if dates.contains(&cursor) {
            streak += 1;
        } else if checked > 0 {
            break;
        }
        cursor = match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}

/// Length of the longest run of calendar-consecutive active dates.
///
/// Runs are measured by calendar distance between successive distinct
/// dates, not by index. Returns 0 for an empty set.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        run = match previous {
            Some(prev) if date.signed_duration_since(prev).num_days() == 1 => run + 1,
            _ => {
                longest = longest.max(run);
                1
            }
        };
        previous = Some(date);
    }
    longest.max(run)
}
