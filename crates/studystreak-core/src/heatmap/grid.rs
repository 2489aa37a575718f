//! Week-aligned calendar grid for heatmap rendering.
//!
//! Expands a year of classified day buckets into fixed-width weeks so
//! the rendering layer can draw a GitHub-style grid without any date
//! math of its own. The first and last partial weeks are padded with
//! empty placeholder slots; month labels are emitted once per
//! 1st-of-month transition.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use super::aggregate::DayBucket;

/// Day-of-week origin for grid columns.
///
/// The reference implementation disagreed with itself between
/// Saturday-first and Sunday-first layouts; this makes the origin an
/// explicit parameter with Sunday as the documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Saturday,
}

impl WeekStart {
    /// Column index (0-6) of `weekday` under this origin.
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Saturday => (weekday.num_days_from_sunday() + 1) % 7,
        }
    }

    /// Day labels in column order.
    pub fn day_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            WeekStart::Saturday => ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"],
        }
    }
}

/// One grid column: exactly 7 slots, empty slots are padding outside
/// the data year's first or last partial week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub slots: [Option<DayBucket>; 7],
}

/// A full year expanded into week columns plus per-week month labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGrid {
    pub year: i32,
    pub week_start: WeekStart,
    pub weeks: Vec<CalendarWeek>,
    /// One entry per week; `Some` only at the first week containing a
    /// 1st-of-month transition.
    pub month_labels: Vec<Option<String>>,
}

/// Build the week-aligned grid for one year of day buckets.
///
/// `buckets` must be the year's consecutive dates in order (as produced
/// by `year_buckets`). Week count is ceil((days + leading) / 7);
/// concatenating the non-empty slots reproduces the input in order.
pub fn build_year_grid(year: i32, buckets: &[DayBucket], week_start: WeekStart) -> YearGrid {
    let mut weeks = Vec::new();
    let mut current: Vec<Option<DayBucket>> = Vec::with_capacity(7);

    if let Some(first) = buckets.first() {
        for _ in 0..week_start.column_of(first.date.weekday()) {
            current.push(None);
        }
    }

    for bucket in buckets {
        current.push(Some(bucket.clone()));
        if current.len() == 7 {
            weeks.push(take_week(&mut current));
        }
    }
    if !current.is_empty() {
        while current.len() < 7 {
            current.push(None);
        }
        weeks.push(take_week(&mut current));
    }

    let month_labels = month_labels(&weeks);
    YearGrid {
        year,
        week_start,
        weeks,
        month_labels,
    }
}

fn take_week(slots: &mut Vec<Option<DayBucket>>) -> CalendarWeek {
    let drained: Vec<Option<DayBucket>> = std::mem::take(slots);
    // Length is exactly 7 at every call site.
    let slots: [Option<DayBucket>; 7] = drained.try_into().unwrap_or_default();
    CalendarWeek { slots }
}

impl Default for CalendarWeek {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

/// Emit a month label at the first week containing each 1st-of-month
/// (the year's opening week counts for its month). Labels never repeat
/// on consecutive weeks.
fn month_labels(weeks: &[CalendarWeek]) -> Vec<Option<String>> {
    let mut labels = Vec::with_capacity(weeks.len());
    let mut last_month = None;

    for week in weeks {
        let transition = week
            .slots
            .iter()
            .flatten()
            .find(|b| Some(b.date.month()) != last_month)
            .map(|b| b.date);
        match transition {
            Some(date) => {
                last_month = Some(date.month());
                labels.push(Some(date.format("%b").to_string()));
            }
            None => labels.push(None),
        }
    }
    labels
}
