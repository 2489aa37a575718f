use chrono::{Datelike, Utc};
use clap::Subcommand;
use studystreak_core::storage::{live_state, Config, SessionStore};
use studystreak_core::{
    aggregate_sessions, build_year_grid, overlay_today, year_buckets, YearGrid,
};

use super::{require_user, today};

/// One glyph per intensity level 0-5.
const LEVEL_GLYPHS: [char; 6] = ['·', '▁', '▂', '▄', '▆', '█'];

#[derive(Subcommand)]
pub enum HeatmapAction {
    /// Render the year grid
    Show {
        /// Year to render, defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// Emit the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HeatmapAction, user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let user = require_user(user)?;
    let store = SessionStore::open()?;
    let config = Config::load_or_default();

    match action {
        HeatmapAction::Show { year, json } => {
            let today = today();
            let year = year.unwrap_or_else(|| today.year());
            let sessions = store.sessions_for_user(&user)?;
            let totals = aggregate_sessions(&sessions);

            // Fold the running stopwatch into today's cell at read time.
            let now = Utc::now();
            let live = live_state::load()?.filter(|l| l.user_id == user);
            let view = overlay_today(
                &totals,
                today,
                live.as_ref().map(|l| l.tick(now)),
                live.as_ref().map(|l| l.id),
                &config.heatmap.thresholds,
            );

            let mut buckets = year_buckets(year, &totals, &config.heatmap.thresholds);
            if let Some(cell) = buckets.iter_mut().find(|b| b.date == today) {
                *cell = view.bucket.clone();
            }
            let grid = build_year_grid(year, &buckets, config.heatmap.week_start);

            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", render_text(&grid));
                if view.bucket.date.year() == year {
                    println!("today  {}", view.tooltip());
                }
            }
        }
    }
    Ok(())
}

/// Render the grid as text: a month-label header, then one row per
/// day-of-week column with a glyph per week.
fn render_text(grid: &YearGrid) -> String {
    let mut out = String::new();

    let mut header = vec![' '; grid.weeks.len() * 2];
    for (week_idx, label) in grid.month_labels.iter().enumerate() {
        if let Some(label) = label {
            for (i, ch) in label.chars().enumerate() {
                let pos = week_idx * 2 + i;
                if pos < header.len() {
                    header[pos] = ch;
                }
            }
        }
    }
    out.push_str("     ");
    out.extend(header);
    out.push('\n');

    let labels = grid.week_start.day_labels();
    for row in 0..7 {
        out.push_str(labels[row]);
        out.push_str("  ");
        for week in &grid.weeks {
            match &week.slots[row] {
                Some(bucket) => out.push(LEVEL_GLYPHS[usize::from(bucket.level.min(5))]),
                None => out.push(' '),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use studystreak_core::{LevelThresholds, WeekStart};

    #[test]
    fn test_render_has_header_and_seven_rows() {
        let buckets = year_buckets(2024, &BTreeMap::new(), &LevelThresholds::default());
        let grid = build_year_grid(2024, &buckets, WeekStart::Sunday);
        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("Jan"));
        assert!(lines[1].starts_with("Sun"));
        assert!(lines[7].starts_with("Sat"));
    }
}
