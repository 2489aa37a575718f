use chrono::Utc;
use clap::Subcommand;
use studystreak_core::storage::{live_state, Config, SessionStore};
use studystreak_core::{aggregate_sessions, goal_progress, parse_date, user_stats};

use super::{require_user, today};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals and streaks as JSON
    Show {
        /// Override today's date (YYYY-MM-DD), mainly for scripting
        #[arg(long)]
        today: Option<String>,
    },
    /// Progress toward the daily goal
    Goal,
}

pub fn run(action: StatsAction, user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let user = require_user(user)?;
    let store = SessionStore::open()?;
    let sessions = store.sessions_for_user(&user)?;

    // A running stopwatch counts toward displayed totals, same as on
    // the heatmap surface.
    let now = Utc::now();
    let live_minutes = live_state::load()?
        .filter(|l| l.user_id == user)
        .map(|l| l.elapsed_minutes(now))
        .unwrap_or(0);

    match action {
        StatsAction::Show { today: override_day } => {
            let day = match override_day {
                Some(s) => parse_date(&s)?,
                None => today(),
            };
            let stats = user_stats(&sessions, day).with_live(live_minutes);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Goal => {
            let config = Config::load_or_default();
            let totals = aggregate_sessions(&sessions);
            let minutes = totals
                .get(&today())
                .copied()
                .unwrap_or(0)
                .saturating_add(live_minutes);
            let pct = goal_progress(minutes, config.goal.daily_goal_min);
            println!(
                "{minutes} of {} minutes today ({pct}%)",
                config.goal.daily_goal_min
            );
        }
    }
    Ok(())
}
