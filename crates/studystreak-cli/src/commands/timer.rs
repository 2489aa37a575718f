use chrono::Utc;
use clap::Subcommand;
use studystreak_core::storage::{live_state, SessionStore};
use studystreak_core::LiveSession;

use super::require_user;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a new stopwatch
    Start,
    /// Show the running stopwatch
    Status,
    /// Pause the stopwatch
    Pause,
    /// Resume a paused stopwatch
    Resume,
    /// Commit elapsed time as a study session
    Commit,
    /// Discard the stopwatch without committing
    Discard,
}

pub fn run(action: TimerAction, user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();

    match action {
        TimerAction::Start => {
            let user = require_user(user)?;
            if live_state::load()?.is_some() {
                return Err("a stopwatch is already running (commit or discard it first)".into());
            }
            let live = LiveSession::start(user, now);
            live_state::save(&live)?;
            println!("stopwatch started ({})", live.id);
        }
        TimerAction::Status => match live_state::load()? {
            Some(live) => {
                println!(
                    "{:?}: {} minutes elapsed",
                    live.state(),
                    live.elapsed_minutes(now)
                );
            }
            None => println!("no stopwatch running"),
        },
        TimerAction::Pause => {
            let mut live = live_state::load()?.ok_or("no stopwatch running")?;
            live.pause(now);
            live_state::save(&live)?;
            println!("paused at {} minutes", live.elapsed_minutes(now));
        }
        TimerAction::Resume => {
            let mut live = live_state::load()?.ok_or("no stopwatch running")?;
            live.resume(now);
            live_state::save(&live)?;
            println!("resumed");
        }
        TimerAction::Commit => {
            let live = live_state::load()?.ok_or("no stopwatch running")?;
            let session = live.commit(now)?;
            let store = SessionStore::open()?;
            store.add_session(&session)?;
            // Clearing the parked state invalidates any tick already
            // captured from this session.
            live_state::clear()?;
            println!("recorded {} minutes on {}", session.duration_min, session.date);
        }
        TimerAction::Discard => {
            live_state::clear()?;
            println!("stopwatch discarded");
        }
    }
    Ok(())
}
