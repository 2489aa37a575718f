use clap::Subcommand;
use studystreak_core::parse_date;
use studystreak_core::storage::{commit_session, SessionStore};

use super::{require_user, today};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Commit a study session
    Add {
        /// Duration in whole minutes (must be >= 1)
        #[arg(long)]
        minutes: i64,
        /// Calendar date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List committed sessions as JSON, newest first
    List,
}

pub fn run(action: SessionAction, user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;

    match action {
        SessionAction::Add { minutes, date } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };
            match commit_session(&store, user, date, minutes)? {
                Some(session) => println!("recorded {} minutes on {}", session.duration_min, session.date),
                None => eprintln!("not signed in, session not recorded"),
            }
        }
        SessionAction::List => {
            let user = require_user(user)?;
            let sessions = store.sessions_for_user(&user)?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
    }
    Ok(())
}
