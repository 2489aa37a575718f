use std::path::PathBuf;

use clap::Subcommand;
use studystreak_core::storage::SessionStore;
use studystreak_core::{export_document, export_json, import_settings, Config};

use super::require_user;

#[derive(Subcommand)]
pub enum DataAction {
    /// Export sessions and settings to a JSON file
    Export {
        /// Output file, stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import settings from an exported file (sessions are ignored)
    Import {
        /// Exported JSON file
        file: PathBuf,
    },
}

pub fn run(action: DataAction, user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Export { out } => {
            let user = require_user(user)?;
            let store = SessionStore::open()?;
            let sessions = store.sessions_for_user(&user)?;
            let settings = Config::load_or_default();
            let doc = export_document(&user, sessions, settings);
            let json = export_json(&doc)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("exported to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        DataAction::Import { file } => {
            let json = std::fs::read_to_string(&file)?;
            let settings = import_settings(&json)?;
            settings.save()?;
            println!("settings imported (sessions in the file were ignored)");
        }
    }
    Ok(())
}
