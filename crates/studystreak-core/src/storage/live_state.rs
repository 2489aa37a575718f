//! On-disk parking for the live stopwatch.
//!
//! The CLI runs and exits between ticks, so a running stopwatch is
//! serialized to `live.json` in the data directory. Clearing the file
//! is what invalidates the session id: a tick captured before a commit
//! or reset no longer matches anything and the overlay drops it.

use std::path::PathBuf;

use crate::error::CoreError;
use crate::live::LiveSession;

use super::data_dir;

fn live_path() -> Result<PathBuf, std::io::Error> {
    Ok(data_dir()?.join("live.json"))
}

/// Load the parked live session, if one exists.
///
/// # Errors
/// Returns an error if the file exists but cannot be parsed.
pub fn load() -> Result<Option<LiveSession>, CoreError> {
    let path = live_path()?;
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Park the live session on disk.
pub fn save(session: &LiveSession) -> Result<(), CoreError> {
    let path = live_path()?;
    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Remove the parked session, invalidating its id.
pub fn clear() -> Result<(), CoreError> {
    let path = live_path()?;
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
