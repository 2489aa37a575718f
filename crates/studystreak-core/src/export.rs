//! Data export and settings import.
//!
//! Export writes a single JSON document with the user's sessions and
//! settings. Import deliberately applies only the settings portion and
//! ignores any sessions in the file; the session store remains the one
//! source of committed history. A malformed file fails as a whole,
//! nothing is partially applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::session::StudySession;
use crate::storage::Config;

/// The exported document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub sessions: Vec<StudySession>,
    pub settings: Config,
    pub export_date: DateTime<Utc>,
    pub user: String,
}

/// Build the export document for one user.
pub fn export_document(user: &str, sessions: Vec<StudySession>, settings: Config) -> ExportDocument {
    ExportDocument {
        sessions,
        settings,
        export_date: Utc::now(),
        user: user.to_string(),
    }
}

/// Serialize an export document to pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn export_json(doc: &ExportDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Extract the settings from an exported document.
///
/// Sessions present in the file are ignored by design; only the
/// settings come back.
///
/// # Errors
/// - `ImportError::Malformed` when the input is not valid JSON
/// - `ImportError::MissingSettings` when there is no `settings` field
/// - `ImportError::InvalidSettings` when the settings don't parse
pub fn import_settings(json: &str) -> Result<Config, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ImportError::Malformed(e.to_string()))?;
    let settings = value
        .get("settings")
        .ok_or(ImportError::MissingSettings)?
        .clone();
    serde_json::from_value(settings).map_err(|e| ImportError::InvalidSettings(e.to_string()))
}
