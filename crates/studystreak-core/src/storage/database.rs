//! SQLite-backed session store.
//!
//! Sessions are append-only: the commit path inserts them and the
//! derived layers read full-replace snapshots. Nothing here mutates or
//! deletes a committed session.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::error::{CoreError, StorageError};
use crate::session::{validate_duration_minutes, StudySession};

use super::data_dir;

/// SQLite store for committed study sessions.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open the store at `~/.config/studystreak/studystreak.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("studystreak.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS sessions (
                    id           TEXT PRIMARY KEY,
                    user_id      TEXT NOT NULL,
                    date         TEXT NOT NULL,
                    duration_min INTEGER NOT NULL,
                    created_at   TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);
                CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    /// Insert a committed session.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn add_session(&self, session: &StudySession) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO sessions (id, user_id, date, duration_min, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session.id.to_string(),
                session.user_id,
                session.date.to_string(),
                session.duration_min,
                session.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Full snapshot of one user's sessions, newest first.
    pub fn sessions_for_user(&self, user_id: &str) -> Result<Vec<StudySession>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, date, duration_min, created_at
             FROM sessions WHERE user_id = ?1
             ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            let id: String = row.get(0)?;
            let user_id: String = row.get(1)?;
            let date: String = row.get(2)?;
            let duration_min: u32 = row.get(3)?;
            let created_at: String = row.get(4)?;
            Ok((id, user_id, date, duration_min, created_at))
        })?;

        let mut sessions = Vec::new();
        for row in rows {
            let (id, user_id, date, duration_min, created_at) = row?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| StorageError::QueryFailed(format!("bad session id: {e}")))?;
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| StorageError::QueryFailed(format!("bad session date: {e}")))?;
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| StorageError::QueryFailed(format!("bad created_at: {e}")))?
                .with_timezone(&Utc);
            sessions.push(StudySession {
                id,
                user_id,
                date,
                duration_min,
                created_at,
            });
        }
        Ok(sessions)
    }

    /// Total number of stored sessions across all users.
    pub fn session_count(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

/// Commit a study session through the validated path.
///
/// Skips silently when no user is authenticated, returning `Ok(None)`
/// so callers can tell a skip from a stored session without treating it
/// as a failure.
///
/// # Errors
/// Returns a validation error for durations below one minute, or a
/// storage error if the insert fails.
pub fn commit_session(
    store: &SessionStore,
    auth_user: Option<&str>,
    date: NaiveDate,
    duration_min: i64,
) -> Result<Option<StudySession>, CoreError> {
    let duration_min = validate_duration_minutes(duration_min)?;
    let Some(user_id) = auth_user else {
        return Ok(None);
    };
    let session = StudySession::new(user_id, date, i64::from(duration_min))
        .map_err(CoreError::Validation)?;
    store.add_session(&session)?;
    Ok(Some(session))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_and_snapshot_roundtrip() {
        let store = SessionStore::open_memory().unwrap();
        let session = StudySession::new("alice", date("2024-03-10"), 45).unwrap();
        store.add_session(&session).unwrap();

        let snapshot = store.sessions_for_user("alice").unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0], session);
    }

    #[test]
    fn test_snapshot_is_per_user() {
        let store = SessionStore::open_memory().unwrap();
        store
            .add_session(&StudySession::new("alice", date("2024-03-10"), 45).unwrap())
            .unwrap();
        store
            .add_session(&StudySession::new("bob", date("2024-03-10"), 30).unwrap())
            .unwrap();

        assert_eq!(store.sessions_for_user("alice").unwrap().len(), 1);
        assert_eq!(store.sessions_for_user("bob").unwrap().len(), 1);
        assert_eq!(store.session_count().unwrap(), 2);
    }

    #[test]
    fn test_commit_session_stores_validated() {
        let store = SessionStore::open_memory().unwrap();
        let stored = commit_session(&store, Some("alice"), date("2024-03-10"), 25)
            .unwrap()
            .unwrap();
        assert_eq!(stored.duration_min, 25);
        assert_eq!(store.sessions_for_user("alice").unwrap().len(), 1);
    }

    #[test]
    fn test_commit_without_auth_is_silent_skip() {
        let store = SessionStore::open_memory().unwrap();
        let result = commit_session(&store, None, date("2024-03-10"), 25).unwrap();
        assert!(result.is_none());
        assert_eq!(store.session_count().unwrap(), 0);
    }

    #[test]
    fn test_commit_zero_duration_rejected() {
        let store = SessionStore::open_memory().unwrap();
        let err = commit_session(&store, Some("alice"), date("2024-03-10"), 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.session_count().unwrap(), 0);
    }
}
