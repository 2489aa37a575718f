pub mod config;
pub mod data;
pub mod heatmap;
pub mod session;
pub mod stats;
pub mod timer;

use studystreak_core::CoreError;

/// Resolve the acting user or fail with a readable message.
pub fn require_user(user: Option<&str>) -> Result<String, CoreError> {
    user.map(str::to_string).ok_or_else(|| {
        CoreError::Custom("no user given (pass --user or set STUDYSTREAK_USER)".into())
    })
}

/// Today's local calendar date.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
