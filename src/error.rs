//! Error types shared across the arcade
//!
//! Every failure here is recoverable by the player: re-upload, pick another
//! grade, or carry on with the fallback report.

/// A custom question upload that cannot be used.
///
/// Uploads are all-or-nothing, so a single bad element rejects the file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("the file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the file must contain a JSON array of questions")]
    NotAnArray,

    #[error("the file does not contain any questions")]
    Empty,

    #[error("question {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

impl ImportError {
    /// Message shown in the blocking upload alert
    pub fn user_message(&self) -> String {
        format!("Could not load your questions ({self}). Please fix the file or continue with the built-in questions.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no questions available for this game")]
    EmptyPool,
}

/// Failures of the performance report request.
///
/// None of these reach the player; they are logged and swapped for the
/// fallback report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response had no text candidate")]
    EmptyResponse,

    #[error("response was not valid report JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("report field `{0}` is missing or empty")]
    Schema(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ArcadeError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("cannot start {game}: {source}")]
    CannotStart {
        game: &'static str,
        #[source]
        source: SessionError,
    },

    #[error("action not available on the current screen")]
    WrongScreen,

    #[error(transparent)]
    Import(#[from] ImportError),
}
