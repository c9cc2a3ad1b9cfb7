use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixtures: {0}")]
    Fixtures(#[from] serde_json::Error),

    #[error("Invalid fixtures: {0}")]
    InvalidFixtures(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Unknown choice {choice} for {group_id}")]
    UnknownChoice { group_id: String, choice: String },

    #[error("Rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(i64),

    #[error("Match {match_id} is hidden; expand show {show_id} to rate it")]
    MatchHidden { show_id: String, match_id: String },

    #[error("Unrecognized component id: {0}")]
    BadComponentId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound { kind, id: id.into() }
    }
}
