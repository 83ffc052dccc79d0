use std::error::Error;

/// Error types reported by a player service backend.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerError {
    /// The backend has not finished loading its media yet.
    NotReady,
    /// The backend refused the command (e.g. an out-of-range seek).
    Rejected(String),
    /// Any other backend failure.
    Backend(String),
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::NotReady => write!(f, "Player not ready"),
            PlayerError::Rejected(s) => write!(f, "Command rejected: {}", s),
            PlayerError::Backend(s) => write!(f, "Backend error: {}", s),
        }
    }
}

impl Error for PlayerError {}

impl From<tokio::task::JoinError> for PlayerError {
    fn from(e: tokio::task::JoinError) -> Self {
        PlayerError::Backend(e.to_string())
    }
}
