use crate::board::BoardError;
use crate::outcome::TerminalState;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EndgameError {
    #[error("Configuration unreadable at {}: {reason}", .path.display())]
    ConfigurationUnreadable { path: PathBuf, reason: String },

    #[error("Board reset failed: {0}")]
    BoardResetFailed(#[from] BoardError),

    #[error("Unrecognized terminal state code: {0}")]
    UnrecognizedTerminalState(i64),

    #[error("Unrecognized terminal state name: {0}")]
    UnrecognizedStateName(String),

    #[error("No terminal state has been recorded")]
    NoTerminalState,

    #[error("A winner name is required for {0}")]
    MissingWinner(TerminalState),

    #[error("An outcome ({0}) is already recorded for this game")]
    OutcomeAlreadyRecorded(TerminalState),

    #[error("The end screen has already been closed")]
    ScreenClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl EndgameError {
    /// Whether the error came out of a rematch attempt and left the end screen usable
    pub fn is_rematch_failure(&self) -> bool {
        matches!(
            self,
            EndgameError::ConfigurationUnreadable { .. } | EndgameError::BoardResetFailed(_)
        )
    }

    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        EndgameError::ConfigurationUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EndgameError>;
