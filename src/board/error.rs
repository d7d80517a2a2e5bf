use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidConfiguration(String),
    InvalidFen(String),
    InvalidSquare(String),
    NotConfigured,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BoardError::InvalidFen(msg) => write!(f, "Invalid FEN: {}", msg),
            BoardError::InvalidSquare(msg) => write!(f, "Invalid square: {}", msg),
            BoardError::NotConfigured => write!(f, "No configuration has been applied"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::InvalidConfiguration(err.to_string())
    }
}
