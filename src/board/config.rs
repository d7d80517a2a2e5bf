use super::error::BoardError;
use super::position::{Position, STANDARD_START_FEN};
use serde::{Deserialize, Serialize};

/// Game setup carried by the persisted `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting position; the standard one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_fen: Option<String>,
    #[serde(default = "default_white_name")]
    pub white_name: String,
    #[serde(default = "default_black_name")]
    pub black_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_control: Option<TimeControl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub initial_time_ms: u64,
    #[serde(default)]
    pub increment_ms: u64,
}

fn default_white_name() -> String {
    "White".to_string()
}

fn default_black_name() -> String {
    "Black".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_fen: None,
            white_name: default_white_name(),
            black_name: default_black_name(),
            time_control: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate configuration text
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.white_name.trim().is_empty() || self.black_name.trim().is_empty() {
            return Err(BoardError::InvalidConfiguration(
                "Player names cannot be blank".to_string(),
            ));
        }
        if let Some(tc) = self.time_control {
            if tc.initial_time_ms == 0 {
                return Err(BoardError::InvalidConfiguration(
                    "Time control must start with a positive amount of time".to_string(),
                ));
            }
        }
        self.starting_position().map(|_| ())
    }

    pub fn starting_fen(&self) -> &str {
        self.starting_fen.as_deref().unwrap_or(STANDARD_START_FEN)
    }

    pub fn starting_position(&self) -> Result<Position, BoardError> {
        match &self.starting_fen {
            Some(fen) => Position::from_fen(fen),
            None => Ok(Position::standard()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
