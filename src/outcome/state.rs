use crate::errors::{EndgameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// How a game ended, as signalled by the game engine.
///
/// `None` means no terminal condition has been recorded yet. The integer codes
/// returned by [`TerminalState::code`] are the ones the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalState {
    #[default]
    None,
    #[serde(rename = "checkmate")]
    WinByCheckmate,
    #[serde(rename = "stalemate")]
    DrawByStalemate,
    #[serde(rename = "repetition")]
    DrawByRepetition,
    #[serde(rename = "insufficient-material")]
    DrawByInsufficientMaterial,
    #[serde(rename = "fifty-move-rule")]
    DrawByFiftyMoveRule,
    #[serde(rename = "resignation")]
    WinByResignation,
}

impl TerminalState {
    pub const ALL: [TerminalState; 7] = [
        TerminalState::None,
        TerminalState::WinByCheckmate,
        TerminalState::DrawByStalemate,
        TerminalState::DrawByRepetition,
        TerminalState::DrawByInsufficientMaterial,
        TerminalState::DrawByFiftyMoveRule,
        TerminalState::WinByResignation,
    ];

    /// Decode an engine code, rejecting anything outside the known range
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(TerminalState::None),
            1 => Ok(TerminalState::WinByCheckmate),
            2 => Ok(TerminalState::DrawByStalemate),
            3 => Ok(TerminalState::DrawByRepetition),
            4 => Ok(TerminalState::DrawByInsufficientMaterial),
            5 => Ok(TerminalState::DrawByFiftyMoveRule),
            6 => Ok(TerminalState::WinByResignation),
            other => {
                error!("Unrecognized terminal state code {}", other);
                Err(EndgameError::UnrecognizedTerminalState(other))
            }
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            TerminalState::None => 0,
            TerminalState::WinByCheckmate => 1,
            TerminalState::DrawByStalemate => 2,
            TerminalState::DrawByRepetition => 3,
            TerminalState::DrawByInsufficientMaterial => 4,
            TerminalState::DrawByFiftyMoveRule => 5,
            TerminalState::WinByResignation => 6,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(
            self,
            TerminalState::WinByCheckmate | TerminalState::WinByResignation
        )
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            TerminalState::DrawByStalemate
                | TerminalState::DrawByRepetition
                | TerminalState::DrawByInsufficientMaterial
                | TerminalState::DrawByFiftyMoveRule
        )
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::None)
    }

    /// The rule name shown on the second line of the end screen
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            TerminalState::None => None,
            TerminalState::WinByCheckmate => Some("Checkmate"),
            TerminalState::DrawByStalemate => Some("Stalemate"),
            TerminalState::DrawByRepetition => Some("Repetition"),
            TerminalState::DrawByInsufficientMaterial => Some("Insufficient Material"),
            TerminalState::DrawByFiftyMoveRule => Some("Fifty Move Rule reached"),
            TerminalState::WinByResignation => Some("Resignation"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalState::None => "none",
            TerminalState::WinByCheckmate => "checkmate",
            TerminalState::DrawByStalemate => "stalemate",
            TerminalState::DrawByRepetition => "repetition",
            TerminalState::DrawByInsufficientMaterial => "insufficient-material",
            TerminalState::DrawByFiftyMoveRule => "fifty-move-rule",
            TerminalState::WinByResignation => "resignation",
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TerminalState {
    type Err = EndgameError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        TerminalState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| EndgameError::UnrecognizedStateName(s.to_string()))
    }
}

impl TryFrom<i64> for TerminalState {
    type Error = EndgameError;

    fn try_from(code: i64) -> Result<Self> {
        TerminalState::from_code(code)
    }
}
