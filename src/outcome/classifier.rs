use super::TerminalState;
use crate::errors::{EndgameError, Result};
use std::fmt;

/// Two-line result message rendered by the end screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First line, e.g. "White wins" or "Draw"
    pub fn headline(&self) -> &str {
        self.0.split('\n').next().unwrap_or_default()
    }

    /// Second line, e.g. "by Checkmate"
    pub fn detail(&self) -> &str {
        self.0.split_once('\n').map_or("", |(_, rest)| rest)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Map a terminal state to the text shown on the end screen.
///
/// The winner is only consulted for the win variants and must be non-blank
/// there. `None` has nothing to report and is returned as an error so the
/// display path cannot render an empty screen.
pub fn classify(state: TerminalState, winner: Option<&str>) -> Result<DisplayText> {
    let text = match state {
        TerminalState::None => return Err(EndgameError::NoTerminalState),
        TerminalState::WinByCheckmate | TerminalState::WinByResignation => {
            let winner = winner
                .filter(|w| !w.trim().is_empty())
                .ok_or(EndgameError::MissingWinner(state))?;
            format!("{} wins\nby {}", winner, reason(state))
        }
        TerminalState::DrawByStalemate
        | TerminalState::DrawByRepetition
        | TerminalState::DrawByInsufficientMaterial
        | TerminalState::DrawByFiftyMoveRule => format!("Draw\nby {}", reason(state)),
    };

    Ok(DisplayText(text))
}

fn reason(state: TerminalState) -> &'static str {
    state.reason().unwrap_or_default()
}
