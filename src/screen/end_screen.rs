use super::coordinator::GameResetCoordinator;
use super::navigation::{DismissCommand, NavigationCommand};
use crate::board::BoardModel;
use crate::errors::{EndgameError, Result};
use crate::outcome::{DisplayText, OutcomeContext};
use tracing::warn;

/// End-of-game screen: shows the result and offers rematch or exit.
///
/// The screen can only be opened for a finished game. A failed rematch keeps
/// it open with the error available through [`EndScreen::last_error`].
#[derive(Debug)]
pub struct EndScreen<B: BoardModel> {
    outcome: OutcomeContext,
    coordinator: GameResetCoordinator<B>,
    message: DisplayText,
    open: bool,
    last_error: Option<String>,
}

impl<B: BoardModel> EndScreen<B> {
    pub fn open(outcome: OutcomeContext, coordinator: GameResetCoordinator<B>) -> Result<Self> {
        if !outcome.is_terminal() {
            return Err(EndgameError::NoTerminalState);
        }
        let message = outcome.describe()?;

        Ok(Self {
            outcome,
            coordinator,
            message,
            open: true,
            last_error: None,
        })
    }

    pub fn message(&self) -> &DisplayText {
        &self.message
    }

    pub fn outcome(&self) -> &OutcomeContext {
        &self.outcome
    }

    pub fn coordinator(&self) -> &GameResetCoordinator<B> {
        &self.coordinator
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn rematch(&mut self) -> Result<NavigationCommand> {
        if !self.open {
            return Err(EndgameError::ScreenClosed);
        }

        match self.coordinator.rematch(&mut self.outcome) {
            Ok(command) => {
                self.open = false;
                self.last_error = None;
                Ok(command)
            }
            Err(e) => {
                warn!("End screen stays open after failed rematch: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn exit(&mut self) -> DismissCommand {
        self.open = false;
        self.coordinator.exit()
    }

    /// Hand the outcome and coordinator back to the host
    pub fn into_parts(self) -> (OutcomeContext, GameResetCoordinator<B>) {
        (self.outcome, self.coordinator)
    }
}
