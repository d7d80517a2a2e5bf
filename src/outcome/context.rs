use super::{classify, DisplayText, TerminalState};
use crate::errors::{EndgameError, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// The outcome of the most recently finished game.
///
/// Created by the game engine, handed to the end screen, and cleared when a
/// rematch starts. A state is recorded once per game; recording again before
/// [`OutcomeContext::clear`] is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeContext {
    state: TerminalState,
    winner: Option<String>,
}

impl OutcomeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context that already holds a finished game
    pub fn finished(state: TerminalState, winner: Option<&str>) -> Result<Self> {
        let mut context = Self::new();
        context.record(state, winner)?;
        Ok(context)
    }

    /// Record how the game ended. The winner is kept only for win variants.
    pub fn record(&mut self, state: TerminalState, winner: Option<&str>) -> Result<()> {
        if self.state.is_terminal() {
            return Err(EndgameError::OutcomeAlreadyRecorded(self.state));
        }
        if !state.is_terminal() {
            return Err(EndgameError::NoTerminalState);
        }

        let winner = if state.is_win() {
            let name = winner
                .filter(|w| !w.trim().is_empty())
                .ok_or(EndgameError::MissingWinner(state))?;
            Some(name.to_string())
        } else {
            None
        };

        debug!("Recorded outcome {} (winner: {:?})", state, winner);
        self.state = state;
        self.winner = winner;
        Ok(())
    }

    /// Record an outcome straight from the engine's integer code
    pub fn record_code(&mut self, code: i64, winner: Option<&str>) -> Result<()> {
        let state = TerminalState::from_code(code)?;
        self.record(state, winner)
    }

    pub fn state(&self) -> TerminalState {
        self.state
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn describe(&self) -> Result<DisplayText> {
        classify(self.state, self.winner())
    }

    pub fn clear(&mut self) {
        self.state = TerminalState::None;
        self.winner = None;
    }
}

/// Mutex-guarded outcome for hosts that dispatch from more than one thread
#[derive(Debug, Clone, Default)]
pub struct SharedOutcome {
    inner: Arc<Mutex<OutcomeContext>>,
}

impl SharedOutcome {
    pub fn new(context: OutcomeContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Lock the outcome. A poisoned lock still yields the last written value.
    pub fn lock(&self) -> MutexGuard<'_, OutcomeContext> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, state: TerminalState, winner: Option<&str>) -> Result<()> {
        self.lock().record(state, winner)
    }

    pub fn snapshot(&self) -> OutcomeContext {
        self.lock().clone()
    }

    pub fn describe(&self) -> Result<DisplayText> {
        self.lock().describe()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
