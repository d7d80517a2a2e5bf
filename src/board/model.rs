use super::config::{GameConfig, TimeControl};
use super::error::BoardError;
use super::piece::Color;
use super::position::Position;
use tracing::debug;

/// The game-state engine the end screen resets between games.
///
/// `apply_configuration` stages the text for the next game and
/// `reset_board` rebuilds all game state from it. `Clone` lets a caller
/// stage a reset on a copy and keep the original if anything fails.
pub trait BoardModel: Clone {
    fn apply_configuration(&mut self, config: &str) -> Result<(), BoardError>;
    fn reset_board(&mut self) -> Result<(), BoardError>;
}

/// Remaining time for each side, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clocks {
    pub white_ms: u64,
    pub black_ms: u64,
    pub increment_ms: u64,
}

impl Clocks {
    pub fn new(time_control: TimeControl) -> Self {
        Self {
            white_ms: time_control.initial_time_ms,
            black_ms: time_control.initial_time_ms,
            increment_ms: time_control.increment_ms,
        }
    }

    pub fn remaining(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white_ms,
            Color::Black => self.black_ms,
        }
    }

    /// Charge `elapsed_ms` to a side and credit the increment
    pub fn spend(&mut self, color: Color, elapsed_ms: u64) {
        let clock = match color {
            Color::White => &mut self.white_ms,
            Color::Black => &mut self.black_ms,
        };
        *clock = clock.saturating_sub(elapsed_ms).saturating_add(self.increment_ms);
    }
}

/// Chess game state driven by a JSON [`GameConfig`].
///
/// Move legality is the rules engine's job; this type records what it is
/// told and knows how to start over.
#[derive(Debug, Clone, Default)]
pub struct ChessBoard {
    config_text: Option<String>,
    config: Option<GameConfig>,
    position: Position,
    move_history: Vec<String>,
    clocks: Option<Clocks>,
}

impl ChessBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration text exactly as it was applied
    pub fn config_text(&self) -> Option<&str> {
        self.config_text.as_deref()
    }

    pub fn config(&self) -> Option<&GameConfig> {
        self.config.as_ref()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    pub fn clocks(&self) -> Option<&Clocks> {
        self.clocks.as_ref()
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn to_ascii(&self) -> String {
        self.position.to_ascii()
    }

    pub fn player_name(&self, color: Color) -> String {
        match (&self.config, color) {
            (Some(config), Color::White) => config.white_name.clone(),
            (Some(config), Color::Black) => config.black_name.clone(),
            (None, color) => color.to_string(),
        }
    }

    /// Record a move reported by the rules engine and pass the turn
    pub fn record_move(&mut self, notation: &str, elapsed_ms: u64) {
        let mover = self.position.active_color();
        if let Some(clocks) = self.clocks.as_mut() {
            clocks.spend(mover, elapsed_ms);
        }
        self.move_history.push(notation.to_string());
        self.position.pass_turn();
    }
}

impl BoardModel for ChessBoard {
    fn apply_configuration(&mut self, config: &str) -> Result<(), BoardError> {
        let parsed = GameConfig::parse(config)?;
        debug!(
            "Applied configuration for {} vs {}",
            parsed.white_name, parsed.black_name
        );
        self.config_text = Some(config.to_string());
        self.config = Some(parsed);
        Ok(())
    }

    fn reset_board(&mut self) -> Result<(), BoardError> {
        let config = self.config.as_ref().ok_or(BoardError::NotConfigured)?;
        let position = config.starting_position()?;
        let clocks = config.time_control.map(Clocks::new);

        self.position = position;
        self.move_history.clear();
        self.clocks = clocks;
        debug!("Board reset to {}", self.position.to_fen());
        Ok(())
    }
}
