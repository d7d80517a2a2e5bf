use super::navigation::{DismissCommand, NavigationCommand};
use crate::board::BoardModel;
use crate::errors::Result;
use crate::outcome::OutcomeContext;
use crate::storage::ConfigStore;
use tracing::{debug, error, info};

/// Reloads the persisted configuration and restarts the board for a rematch
#[derive(Debug, Clone)]
pub struct GameResetCoordinator<B: BoardModel> {
    store: ConfigStore,
    board: B,
}

impl<B: BoardModel> GameResetCoordinator<B> {
    pub fn new(store: ConfigStore, board: B) -> Self {
        Self { store, board }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn into_board(self) -> B {
        self.board
    }

    /// Start a new game from the configuration on disk.
    ///
    /// The configuration is read, applied to a copy of the board and the copy
    /// reset; only then does it replace the live board and is the outcome
    /// cleared. Any failure leaves both the board and the outcome as they were.
    pub fn rematch(&mut self, outcome: &mut OutcomeContext) -> Result<NavigationCommand> {
        info!("Rematch requested after {}", outcome.state());

        let config = self.store.read().map_err(|e| {
            error!("Rematch aborted: {}", e);
            e
        })?;

        let mut staged = self.board.clone();
        let reset = staged
            .apply_configuration(&config)
            .and_then(|()| staged.reset_board());
        if let Err(e) = reset {
            error!("Rematch aborted, board rejected configuration: {}", e);
            return Err(e.into());
        }
        debug!("Staged board reset from {} bytes of configuration", config.len());

        self.board = staged;
        outcome.clear();

        info!("Rematch ready, opening active game");
        Ok(NavigationCommand::start_game())
    }

    /// Close the end screen without touching configuration or board
    pub fn exit(&self) -> DismissCommand {
        debug!("Exit requested");
        DismissCommand::end_screen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardError;
    use crate::errors::EndgameError;
    use crate::outcome::TerminalState;
    use crate::screen::Screen;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Board that logs every call and can be told to fail its reset
    #[derive(Debug, Clone, Default)]
    struct RecordingBoard {
        calls: Arc<Mutex<Vec<String>>>,
        applied: Option<String>,
        resets: u32,
        fail_reset: bool,
    }

    impl BoardModel for RecordingBoard {
        fn apply_configuration(&mut self, config: &str) -> std::result::Result<(), BoardError> {
            self.calls.lock().unwrap().push(format!("apply:{}", config));
            self.applied = Some(config.to_string());
            Ok(())
        }

        fn reset_board(&mut self) -> std::result::Result<(), BoardError> {
            self.calls.lock().unwrap().push("reset".to_string());
            if self.fail_reset {
                return Err(BoardError::InvalidConfiguration("rejected".to_string()));
            }
            self.resets += 1;
            Ok(())
        }
    }

    fn checkmate() -> OutcomeContext {
        OutcomeContext::finished(TerminalState::WinByCheckmate, Some("White")).unwrap()
    }

    #[test]
    fn test_rematch_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        store.write("{\"white_name\":\"A\"}").unwrap();

        let board = RecordingBoard::default();
        let calls = board.calls.clone();
        let mut coordinator = GameResetCoordinator::new(store, board);
        let mut outcome = checkmate();

        let command = coordinator.rematch(&mut outcome).unwrap();
        assert_eq!(command.open, Screen::ActiveGame);
        assert_eq!(command.then_dismiss, DismissCommand::end_screen());
        assert_eq!(outcome.state(), TerminalState::None);
        assert_eq!(outcome.winner(), None);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["apply:{\"white_name\":\"A\"}".to_string(), "reset".to_string()]
        );
        assert_eq!(coordinator.board().resets, 1);
    }

    #[test]
    fn test_missing_config_never_reaches_board() {
        let temp_dir = TempDir::new().unwrap();
        let board = RecordingBoard::default();
        let calls = board.calls.clone();
        let mut coordinator = GameResetCoordinator::new(ConfigStore::new(temp_dir.path()), board);
        let mut outcome = checkmate();

        let err = coordinator.rematch(&mut outcome).unwrap_err();
        assert!(matches!(err, EndgameError::ConfigurationUnreadable { .. }));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(outcome, checkmate());
    }

    #[test]
    fn test_failed_reset_keeps_live_board() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        store.write("{}").unwrap();

        let board = RecordingBoard {
            applied: Some("previous".to_string()),
            fail_reset: true,
            ..Default::default()
        };
        let mut coordinator = GameResetCoordinator::new(store, board);
        let mut outcome = checkmate();

        let err = coordinator.rematch(&mut outcome).unwrap_err();
        assert!(matches!(err, EndgameError::BoardResetFailed(_)));
        assert_eq!(coordinator.board().applied.as_deref(), Some("previous"));
        assert_eq!(coordinator.board().resets, 0);
        assert_eq!(outcome.state(), TerminalState::WinByCheckmate);
    }

    #[test]
    fn test_exit_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let coordinator =
            GameResetCoordinator::new(ConfigStore::new(temp_dir.path()), RecordingBoard::default());
        assert_eq!(coordinator.exit(), coordinator.exit());
        assert_eq!(coordinator.exit().screen, Screen::EndScreen);
    }
}
