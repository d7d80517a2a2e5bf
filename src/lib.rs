pub mod board;
pub mod cli;
pub mod errors;
pub mod outcome;
pub mod screen;
pub mod storage;

// Re-export the types a UI host needs
pub use board::{BoardError, BoardModel, ChessBoard};
pub use errors::{EndgameError, Result};
pub use outcome::{classify, DisplayText, OutcomeContext, SharedOutcome, TerminalState};
pub use screen::{DismissCommand, EndScreen, GameResetCoordinator, NavigationCommand, Screen};
pub use storage::ConfigStore;
