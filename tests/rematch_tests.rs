//! Rematch and exit against a real config.json on disk

use endscreen::board::Color;
use endscreen::{
    BoardModel, ChessBoard, ConfigStore, EndScreen, EndgameError, GameResetCoordinator,
    NavigationCommand, OutcomeContext, Screen, TerminalState,
};
use tempfile::TempDir;

const TIMED_CONFIG: &str = r#"{
    "white_name": "Alice",
    "black_name": "Bob",
    "time_control": { "initial_time_ms": 180000, "increment_ms": 2000 }
}"#;

/// Storage root in a temp directory plus a board mid-game
struct TestEnvironment {
    _temp_dir: TempDir,
    store: ConfigStore,
}

impl TestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ConfigStore::new(temp_dir.path().join("files"));
        Self {
            _temp_dir: temp_dir,
            store,
        }
    }

    fn played_board(&self) -> ChessBoard {
        let mut board = ChessBoard::new();
        board.apply_configuration(TIMED_CONFIG).unwrap();
        board.reset_board().unwrap();
        board.record_move("e4", 4_000);
        board.record_move("e5", 6_000);
        board.record_move("Qh5", 1_000);
        board
    }

    fn coordinator(&self) -> GameResetCoordinator<ChessBoard> {
        GameResetCoordinator::new(self.store.clone(), self.played_board())
    }
}

fn checkmate_by_white() -> OutcomeContext {
    OutcomeContext::finished(TerminalState::WinByCheckmate, Some("White")).unwrap()
}

#[test]
fn test_rematch_clears_outcome_and_resets_board() {
    let env = TestEnvironment::new();
    env.store.write(TIMED_CONFIG).unwrap();
    let mut coordinator = env.coordinator();
    let mut outcome = checkmate_by_white();

    let command = coordinator.rematch(&mut outcome).unwrap();
    assert_eq!(command, NavigationCommand::start_game());
    assert_eq!(command.open, Screen::ActiveGame);
    assert_eq!(outcome.state(), TerminalState::None);

    let board = coordinator.board();
    assert!(board.move_history().is_empty());
    assert_eq!(board.position().active_color(), Color::White);
    assert_eq!(board.position().fullmove_number(), 1);
    let clocks = board.clocks().unwrap();
    assert_eq!(clocks.white_ms, 180_000);
    assert_eq!(clocks.black_ms, 180_000);
}

#[test]
fn test_board_receives_config_byte_for_byte() {
    let env = TestEnvironment::new();
    let blob = "{\n  \"white_name\": \"Ünal\",\r\n  \"black_name\": \"Bo\"\t}\n\n";
    env.store.write(blob).unwrap();
    let mut coordinator = env.coordinator();

    coordinator.rematch(&mut checkmate_by_white()).unwrap();
    assert_eq!(coordinator.board().config_text(), Some(blob));
    assert_eq!(coordinator.board().player_name(Color::White), "Ünal");
}

#[test]
fn test_deleted_config_aborts_without_touching_state() {
    let env = TestEnvironment::new();
    env.store.write(TIMED_CONFIG).unwrap();
    std::fs::remove_file(env.store.path()).unwrap();

    let mut coordinator = env.coordinator();
    let before = coordinator.board().to_fen();
    let mut outcome = checkmate_by_white();

    let err = coordinator.rematch(&mut outcome).unwrap_err();
    assert!(matches!(err, EndgameError::ConfigurationUnreadable { .. }));
    assert!(err.is_rematch_failure());
    assert_eq!(outcome, checkmate_by_white());
    assert_eq!(coordinator.board().to_fen(), before);
    assert_eq!(coordinator.board().move_history().len(), 3);
}

#[test]
fn test_zero_length_config_is_unreadable() {
    let env = TestEnvironment::new();
    env.store.write("").unwrap();
    let mut coordinator = env.coordinator();
    let mut outcome = checkmate_by_white();

    assert!(matches!(
        coordinator.rematch(&mut outcome),
        Err(EndgameError::ConfigurationUnreadable { .. })
    ));
    assert!(outcome.is_terminal());
}

#[test]
fn test_malformed_config_fails_reset_atomically() {
    let env = TestEnvironment::new();
    let mut coordinator = env.coordinator();
    let mut outcome = checkmate_by_white();

    for bad in [
        "{ \"white_name\": ",
        r#"{ "starting_fen": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1" }"#,
    ] {
        env.store.write(bad).unwrap();
        let err = coordinator.rematch(&mut outcome).unwrap_err();
        assert!(matches!(err, EndgameError::BoardResetFailed(_)), "{}", bad);
        assert_eq!(outcome.state(), TerminalState::WinByCheckmate);
        assert_eq!(coordinator.board().move_history(), ["e4", "e5", "Qh5"]);
        assert_eq!(coordinator.board().config_text(), Some(TIMED_CONFIG));
    }
}

#[test]
fn test_config_edits_between_games_take_effect() {
    let env = TestEnvironment::new();
    env.store.write(TIMED_CONFIG).unwrap();
    let mut coordinator = env.coordinator();

    let mut outcome = checkmate_by_white();
    coordinator.rematch(&mut outcome).unwrap();
    assert_eq!(coordinator.board().player_name(Color::Black), "Bob");

    env.store
        .write(r#"{ "black_name": "Carol", "starting_fen": "4k3/8/8/8/8/8/8/4K3 b - - 0 1" }"#)
        .unwrap();
    outcome
        .record(TerminalState::DrawByInsufficientMaterial, None)
        .unwrap();
    coordinator.rematch(&mut outcome).unwrap();

    let board = coordinator.board();
    assert_eq!(board.player_name(Color::Black), "Carol");
    assert_eq!(board.position().active_color(), Color::Black);
    assert_eq!(board.position().piece_count(), 2);
    assert!(board.clocks().is_none());
}

#[test]
fn test_exit_twice_changes_nothing() {
    let env = TestEnvironment::new();
    let outcome = OutcomeContext::finished(TerminalState::WinByResignation, Some("Black")).unwrap();
    let mut screen = EndScreen::open(outcome.clone(), env.coordinator()).unwrap();

    let first = screen.exit();
    let second = screen.exit();
    assert_eq!(first, second);
    assert_eq!(first.screen, Screen::EndScreen);
    assert_eq!(screen.outcome(), &outcome);
    assert_eq!(screen.coordinator().board().move_history().len(), 3);
}

#[test]
fn test_end_screen_retry_after_failure() {
    let env = TestEnvironment::new();
    let outcome =
        OutcomeContext::finished(TerminalState::DrawByFiftyMoveRule, None).unwrap();
    let mut screen = EndScreen::open(outcome, env.coordinator()).unwrap();
    assert_eq!(screen.message().as_str(), "Draw\nby Fifty Move Rule reached");

    assert!(screen.rematch().is_err());
    assert!(screen.is_open());
    assert!(screen.last_error().is_some());

    env.store.write(TIMED_CONFIG).unwrap();
    screen.rematch().unwrap();
    assert!(!screen.is_open());

    let (outcome, coordinator) = screen.into_parts();
    assert_eq!(outcome.state(), TerminalState::None);
    assert!(coordinator.board().move_history().is_empty());
}
