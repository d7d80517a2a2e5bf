use crate::board::{ChessBoard, Color};
use crate::outcome::DisplayText;
use crate::screen::{DismissCommand, NavigationCommand};

/// Frame the end-screen message in a box, one centered line per row
pub fn render_end_screen(text: &DisplayText, unicode: bool) -> String {
    let lines: Vec<&str> = text.as_str().lines().collect();
    let inner_width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(16)
        + 4;

    let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = if unicode {
        ('┌', '┐', '└', '┘', '─', '│')
    } else {
        ('+', '+', '+', '+', '-', '|')
    };

    let rule: String = std::iter::repeat(horizontal).take(inner_width).collect();
    let mut output = format!("{}{}{}\n", top_left, rule, top_right);
    for line in lines {
        output.push_str(&format!(
            "{}{:^width$}{}\n",
            vertical,
            line,
            vertical,
            width = inner_width
        ));
    }
    output.push_str(&format!("{}{}{}", bottom_left, rule, bottom_right));
    output
}

pub fn render_navigation(command: &NavigationCommand) -> String {
    format!(
        "→ open {}, then close {}",
        command.open, command.then_dismiss.screen
    )
}

pub fn render_dismiss(command: &DismissCommand) -> String {
    format!("→ close {}", command.screen)
}

/// Fresh board plus who plays and how much time they have
pub fn render_new_game(board: &ChessBoard) -> String {
    let mut output = format!(
        "{} (White) vs {} (Black)\n\n{}\n\nFEN: {}",
        board.player_name(Color::White),
        board.player_name(Color::Black),
        board.to_ascii(),
        board.to_fen()
    );
    if let Some(clocks) = board.clocks() {
        output.push_str(&format!(
            "\nClock: {} each, +{} per move",
            format_duration_ms(clocks.white_ms),
            format_duration_ms(clocks.increment_ms)
        ));
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardModel;
    use crate::outcome::{classify, TerminalState};

    #[test]
    fn test_end_screen_box() {
        let text = classify(TerminalState::DrawByFiftyMoveRule, None).unwrap();
        let rendered = render_end_screen(&text, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Draw"));
        assert!(lines[2].contains("by Fifty Move Rule reached"));
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_new_game_summary() {
        let mut board = ChessBoard::new();
        board
            .apply_configuration(r#"{"time_control":{"initial_time_ms":300000,"increment_ms":3000}}"#)
            .unwrap();
        board.reset_board().unwrap();
        let summary = render_new_game(&board);
        assert!(summary.starts_with("White (White) vs Black (Black)"));
        assert!(summary.contains("Clock: 5:00 each, +3s per move"));
    }

    #[test]
    fn test_navigation_text() {
        assert_eq!(
            render_navigation(&NavigationCommand::start_game()),
            "→ open active game, then close end screen"
        );
        assert_eq!(
            render_dismiss(&DismissCommand::end_screen()),
            "→ close end screen"
        );
    }
}
