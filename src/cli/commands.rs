use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "endscreen")]
#[command(about = "End-of-game result screen and rematch for a two-player chess game")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How the finished game ended, as reported by the game engine
#[derive(Args, Debug, Clone)]
pub struct OutcomeArgs {
    /// Terminal state: checkmate, resignation, stalemate, repetition,
    /// insufficient-material or fifty-move-rule
    #[arg(short, long)]
    pub state: String,
    /// Name of the winning side (required for checkmate and resignation)
    #[arg(short, long)]
    pub winner: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the end screen for a finished game
    ///
    /// Example: endscreen show --state checkmate --winner White
    Show {
        #[command(flatten)]
        outcome: OutcomeArgs,
    },

    /// Show the end screen, then start a rematch
    ///
    /// Reloads config.json from the storage directory, resets the board
    /// from it and prints the fresh position.
    ///
    /// Example: endscreen rematch --state stalemate
    Rematch {
        #[command(flatten)]
        outcome: OutcomeArgs,
    },

    /// Show the end screen, then close it
    Exit {
        #[command(flatten)]
        outcome: OutcomeArgs,
    },

    /// Persisted game configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show where config.json is stored
    Path,
    /// Write the default config.json (overwrites an existing one)
    Init,
    /// Print the current config.json
    Show,
}
