pub mod app;
pub mod commands;
pub mod display;

pub use app::{App, AppSettings};
pub use commands::{Cli, Commands, ConfigCommand, OutcomeArgs};
pub use display::{render_dismiss, render_end_screen, render_navigation, render_new_game};
