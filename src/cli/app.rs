use super::commands::{Commands, ConfigCommand, OutcomeArgs};
use super::display;
use crate::board::ChessBoard;
use crate::outcome::{OutcomeContext, TerminalState};
use crate::screen::{EndScreen, GameResetCoordinator};
use crate::storage::{self, ConfigStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Host settings, stored as TOML in the platform config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Private storage root holding config.json; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_root: Option<PathBuf>,
    /// Draw the end screen with box-drawing characters
    #[serde(default = "default_unicode_frame")]
    pub unicode_frame: bool,
}

fn default_unicode_frame() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage_root: None,
            unicode_frame: default_unicode_frame(),
        }
    }
}

impl AppSettings {
    pub fn default_settings_file() -> Result<PathBuf> {
        Ok(storage::default_settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the default location, creating the file if missing
    pub fn load_or_create_default() -> Result<Self> {
        Self::load_or_create(&Self::default_settings_file()?)
    }

    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content =
                std::fs::read_to_string(path).context("Failed to read settings file")?;
            let settings: AppSettings =
                toml::from_str(&content).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            let settings = AppSettings::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Storage root: environment override, then settings, then platform default
    pub fn resolve_storage_root(&self) -> Result<PathBuf> {
        if let Some(root) = storage::env_storage_root() {
            return Ok(root);
        }
        if let Some(root) = &self.storage_root {
            return Ok(root.clone());
        }
        storage::platform_storage_root()
    }
}

/// Command-line stand-in for the UI host that shows the end screen
pub struct App {
    pub settings: AppSettings,
    pub storage_root: PathBuf,
}

impl App {
    pub fn new() -> Result<Self> {
        let settings =
            AppSettings::load_or_create_default().context("Failed to initialize settings")?;
        let storage_root = settings.resolve_storage_root()?;
        Ok(Self::with_settings(settings, storage_root))
    }

    pub fn with_settings(settings: AppSettings, storage_root: PathBuf) -> Self {
        Self {
            settings,
            storage_root,
        }
    }

    /// Run one command and return the text to print
    pub fn dispatch(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Show { outcome } => self.handle_show(&outcome),
            Commands::Rematch { outcome } => self.handle_rematch(&outcome),
            Commands::Exit { outcome } => self.handle_exit(&outcome),
            Commands::Config { command } => match command {
                ConfigCommand::Path => Ok(self.handle_config_path()),
                ConfigCommand::Init => self.handle_config_init(),
                ConfigCommand::Show => self.handle_config_show(),
            },
        }
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::new(&self.storage_root)
    }

    /// Build the end screen for the game described on the command line
    pub fn end_screen(&self, args: &OutcomeArgs) -> Result<EndScreen<ChessBoard>> {
        let state: TerminalState = args.state.parse()?;
        let outcome = OutcomeContext::finished(state, args.winner.as_deref())
            .context("Invalid game outcome")?;
        let coordinator = GameResetCoordinator::new(self.config_store(), ChessBoard::new());
        Ok(EndScreen::open(outcome, coordinator)?)
    }

    pub fn handle_show(&self, args: &OutcomeArgs) -> Result<String> {
        let screen = self.end_screen(args)?;
        Ok(display::render_end_screen(
            screen.message(),
            self.settings.unicode_frame,
        ))
    }

    pub fn handle_rematch(&self, args: &OutcomeArgs) -> Result<String> {
        let mut screen = self.end_screen(args)?;
        let mut output = display::render_end_screen(screen.message(), self.settings.unicode_frame);

        let command = match screen.rematch() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rematch failed, end screen remains open");
                return Err(anyhow::Error::new(e).context("Rematch failed"));
            }
        };

        let (_, coordinator) = screen.into_parts();
        output.push('\n');
        output.push_str(&display::render_navigation(&command));
        output.push_str("\n\n");
        output.push_str(&display::render_new_game(coordinator.board()));
        info!("New game started from {}", coordinator.store().path().display());
        Ok(output)
    }

    pub fn handle_exit(&self, args: &OutcomeArgs) -> Result<String> {
        let mut screen = self.end_screen(args)?;
        let mut output = display::render_end_screen(screen.message(), self.settings.unicode_frame);
        let command = screen.exit();
        output.push('\n');
        output.push_str(&display::render_dismiss(&command));
        Ok(output)
    }

    pub fn handle_config_path(&self) -> String {
        let store = self.config_store();
        let status = if store.exists() {
            "exists"
        } else {
            "missing, run 'endscreen config init'"
        };
        format!("{} ({})", store.path().display(), status)
    }

    pub fn handle_config_init(&self) -> Result<String> {
        let store = self.config_store();
        if store.exists() {
            warn!("Overwriting existing {}", store.path().display());
        }
        store
            .write_default()
            .context("Failed to write default configuration")?;
        Ok(format!("Wrote {}", store.path().display()))
    }

    pub fn handle_config_show(&self) -> Result<String> {
        Ok(self
            .config_store()
            .read()
            .context("Failed to read configuration")?)
    }
}
