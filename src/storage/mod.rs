pub mod config_store;
pub mod paths;

pub use config_store::{ConfigStore, CONFIG_FILE_NAME};
pub use paths::{default_settings_dir, env_storage_root, platform_storage_root, DATA_DIR_ENV};
