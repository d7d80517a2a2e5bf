use anyhow::Result;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "ENDSCREEN_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "endscreen", "endscreen")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Storage root forced through the environment, if any
pub fn env_storage_root() -> Option<PathBuf> {
    std::env::var(DATA_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

/// Platform data directory used as the private storage root
pub fn platform_storage_root() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

pub fn default_settings_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}
