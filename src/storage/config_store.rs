use crate::board::GameConfig;
use crate::errors::{EndgameError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The persisted game configuration under the application's storage root.
///
/// Every [`ConfigStore::read`] goes back to disk, so edits made between games
/// show up on the next rematch.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Read the whole file, exactly as many bytes as it reports, as UTF-8 text
    pub fn read(&self) -> Result<String> {
        let path = self.path();

        let file = File::open(&path).map_err(|e| {
            warn!("Cannot open {}: {}", path.display(), e);
            EndgameError::unreadable(&path, describe_io(&e))
        })?;

        let length = file
            .metadata()
            .map_err(|e| EndgameError::unreadable(&path, describe_io(&e)))?
            .len();
        if length == 0 {
            return Err(EndgameError::unreadable(&path, "file is empty"));
        }
        let length = usize::try_from(length)
            .map_err(|_| EndgameError::unreadable(&path, "file is too large to load"))?;

        let content = read_exact_len(file, length, &path)?;
        debug!("Read {} bytes from {}", length, path.display());

        String::from_utf8(content)
            .map_err(|e| EndgameError::unreadable(&path, format!("not valid UTF-8: {}", e)))
    }

    /// Persist configuration text, creating the storage root if needed
    pub fn write(&self, text: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path(), text)?;
        debug!("Wrote {} bytes to {}", text.len(), self.path().display());
        Ok(())
    }

    /// Write the default game configuration
    pub fn write_default(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&GameConfig::default())?;
        self.write(&text)
    }
}

/// Read exactly `len` bytes; running out early is a short read
fn read_exact_len<R: Read>(mut reader: R, len: usize, path: &Path) -> Result<Vec<u8>> {
    let mut content = vec![0u8; len];
    reader.read_exact(&mut content).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            EndgameError::unreadable(
                path,
                format!("short read: fewer than the {} bytes reported", len),
            )
        } else {
            EndgameError::unreadable(path, describe_io(&e))
        }
    })?;
    Ok(content)
}

fn describe_io(err: &std::io::Error) -> String {
    match err.kind() {
        ErrorKind::NotFound => "file not found".to_string(),
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => err.to_string(),
    }
}
