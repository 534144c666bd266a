use crate::error::AppError;
use crate::store::KeyValueStore;
use directories::ProjectDirs;
use log::warn;
use std::fs;
use std::path::PathBuf;

/// File-backed store: one file per key under an application data directory.
///
/// Write and delete failures are logged and swallowed; the engine treats the
/// store as a local cache with fire-and-forget writes.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: PathBuf) -> Result<Self, AppError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open a store under the platform data directory for this application.
    pub fn open_default() -> Result<Self, AppError> {
        let proj_dirs =
            ProjectDirs::from("com", "blockwise", "Blockwise").ok_or(AppError::NoProjectDirs)?;
        Self::open(proj_dirs.data_dir().join("store"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            warn!("Failed to write '{key}': {e}");
        }
    }

    fn delete(&mut self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!("Failed to delete '{key}': {e}");
            }
        }
    }
}
