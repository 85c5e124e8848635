use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Persistence failure in one of the on-disk stores. These are always
/// handled as warnings: the in-memory store stays authoritative for the
/// rest of the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Path of a store file inside the user cache directory, creating the
/// directory on first use. `None` when no home directory is available.
pub fn store_path(file_name: &str) -> Option<PathBuf> {
    ProjectDirs::from("org", "gridrun", "gridrun").map(|dirs| {
        let cache_dir = dirs.cache_dir();
        let _ = fs::create_dir_all(cache_dir);
        cache_dir.join(file_name)
    })
}
