pub mod keys;
mod store;

pub use store::Store;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns the data directory holding the store database.
///
/// Resolution order:
/// 1. `STUDYONE_DATA_DIR` if set (tests, scripting).
/// 2. `~/.config/studyone-dev/` when `STUDYONE_ENV=dev`.
/// 3. `~/.config/studyone/` otherwise.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = if let Ok(explicit) = std::env::var("STUDYONE_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("STUDYONE_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("studyone-dev")
        } else {
            base_dir.join("studyone")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
