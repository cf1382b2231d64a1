//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SAKURA_DATA_DIR` - Directory holding the three data files
//!   (default: `data`)
//!
//! File names inside the data directory are fixed: `users.json`,
//! `catalog.json`, and `purchase_history.json`.

use std::path::PathBuf;

/// Users file name inside the data directory.
pub const USERS_FILE: &str = "users.json";
/// Catalog file name inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";
/// Purchase history file name inside the data directory.
pub const HISTORY_FILE: &str = "purchase_history.json";

const DEFAULT_DATA_DIR: &str = "data";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the users, catalog, and history files.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var_os("SAKURA_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Self { data_dir }
    }

    /// Configuration rooted at an explicit data directory.
    ///
    /// Used by the `--data-dir` CLI override and by tests.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the users file.
    #[must_use]
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    /// Path of the catalog file.
    #[must_use]
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    /// Path of the purchase history file.
    #[must_use]
    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_dir_paths() {
        let config = StoreConfig::with_data_dir("/tmp/sakura");
        assert_eq!(config.users_file(), PathBuf::from("/tmp/sakura/users.json"));
        assert_eq!(
            config.catalog_file(),
            PathBuf::from("/tmp/sakura/catalog.json")
        );
        assert_eq!(
            config.history_file(),
            PathBuf::from("/tmp/sakura/purchase_history.json")
        );
    }
}
