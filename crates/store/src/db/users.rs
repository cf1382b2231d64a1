//! User repository for the users file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use sakura_core::Username;

use super::RepositoryError;
use crate::config::StoreConfig;
use crate::models::UserAccount;

/// Accounts keyed by username, the in-memory form of the users file.
pub type UserMap = BTreeMap<Username, UserAccount>;

/// Repository for the users file.
pub struct UserRepository {
    path: PathBuf,
}

impl UserRepository {
    /// Create a repository for the configured users file.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.users_file(),
        }
    }

    /// Load the users file.
    ///
    /// Returns `Ok(None)` when the file does not exist yet, so the caller
    /// can seed the default admin account.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Option<UserMap>, RepositoryError> {
        super::read_json(&self.path)
    }

    /// Overwrite the users file with the given accounts.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be written.
    pub fn save(&self, users: &UserMap) -> Result<(), RepositoryError> {
        super::write_json(&self.path, users)
    }
}
