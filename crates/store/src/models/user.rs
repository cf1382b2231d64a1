//! User accounts.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use sakura_core::Role;

use super::timestamp;

/// A stored user account, keyed by username in the users file.
///
/// The `password` field of the file holds an Argon2id PHC hash string, never
/// the password itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Argon2id PHC hash of the account password.
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// When the account was registered. The seeded admin has none.
    #[serde(
        default,
        with = "timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_date: Option<DateTime<Local>>,
}

impl UserAccount {
    /// Create an account registered now.
    #[must_use]
    pub fn new(password_hash: String, role: Role) -> Self {
        Self {
            password_hash,
            role,
            registered_date: Some(Local::now()),
        }
    }

    /// Create an account with no registration date (the seeded admin).
    #[must_use]
    pub const fn seeded(password_hash: String, role: Role) -> Self {
        Self {
            password_hash,
            role,
            registered_date: None,
        }
    }
}
