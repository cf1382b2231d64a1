//! User management for the admin menu.

use chrono::{DateTime, Local};

use sakura_core::{Role, Username};
use sakura_store::auth::{AuthError, AuthService};

/// One row of the registered-users page.
#[derive(Debug, Clone)]
pub struct UserSummary {
    /// Login name.
    pub username: Username,
    /// Account role.
    pub role: Role,
    /// When the account was registered; the seeded admin has none.
    pub registered_date: Option<DateTime<Local>>,
}

/// Create an account with an explicit role.
///
/// Role parsing happens at the prompt; by the time this runs the role is
/// one of the two valid values.
///
/// # Errors
///
/// Returns [`AuthError::UsernameTaken`] if the username already exists.
pub fn add_user(
    auth: &mut AuthService,
    username: Username,
    password: &str,
    role: Role,
) -> Result<(), AuthError> {
    auth.add_user(username, password, role)
}

/// Every registered account, in username order.
#[must_use]
pub fn list_users(auth: &AuthService) -> Vec<UserSummary> {
    auth.accounts()
        .map(|(username, account)| UserSummary {
            username: username.clone(),
            role: account.role,
            registered_date: account.registered_date,
        })
        .collect()
}
