//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] sakura_core::UsernameError),

    /// Invalid credentials (wrong password or unknown username).
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Username already exists.
    #[error("username already exists")]
    UsernameTaken,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Users file error.
    #[error("user store error: {0}")]
    Repository(#[from] RepositoryError),
}
