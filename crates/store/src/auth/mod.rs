//! Authentication service.
//!
//! Password login and registration over the users file. Passwords are
//! stored as Argon2id PHC hashes, never in the clear.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use sakura_core::{Role, Username};

use crate::db::users::{UserMap, UserRepository};
use crate::models::UserAccount;

/// Username of the account seeded into a fresh users file.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password of the seeded admin account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "123";

/// An authenticated operator.
#[derive(Debug, Clone)]
pub struct Session {
    /// Who is logged in.
    pub username: Username,
    /// Their role, which gates the menu they see.
    pub role: Role,
}

/// Authentication service.
///
/// Owns the in-memory account map and persists every mutation back to the
/// users file immediately.
pub struct AuthService {
    accounts: UserMap,
    repo: UserRepository,
}

impl AuthService {
    /// Load the users file, seeding the default admin account when the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the file cannot be read or the
    /// seed cannot be written, and `AuthError::PasswordHash` if hashing the
    /// seed password fails.
    pub fn open(repo: UserRepository) -> Result<Self, AuthError> {
        let accounts = match repo.load()? {
            Some(accounts) => accounts,
            None => {
                let mut accounts = UserMap::new();
                let username = Username::parse(DEFAULT_ADMIN_USERNAME)?;
                let hash = hash_password(DEFAULT_ADMIN_PASSWORD)?;
                accounts.insert(username, UserAccount::seeded(hash, Role::Admin));
                repo.save(&accounts)?;
                tracing::info!("seeded default admin account");
                accounts
            }
        };

        Ok(Self { accounts, repo })
    }

    /// Login with username and password.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so a
    /// failed login leaks nothing about which part was wrong.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not match a
    /// stored account.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = Username::parse(username).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .accounts
            .get(&username)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        Ok(Session {
            username,
            role: account.role,
        })
    }

    /// Register a new customer account with the default `user` role and
    /// persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username does not parse
    /// and `AuthError::UsernameTaken` if it is already registered; in both
    /// cases the user store is left untouched.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = Username::parse(username)?;
        self.insert_account(username, password, Role::User)
    }

    /// Create an account with an explicit role (admin workflow).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UsernameTaken` if the username is already
    /// registered.
    pub fn add_user(
        &mut self,
        username: Username,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        self.insert_account(username, password, role)
    }

    fn insert_account(
        &mut self,
        username: Username,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        if self.accounts.contains_key(&username) {
            return Err(AuthError::UsernameTaken);
        }

        let hash = hash_password(password)?;
        self.accounts.insert(username, UserAccount::new(hash, role));
        self.repo.save(&self.accounts)?;
        Ok(())
    }

    /// All accounts, in username order.
    pub fn accounts(&self) -> impl Iterator<Item = (&Username, &UserAccount)> {
        self.accounts.iter()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no accounts exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn service(dir: &tempfile::TempDir) -> AuthService {
        let config = StoreConfig::with_data_dir(dir.path());
        AuthService::open(UserRepository::new(&config)).unwrap()
    }

    #[test]
    fn test_open_seeds_default_admin() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);

        assert_eq!(auth.len(), 1);
        let session = auth
            .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .unwrap();
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_seed_happens_once() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut auth = service(&dir);
            auth.register("hana", "petals").unwrap();
        }

        // Reopening reads the file; it must not re-seed or lose accounts.
        let auth = service(&dir);
        assert_eq!(auth.len(), 2);
    }

    #[test]
    fn test_login_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);

        let err = auth.login(DEFAULT_ADMIN_USERNAME, "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_unknown_user_is_same_error() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);

        let err = auth.login("nobody", "123").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = service(&dir);

        auth.register("hana", "petals").unwrap();
        let session = auth.login("hana", "petals").unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.username.as_str(), "hana");
    }

    #[test]
    fn test_register_stores_hash_not_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = service(&dir);
        auth.register("hana", "petals").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!contents.contains("petals"));
        assert!(contents.contains("$argon2"));
    }

    #[test]
    fn test_duplicate_registration_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = service(&dir);
        auth.register("hana", "petals").unwrap();

        let err = auth.register("hana", "other").unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));

        // Original password still works; the collision did not overwrite it.
        auth.login("hana", "petals").unwrap();
        assert_eq!(auth.len(), 2);
    }

    #[test]
    fn test_add_user_with_admin_role() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = service(&dir);

        auth.add_user(Username::parse("boss").unwrap(), "secret", Role::Admin)
            .unwrap();
        let session = auth.login("boss", "secret").unwrap();
        assert!(session.role.is_admin());
    }

    #[test]
    fn test_registered_date_is_set_on_register() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = service(&dir);
        auth.register("hana", "petals").unwrap();

        let (_, account) = auth
            .accounts()
            .find(|(name, _)| name.as_str() == "hana")
            .unwrap();
        assert!(account.registered_date.is_some());
    }
}
