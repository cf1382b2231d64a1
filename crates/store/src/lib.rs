//! Sakura Store - catalog, cart, checkout, and flat-file persistence.
//!
//! This crate is the store engine behind the terminal front end:
//!
//! - [`config`] - data directory configuration from the environment
//! - [`db`] - whole-file JSON repositories for users, catalog, and history
//! - [`models`] - the persisted record shapes
//! - [`catalog`] - the in-memory product list shared by every workflow
//! - [`cart`] / [`checkout`] - staging and committing a purchase
//! - [`returns`] - putting purchased items back into stock
//! - [`auth`] - login, registration, and the seeded admin account
//!
//! The [`Store`] struct owns one session's worth of state and is passed by
//! mutable reference into the customer and admin workflows, so there is no
//! hidden global and admin edits are immediately visible to customer views.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod models;
pub mod returns;

use std::fs;

use thiserror::Error;

use auth::{AuthError, AuthService};
use cart::Cart;
use catalog::CatalogStore;
use checkout::CheckoutError;
use config::StoreConfig;
use db::{CatalogRepository, HistoryRepository, RepositoryError, UserRepository};
use models::PurchaseRecord;
use returns::{ReturnError, ReturnLine, ReturnReceipt};

/// Errors from opening a store session.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The data directory could not be created.
    #[error("cannot create data directory: {0}")]
    DataDir(#[from] std::io::Error),

    /// A data file could not be loaded or seeded.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The users file could not be loaded or seeded.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// One operator session's state: catalog, cart, accounts, and history.
pub struct Store {
    /// The shared product list.
    pub catalog: CatalogStore,
    /// The session cart.
    pub cart: Cart,
    /// Accounts and login.
    pub auth: AuthService,
    history: HistoryRepository,
}

impl Store {
    /// Open a store session: create the data directory if needed, load (or
    /// seed) the users and catalog files, and start with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError`] if the data directory cannot be created or a
    /// data file cannot be loaded or seeded.
    pub fn open(config: &StoreConfig) -> Result<Self, OpenError> {
        fs::create_dir_all(&config.data_dir)?;

        let catalog = CatalogStore::open(CatalogRepository::new(config))?;
        let auth = AuthService::open(UserRepository::new(config))?;
        let history = HistoryRepository::new(config);

        Ok(Self {
            catalog,
            cart: Cart::new(),
            auth,
            history,
        })
    }

    /// The purchase history, newest record last. Missing or damaged files
    /// read as empty.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Io`] only if an existing file cannot be
    /// read.
    pub fn purchase_history(&self) -> Result<Vec<PurchaseRecord>, RepositoryError> {
        self.history.load_or_default()
    }

    /// The flattened, globally-indexed list of returnable items.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Io`] only if an existing history file
    /// cannot be read.
    pub fn returnable_items(&self) -> Result<Vec<ReturnLine>, RepositoryError> {
        Ok(returns::returnable_items(&self.history.load_or_default()?))
    }

    /// Commit the cart. See [`checkout::checkout`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] on an empty cart or a failed write.
    pub fn checkout(&mut self) -> Result<PurchaseRecord, CheckoutError> {
        checkout::checkout(&mut self.catalog, &mut self.cart, &self.history)
    }

    /// Return units of a purchased item. See [`returns::return_item`].
    ///
    /// # Errors
    ///
    /// Returns [`ReturnError`] on a bad selection or quantity, a vanished
    /// product or size, or a failed write.
    pub fn return_item(&mut self, index: usize, quantity: u32) -> Result<ReturnReceipt, ReturnError> {
        returns::return_item(&mut self.catalog, &self.history, index, quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sakura_core::{ProductId, SizeCode};

    #[test]
    fn test_open_creates_data_dir_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_data_dir(dir.path().join("nested/data"));

        let store = Store::open(&config).unwrap();
        assert_eq!(store.catalog.products().len(), 3);
        assert_eq!(store.auth.len(), 1);
        assert!(store.cart.is_empty());
        assert!(config.users_file().exists());
        assert!(config.catalog_file().exists());
        // History appears on first checkout, not at open.
        assert!(!config.history_file().exists());
    }

    #[test]
    fn test_full_purchase_and_return_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_data_dir(dir.path());
        let mut store = Store::open(&config).unwrap();

        let size = SizeCode::parse("M").unwrap();
        store
            .cart
            .add(&store.catalog, ProductId::new(1), size.clone(), 2)
            .unwrap();
        store.checkout().unwrap();

        let items = store.returnable_items().unwrap();
        assert_eq!(items.len(), 1);

        store.return_item(0, 2).unwrap();
        assert!(store.returnable_items().unwrap().is_empty());

        let shirt = store.catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(shirt.available(&size), Some(4));
    }
}
