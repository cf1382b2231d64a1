//! Integration tests for the Sakura store.
//!
//! Every test opens a real [`Store`] over a throwaway temp directory, so
//! the whole stack runs: seeding, the JSON repositories, and the
//! catalog/cart/checkout/returns state machine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sakura-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use rust_decimal::Decimal;
use tempfile::TempDir;

use sakura_core::{Price, ProductId, SizeCode};
use sakura_store::{Store, config::StoreConfig};

/// A store session over a throwaway data directory.
pub struct TestStore {
    /// The open session.
    pub store: Store,
    /// Config pointing into the temp directory.
    pub config: StoreConfig,
    _dir: TempDir,
}

impl TestStore {
    /// Open a fresh store over a new temp directory, seeding the default
    /// catalog and admin account.
    #[must_use]
    pub fn open() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StoreConfig::with_data_dir(dir.path());
        let store = Store::open(&config).expect("Failed to open store");
        Self {
            store,
            config,
            _dir: dir,
        }
    }

    /// Re-open the same data directory, as a new process would.
    #[must_use]
    pub fn reopen(self) -> Self {
        let store = Store::open(&self.config).expect("Failed to reopen store");
        Self { store, ..self }
    }

    /// Parse a data file into a JSON value for shape assertions.
    #[must_use]
    pub fn read_file(&self, name: &str) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.config.data_dir.join(name))
            .expect("Failed to read data file");
        serde_json::from_str(&contents).expect("Data file is not valid JSON")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::open()
    }
}

/// Shorthand for parsing a size code in tests.
#[must_use]
pub fn size(s: &str) -> SizeCode {
    SizeCode::parse(s).unwrap()
}

/// Shorthand for a product id in tests.
#[must_use]
pub const fn id(value: i32) -> ProductId {
    ProductId::new(value)
}

/// Shorthand for a two-decimal price in tests.
#[must_use]
pub fn price(cents: i64) -> Price {
    Price::new(Decimal::new(cents, 2))
}
