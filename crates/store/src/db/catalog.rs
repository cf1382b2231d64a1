//! Catalog repository for the catalog file.

use std::path::PathBuf;

use rust_decimal::Decimal;

use sakura_core::{Price, ProductId, SizeCode};

use super::RepositoryError;
use crate::config::StoreConfig;
use crate::models::Product;

/// Repository for the catalog file.
pub struct CatalogRepository {
    path: PathBuf,
}

impl CatalogRepository {
    /// Create a repository for the configured catalog file.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.catalog_file(),
        }
    }

    /// Load the catalog, seeding the default products if the file is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be read, parsed, or
    /// (when seeding) written.
    pub fn load_or_seed(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(products) = super::read_json(&self.path)? {
            return Ok(products);
        }

        let products = default_catalog();
        self.save(&products)?;
        tracing::info!(path = %self.path.display(), "seeded default catalog");
        Ok(products)
    }

    /// Overwrite the catalog file with the given products.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be written.
    pub fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        super::write_json(&self.path, &products)
    }
}

fn seed_product(id: i32, name: &str, price_cents: i64, stock: &[(&str, u32)]) -> Product {
    let quantities = stock
        .iter()
        .map(|&(size, qty)| {
            let size = SizeCode::parse(size).unwrap_or_else(|_| unreachable!("seed sizes are valid"));
            (size, qty)
        })
        .collect();

    Product::from_size_quantities(
        ProductId::new(id),
        name.to_owned(),
        Price::new(Decimal::new(price_cents, 2)),
        quantities,
    )
}

/// The three products every fresh catalog starts with.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    vec![
        seed_product(1, "T-Shirt", 2_500_00, &[("S", 3), ("M", 4), ("L", 3)]),
        seed_product(2, "Jeans", 4_890_00, &[("M", 2), ("L", 2), ("XL", 1)]),
        seed_product(3, "Jacket", 7_600_00, &[("M", 1), ("L", 2)]),
    ]
}
