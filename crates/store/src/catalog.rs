//! The in-memory catalog store.

use rust_decimal::Decimal;

use sakura_core::{ProductId, SizeCode};

use crate::db::{CatalogRepository, RepositoryError};
use crate::models::Product;

/// The authoritative product list for one session.
///
/// Owned by the [`Store`](crate::Store) and passed by mutable reference into
/// both the customer-facing and admin workflows, so an admin edit is visible
/// to the next catalog view without any reload.
///
/// IDs come from a monotonic counter seeded with max(id)+1 at load time and
/// never recomputed from the list, so deleting every product does not reset
/// or collide id assignment within a session.
pub struct CatalogStore {
    products: Vec<Product>,
    next_id: ProductId,
    repo: CatalogRepository,
}

impl CatalogStore {
    /// Load the catalog from disk, seeding defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the catalog file cannot be read,
    /// parsed, or seeded.
    pub fn open(repo: CatalogRepository) -> Result<Self, RepositoryError> {
        let products = repo.load_or_seed()?;

        let next_id = products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(ProductId::FIRST, ProductId::next);

        Ok(Self {
            products,
            next_id,
            repo,
        })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Look up a product by id for mutation.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id == id)
    }

    /// Look up a product by exact name, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name_matches(name))
    }

    /// Look up a product by exact name for mutation, ignoring case.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products
            .iter_mut()
            .find(|product| product.name_matches(name))
    }

    /// Case-insensitive substring search on product names.
    ///
    /// No match is an empty result, not an error.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Product> {
        let keyword = keyword.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Products stocked in the given size.
    #[must_use]
    pub fn filter_by_size(&self, size: &SizeCode) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.has_size(size))
            .collect()
    }

    /// Products priced within `min..=max`.
    #[must_use]
    pub fn filter_by_price(&self, min: Decimal, max: Decimal) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| {
                let amount = product.price.amount();
                min <= amount && amount <= max
            })
            .collect()
    }

    /// Take the next product id from the monotonic counter.
    pub fn allocate_id(&mut self) -> ProductId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Append a product to the catalog.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove a product by id, returning it if present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id == id)?;
        Some(self.products.remove(index))
    }

    /// Flush the whole catalog to disk.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the catalog file cannot be written.
    pub fn save(&self) -> Result<(), RepositoryError> {
        self.repo.save(&self.products)
    }
}
