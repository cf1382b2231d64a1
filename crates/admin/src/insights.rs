//! Catalog insights and stock monitoring.

use rust_decimal::Decimal;

use sakura_core::ProductId;
use sakura_store::catalog::CatalogStore;
use sakura_store::models::Product;

/// Aggregated stock at or below this level flags a product for restocking.
pub const LOW_STOCK_THRESHOLD: u64 = 3;

/// Catalog-wide totals for the insights page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogInsights {
    /// Number of products in the catalog.
    pub total_products: usize,
    /// Units in stock, summed over every product and size.
    pub total_stock_units: u64,
    /// Sum of price x total stock over all products.
    pub total_inventory_value: Decimal,
}

/// One row of the stock monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    /// Product id.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Units in stock across all sizes.
    pub total_stock: u64,
    /// Whether the product is at or below [`LOW_STOCK_THRESHOLD`].
    pub low: bool,
}

/// Compute catalog-wide totals. Pure read, no failure modes.
#[must_use]
pub fn catalog_insights(catalog: &CatalogStore) -> CatalogInsights {
    let products = catalog.products();

    let total_stock_units = products.iter().map(Product::total_stock).sum();
    let total_inventory_value = products
        .iter()
        .map(|product| product.price.amount() * Decimal::from(product.total_stock()))
        .sum();

    CatalogInsights {
        total_products: products.len(),
        total_stock_units,
        total_inventory_value,
    }
}

/// Aggregate every product's stock and flag the ones running low.
#[must_use]
pub fn monitor_stock(catalog: &CatalogStore) -> Vec<StockLevel> {
    catalog
        .products()
        .iter()
        .map(|product| {
            let total_stock = product.total_stock();
            StockLevel {
                id: product.id,
                name: product.name.clone(),
                total_stock,
                low: total_stock <= LOW_STOCK_THRESHOLD,
            }
        })
        .collect()
}
