//! Product records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sakura_core::{Price, ProductId, SizeCode};

/// A catalog product with per-size stock.
///
/// `sizes` carries the display order; `stock` maps each size to its
/// remaining quantity. The two always cover the same size set: admin flows
/// build `sizes` from the entered per-size quantities, so the invariant
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product ID.
    pub id: ProductId,
    /// Display name, unique case-insensitively across the catalog.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Sizes in display order.
    pub sizes: Vec<SizeCode>,
    /// Remaining quantity per size.
    pub stock: BTreeMap<SizeCode, u32>,
}

impl Product {
    /// Build a product from per-size quantities in entry order.
    ///
    /// `sizes` is derived from the quantity list, keeping its order.
    #[must_use]
    pub fn from_size_quantities(
        id: ProductId,
        name: String,
        price: Price,
        quantities: Vec<(SizeCode, u32)>,
    ) -> Self {
        let sizes = quantities.iter().map(|(size, _)| size.clone()).collect();
        let stock = quantities.into_iter().collect();
        Self {
            id,
            name,
            price,
            sizes,
            stock,
        }
    }

    /// Total units in stock, summed over all sizes.
    #[must_use]
    pub fn total_stock(&self) -> u64 {
        self.stock.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Remaining quantity for one size, or `None` if the size is not
    /// stocked.
    #[must_use]
    pub fn available(&self, size: &SizeCode) -> Option<u32> {
        self.stock.get(size).copied()
    }

    /// Whether this product carries the given size.
    #[must_use]
    pub fn has_size(&self, size: &SizeCode) -> bool {
        self.stock.contains_key(size)
    }

    /// Case-insensitive name comparison, used for duplicate checks and
    /// return lookups.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Comma-separated size list for display.
    #[must_use]
    pub fn sizes_display(&self) -> String {
        self.sizes
            .iter()
            .map(SizeCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn size(s: &str) -> SizeCode {
        SizeCode::parse(s).unwrap()
    }

    fn shirt() -> Product {
        Product::from_size_quantities(
            ProductId::new(1),
            "T-Shirt".to_owned(),
            Price::new(Decimal::new(2_500_00, 2)),
            vec![(size("S"), 3), (size("M"), 4), (size("L"), 3)],
        )
    }

    #[test]
    fn test_sizes_follow_entry_order() {
        let product = shirt();
        assert_eq!(product.sizes, vec![size("S"), size("M"), size("L")]);
    }

    #[test]
    fn test_sizes_and_stock_cover_same_set() {
        let product = shirt();
        assert!(product.sizes.iter().all(|s| product.stock.contains_key(s)));
        assert_eq!(product.sizes.len(), product.stock.len());
    }

    #[test]
    fn test_total_stock() {
        assert_eq!(shirt().total_stock(), 10);
    }

    #[test]
    fn test_available() {
        let product = shirt();
        assert_eq!(product.available(&size("M")), Some(4));
        assert_eq!(product.available(&size("XL")), None);
    }

    #[test]
    fn test_name_matches_ignores_case() {
        assert!(shirt().name_matches("t-shirt"));
        assert!(!shirt().name_matches("Jeans"));
    }

    #[test]
    fn test_sizes_display() {
        assert_eq!(shirt().sizes_display(), "S, M, L");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(shirt()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "T-Shirt");
        assert!(json["price"].is_number());
        assert_eq!(json["sizes"][0], "S");
        assert_eq!(json["stock"]["M"], 4);
    }
}
