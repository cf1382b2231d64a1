//! Checkout: commit the cart to stock and history.

use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::CatalogStore;
use crate::db::{HistoryRepository, RepositoryError};
use crate::models::{PurchaseItem, PurchaseKind, PurchaseRecord};

/// Errors from committing a checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing staged in the cart.
    #[error("the cart is empty")]
    EmptyCart,

    /// Persisting the catalog or history failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Commit the cart: deduct stock, append one history record, clear the
/// cart, and persist catalog and history.
///
/// Stock is not re-validated here - the availability check happened when
/// each line was staged, and this is a single-session store, so the staged
/// quantities win. Deductions saturate at zero so stock can never go
/// negative even if the catalog shrank in the meantime.
///
/// If persistence fails midway the in-memory and on-disk state may diverge;
/// that limitation is accepted rather than corrected.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if nothing is staged, or
/// [`CheckoutError::Repository`] if a file write fails.
pub fn checkout(
    catalog: &mut CatalogStore,
    cart: &mut Cart,
    history: &HistoryRepository,
) -> Result<PurchaseRecord, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut items = Vec::with_capacity(cart.len());
    for line in cart.lines() {
        if let Some(product) = catalog.get_mut(line.product_id)
            && let Some(quantity) = product.stock.get_mut(&line.size)
        {
            *quantity = quantity.saturating_sub(line.quantity);
        } else {
            // The product or size vanished after staging (admin delete);
            // the sale is still recorded.
            tracing::warn!(
                product = %line.name,
                size = %line.size,
                "cart line no longer matches the catalog; stock not deducted"
            );
        }

        items.push(PurchaseItem {
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            size: line.size.clone(),
        });
    }

    let record = PurchaseRecord::now(PurchaseKind::Purchase, items);

    let mut records = history.load_or_default()?;
    records.push(record.clone());

    cart.clear();

    catalog.save()?;
    history.save(&records)?;

    Ok(record)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::db::CatalogRepository;
    use sakura_core::{ProductId, SizeCode};

    struct Fixture {
        _dir: tempfile::TempDir,
        catalog: CatalogStore,
        cart: Cart,
        history: HistoryRepository,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_data_dir(dir.path());
        Fixture {
            catalog: CatalogStore::open(CatalogRepository::new(&config)).unwrap(),
            cart: Cart::new(),
            history: HistoryRepository::new(&config),
            _dir: dir,
        }
    }

    fn size(s: &str) -> SizeCode {
        SizeCode::parse(s).unwrap()
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut fx = fixture();
        let err = checkout(&mut fx.catalog, &mut fx.cart, &fx.history).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_deducts_stock_and_clears_cart() {
        let mut fx = fixture();
        fx.cart
            .add(&fx.catalog, ProductId::new(1), size("M"), 4)
            .unwrap();

        let record = checkout(&mut fx.catalog, &mut fx.cart, &fx.history).unwrap();

        let shirt = fx.catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(shirt.available(&size("M")), Some(0));
        assert_eq!(shirt.available(&size("S")), Some(3));
        assert_eq!(shirt.available(&size("L")), Some(3));

        assert!(fx.cart.is_empty());
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].name, "T-Shirt");
        assert_eq!(record.items[0].quantity, 4);
        assert_eq!(record.items[0].size, size("M"));
    }

    #[test]
    fn test_checkout_persists_catalog_and_history() {
        let mut fx = fixture();
        fx.cart
            .add(&fx.catalog, ProductId::new(2), size("XL"), 1)
            .unwrap();
        checkout(&mut fx.catalog, &mut fx.cart, &fx.history).unwrap();

        let config = StoreConfig::with_data_dir(fx._dir.path());
        let reopened = CatalogStore::open(CatalogRepository::new(&config)).unwrap();
        assert_eq!(
            reopened.get(ProductId::new(2)).unwrap().available(&size("XL")),
            Some(0)
        );

        let records = fx.history.load_or_default().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, PurchaseKind::Purchase);
    }

    #[test]
    fn test_checkout_aggregates_all_lines_into_one_record() {
        let mut fx = fixture();
        fx.cart
            .add(&fx.catalog, ProductId::new(1), size("S"), 1)
            .unwrap();
        fx.cart
            .add(&fx.catalog, ProductId::new(3), size("L"), 2)
            .unwrap();

        checkout(&mut fx.catalog, &mut fx.cart, &fx.history).unwrap();

        let records = fx.history.load_or_default().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].items.len(), 2);
    }

    #[test]
    fn test_deduction_saturates_when_stock_shrank() {
        let mut fx = fixture();
        fx.cart
            .add(&fx.catalog, ProductId::new(3), size("L"), 2)
            .unwrap();

        // Stock drops below the staged quantity after the line was added.
        *fx.catalog
            .get_mut(ProductId::new(3))
            .unwrap()
            .stock
            .get_mut(&size("L"))
            .unwrap() = 1;

        checkout(&mut fx.catalog, &mut fx.cart, &fx.history).unwrap();
        assert_eq!(
            fx.catalog.get(ProductId::new(3)).unwrap().available(&size("L")),
            Some(0)
        );
    }
}
