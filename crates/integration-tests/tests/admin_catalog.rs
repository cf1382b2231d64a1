//! Admin catalog management: CRUD, insights, and stock monitoring.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use sakura_admin::{
    AdminError, NewProduct, ProductPatch, add_product, catalog_insights, delete_product,
    edit_product, monitor_stock,
};
use sakura_integration_tests::{TestStore, id, price, size};

fn hoodie() -> NewProduct {
    NewProduct {
        name: "Hoodie".to_owned(),
        price: price(5_200_00),
        quantities: vec![(size("S"), 2), (size("M"), 6)],
    }
}

// ============================================================================
// Add
// ============================================================================

#[test]
fn test_add_product_then_lookup_is_identical() {
    let mut ts = TestStore::open();

    let new_id = add_product(&mut ts.store.catalog, hoodie()).unwrap();
    assert_eq!(new_id, id(4)); // one greater than the previous max

    let product = ts.store.catalog.get(new_id).unwrap().clone();
    assert_eq!(product.name, "Hoodie");
    assert_eq!(product.price, price(5_200_00));
    assert_eq!(product.sizes, vec![size("S"), size("M")]);
    assert_eq!(product.available(&size("S")), Some(2));
    assert_eq!(product.available(&size("M")), Some(6));

    // Identical after a reload from disk too.
    let ts = ts.reopen();
    assert_eq!(*ts.store.catalog.get(new_id).unwrap(), product);
}

#[test]
fn test_add_product_rejects_duplicate_name_case_insensitively() {
    let mut ts = TestStore::open();

    let mut dup = hoodie();
    dup.name = "JEANS".to_owned();
    let err = add_product(&mut ts.store.catalog, dup).unwrap_err();
    assert!(matches!(err, AdminError::DuplicateName(_)));
    assert_eq!(ts.store.catalog.products().len(), 3);
}

#[test]
fn test_ids_stay_monotonic_after_catalog_is_emptied() {
    let mut ts = TestStore::open();

    for i in [1, 2, 3] {
        delete_product(&mut ts.store.catalog, id(i)).unwrap();
    }
    assert!(ts.store.catalog.is_empty());

    // max()+1 over the now-empty list would assign 1 again; the counter
    // keeps counting instead.
    let new_id = add_product(&mut ts.store.catalog, hoodie()).unwrap();
    assert_eq!(new_id, id(4));
}

// ============================================================================
// Edit
// ============================================================================

#[test]
fn test_edit_keeps_unspecified_fields() {
    let mut ts = TestStore::open();

    edit_product(
        &mut ts.store.catalog,
        id(2),
        ProductPatch {
            name: Some("Denim Jeans".to_owned()),
            ..ProductPatch::default()
        },
    )
    .unwrap();

    let jeans = ts.store.catalog.get(id(2)).unwrap();
    assert_eq!(jeans.name, "Denim Jeans");
    assert_eq!(jeans.price, price(4_890_00));
    assert_eq!(jeans.available(&size("XL")), Some(1));
}

#[test]
fn test_edit_sizes_discards_dropped_size_stock() {
    let mut ts = TestStore::open();

    // Re-enter S and M only; the T-Shirt's L stock disappears entirely.
    edit_product(
        &mut ts.store.catalog,
        id(1),
        ProductPatch {
            quantities: Some(vec![(size("S"), 3), (size("M"), 4)]),
            ..ProductPatch::default()
        },
    )
    .unwrap();

    let ts = ts.reopen();
    let shirt = ts.store.catalog.get(id(1)).unwrap();
    assert!(!shirt.has_size(&size("L")));
    assert_eq!(shirt.sizes, vec![size("S"), size("M")]);

    let file = ts.read_file("catalog.json");
    assert!(file[0]["stock"].get("L").is_none());
}

#[test]
fn test_edit_unknown_id() {
    let mut ts = TestStore::open();
    let err = edit_product(&mut ts.store.catalog, id(41), ProductPatch::default()).unwrap_err();
    assert!(matches!(err, AdminError::ProductNotFound(_)));
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_product_persists() {
    let mut ts = TestStore::open();

    let removed = delete_product(&mut ts.store.catalog, id(1)).unwrap();
    assert_eq!(removed.name, "T-Shirt");

    let ts = ts.reopen();
    assert!(ts.store.catalog.get(id(1)).is_none());
    assert_eq!(ts.store.catalog.products().len(), 2);
}

// ============================================================================
// Insights & monitoring
// ============================================================================

#[test]
fn test_insights_totals_over_seed_catalog() {
    let ts = TestStore::open();
    let insights = catalog_insights(&ts.store.catalog);

    assert_eq!(insights.total_products, 3);
    assert_eq!(insights.total_stock_units, 18);
    assert_eq!(insights.total_inventory_value, Decimal::new(72_250_00, 2));
}

#[test]
fn test_insights_shrink_after_checkout() {
    let mut ts = TestStore::open();
    ts.store
        .cart
        .add(&ts.store.catalog, id(1), size("M"), 4)
        .unwrap();
    ts.store.checkout().unwrap();

    let insights = catalog_insights(&ts.store.catalog);
    assert_eq!(insights.total_stock_units, 14);
    assert_eq!(
        insights.total_inventory_value,
        Decimal::new(72_250_00 - 4 * 2_500_00, 2)
    );
}

#[test]
fn test_monitor_stock_flags_threshold() {
    let ts = TestStore::open();
    let levels = monitor_stock(&ts.store.catalog);

    let jacket = levels.iter().find(|l| l.name == "Jacket").unwrap();
    assert_eq!(jacket.total_stock, 3);
    assert!(jacket.low); // at the threshold counts as low

    let shirt = levels.iter().find(|l| l.name == "T-Shirt").unwrap();
    assert!(!shirt.low);
}
