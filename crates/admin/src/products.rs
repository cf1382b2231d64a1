//! Product CRUD for the admin menu.

use sakura_core::{Price, ProductId, SizeCode};
use sakura_store::catalog::CatalogStore;
use sakura_store::models::Product;

use crate::error::AdminError;

/// Input for a new catalog product.
///
/// `quantities` keeps the operator's entry order, which becomes the
/// product's size display order.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Per-size initial stock, in entry order.
    pub quantities: Vec<(SizeCode, u32)>,
}

/// A partial product update; `None` fields keep their current value.
///
/// Re-entering sizes replaces the whole per-size stock map: sizes not
/// re-specified lose their stock counts.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// New display name.
    pub name: Option<String>,
    /// New unit price.
    pub price: Option<Price>,
    /// Replacement per-size stock, in entry order.
    pub quantities: Option<Vec<(SizeCode, u32)>>,
}

/// Add a product to the catalog and persist it.
///
/// The new id comes from the store's monotonic counter, so it is one
/// greater than the highest id ever allocated - even right after the last
/// product was deleted.
///
/// # Errors
///
/// Returns [`AdminError::DuplicateName`] if a product with the same name
/// (ignoring case) exists, or [`AdminError::Repository`] if the catalog
/// cannot be written.
pub fn add_product(catalog: &mut CatalogStore, new: NewProduct) -> Result<ProductId, AdminError> {
    if catalog.find_by_name(&new.name).is_some() {
        return Err(AdminError::DuplicateName(new.name));
    }

    let id = catalog.allocate_id();
    catalog.push(Product::from_size_quantities(
        id,
        new.name,
        new.price,
        new.quantities,
    ));
    catalog.save()?;

    Ok(id)
}

/// Apply a partial update to a product and persist the catalog.
///
/// # Errors
///
/// Returns [`AdminError::ProductNotFound`] if the id is unknown, or
/// [`AdminError::Repository`] if the catalog cannot be written.
pub fn edit_product(
    catalog: &mut CatalogStore,
    id: ProductId,
    patch: ProductPatch,
) -> Result<(), AdminError> {
    let product = catalog.get_mut(id).ok_or(AdminError::ProductNotFound(id))?;

    if let Some(name) = patch.name {
        product.name = name;
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    if let Some(quantities) = patch.quantities {
        // Wholesale replacement: stock for sizes the operator did not
        // re-enter is discarded.
        let replacement = Product::from_size_quantities(
            product.id,
            product.name.clone(),
            product.price,
            quantities,
        );
        product.sizes = replacement.sizes;
        product.stock = replacement.stock;
    }

    catalog.save()?;
    Ok(())
}

/// Delete a product by id and persist the catalog, returning the removed
/// record. The confirmation prompt is the caller's job.
///
/// # Errors
///
/// Returns [`AdminError::ProductNotFound`] if the id is unknown, or
/// [`AdminError::Repository`] if the catalog cannot be written.
pub fn delete_product(catalog: &mut CatalogStore, id: ProductId) -> Result<Product, AdminError> {
    let removed = catalog.remove(id).ok_or(AdminError::ProductNotFound(id))?;
    catalog.save()?;
    Ok(removed)
}
