//! The session cart.

use std::collections::BTreeMap;

use thiserror::Error;

use sakura_core::{Price, ProductId, SizeCode};

use crate::catalog::CatalogStore;

/// Errors from staging an item into the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// No product with the given id.
    #[error("no product found for id {0}")]
    ProductNotFound(ProductId),

    /// The product exists but is not stocked in the requested size.
    #[error("size {size} is not available for {name}")]
    SizeUnavailable {
        /// Product name, for the operator message.
        name: String,
        /// The requested size.
        size: SizeCode,
    },

    /// Requested more units than the size currently has in stock.
    #[error("requested {requested} but only {available} in stock")]
    InsufficientStock {
        /// Units requested.
        requested: u32,
        /// Units currently available.
        available: u32,
    },

    /// A zero-quantity line would be meaningless.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// One staged line: a product/size pair with a snapshot of the product's
/// name and price taken when the line was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The staged product.
    pub product_id: ProductId,
    /// The staged size.
    pub size: SizeCode,
    /// Units to buy.
    pub quantity: u32,
    /// Product name when added.
    pub name: String,
    /// Unit price when added.
    pub price: Price,
}

impl CartLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The per-session staging area for a purchase.
///
/// Lines are keyed by `(product, size)`; adding the same pair again
/// replaces the existing line rather than accumulating quantity. The cart
/// lives only as long as the process and is cleared wholesale on checkout.
#[derive(Debug, Default)]
pub struct Cart {
    lines: BTreeMap<(ProductId, SizeCode), CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `quantity` units of a product/size, validating against the
    /// catalog's current stock. Returns the staged line.
    ///
    /// Boundary: requesting exactly the available quantity succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`], [`CartError::SizeUnavailable`],
    /// [`CartError::InsufficientStock`], or [`CartError::InvalidQuantity`].
    pub fn add(
        &mut self,
        catalog: &CatalogStore,
        product_id: ProductId,
        size: SizeCode,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let product = catalog
            .get(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let available = product
            .available(&size)
            .ok_or_else(|| CartError::SizeUnavailable {
                name: product.name.clone(),
                size: size.clone(),
            })?;

        if quantity > available {
            return Err(CartError::InsufficientStock {
                requested: quantity,
                available,
            });
        }

        let line = CartLine {
            product_id,
            size: size.clone(),
            quantity,
            name: product.name.clone(),
            price: product.price,
        };

        self.lines.insert((product_id, size), line.clone());
        Ok(line)
    }

    /// The staged lines, in `(product, size)` order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of staged lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Drop every staged line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
