//! Returns: put purchased items back into stock.

use thiserror::Error;

use sakura_core::{Price, SizeCode};

use crate::catalog::CatalogStore;
use crate::db::{HistoryRepository, RepositoryError};
use crate::models::{PurchaseItem, PurchaseKind, PurchaseRecord};

/// Errors from the return workflow.
#[derive(Debug, Error)]
pub enum ReturnError {
    /// The flat item index is out of range.
    #[error("invalid selection {index}; there are {count} returnable items")]
    InvalidSelection {
        /// The chosen index.
        index: usize,
        /// How many items were listed.
        count: usize,
    },

    /// Asked to return more units than were purchased.
    #[error("cannot return {requested} of {purchased} purchased")]
    InvalidQuantity {
        /// Units requested.
        requested: u32,
        /// Units on the purchase record.
        purchased: u32,
    },

    /// The recorded product name no longer exists in the catalog.
    #[error("returned item `{0}` not found in catalog")]
    ProductNotFound(String),

    /// The recorded size is no longer stocked by the product.
    #[error("size {size} is not stocked for `{name}`")]
    SizeUnavailable {
        /// Product name.
        name: String,
        /// The recorded size.
        size: SizeCode,
    },

    /// Persisting the history or catalog failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One returnable item in the flattened, globally-indexed history view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnLine {
    /// Index of the owning record in the history file.
    pub record_index: usize,
    /// Index of the item within its record.
    pub item_index: usize,
    /// Recorded product name.
    pub name: String,
    /// Recorded unit price.
    pub price: Price,
    /// Recorded quantity still on the record.
    pub quantity: u32,
    /// Recorded size.
    pub size: SizeCode,
}

/// What a completed return did.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    /// Returned product name.
    pub name: String,
    /// Units put back into stock.
    pub quantity: u32,
    /// Size restocked.
    pub size: SizeCode,
}

/// Flatten the purchase records of `history` into one globally-indexed item
/// list.
///
/// Only records of kind `purchase` are returnable; the `return` records a
/// successful return appends are excluded so an item cannot be returned
/// twice through them.
#[must_use]
pub fn returnable_items(history: &[PurchaseRecord]) -> Vec<ReturnLine> {
    history
        .iter()
        .enumerate()
        .filter(|(_, record)| record.kind == PurchaseKind::Purchase)
        .flat_map(|(record_index, record)| {
            record
                .items
                .iter()
                .enumerate()
                .map(move |(item_index, item)| ReturnLine {
                    record_index,
                    item_index,
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    size: item.size.clone(),
                })
        })
        .collect()
}

/// Return `quantity` units of the item at `index` in the flattened view.
///
/// On success the product's stock for the recorded size grows by
/// `quantity`; the purchase record shrinks by the same amount (losing the
/// item entirely on a full return, and disappearing once itemless); a
/// `return` record is appended; and both the history file and the catalog
/// are rewritten.
///
/// Returning zero units is accepted and leaves the record's quantities
/// unchanged.
///
/// # Errors
///
/// Returns [`ReturnError::InvalidSelection`], [`ReturnError::InvalidQuantity`],
/// [`ReturnError::ProductNotFound`], [`ReturnError::SizeUnavailable`], or
/// [`ReturnError::Repository`].
pub fn return_item(
    catalog: &mut CatalogStore,
    history_repo: &HistoryRepository,
    index: usize,
    quantity: u32,
) -> Result<ReturnReceipt, ReturnError> {
    let mut history = history_repo.load_or_default()?;
    let items = returnable_items(&history);

    let line = items.get(index).ok_or(ReturnError::InvalidSelection {
        index,
        count: items.len(),
    })?;

    if quantity > line.quantity {
        return Err(ReturnError::InvalidQuantity {
            requested: quantity,
            purchased: line.quantity,
        });
    }

    // Restock before touching the record; a failed lookup leaves both the
    // catalog and the history untouched.
    let product = catalog
        .find_by_name_mut(&line.name)
        .ok_or_else(|| ReturnError::ProductNotFound(line.name.clone()))?;

    let stock = product
        .stock
        .get_mut(&line.size)
        .ok_or_else(|| ReturnError::SizeUnavailable {
            name: line.name.clone(),
            size: line.size.clone(),
        })?;
    *stock += quantity;

    let receipt = ReturnReceipt {
        name: line.name.clone(),
        quantity,
        size: line.size.clone(),
    };

    shrink_record(&mut history, line, quantity);

    history.push(PurchaseRecord::now(
        PurchaseKind::Return,
        vec![PurchaseItem {
            name: receipt.name.clone(),
            price: line.price,
            quantity,
            size: receipt.size.clone(),
        }],
    ));

    history_repo.save(&history)?;
    catalog.save()?;

    Ok(receipt)
}

/// Remove `quantity` units of the selected line from its purchase record,
/// dropping the item on a full return and the record once it is itemless.
fn shrink_record(history: &mut Vec<PurchaseRecord>, line: &ReturnLine, quantity: u32) {
    let Some(record) = history.get_mut(line.record_index) else {
        return;
    };

    if quantity == line.quantity {
        if line.item_index < record.items.len() {
            record.items.remove(line.item_index);
        }
    } else if let Some(item) = record.items.get_mut(line.item_index) {
        item.quantity -= quantity;
    }

    if record.items.is_empty() {
        history.remove(line.record_index);
    }
}
