//! Admin workflow error types.

use thiserror::Error;

use sakura_core::ProductId;
use sakura_store::db::RepositoryError;

/// Errors from the catalog administration workflows.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A product with the same name (ignoring case) already exists.
    #[error("a product named `{0}` already exists")]
    DuplicateName(String),

    /// No product with the given id.
    #[error("no product found for id {0}")]
    ProductNotFound(ProductId),

    /// Persisting the catalog failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
