//! Sakura Admin library.
//!
//! Admin workflows over the store engine, taken as injected `&mut`
//! references so they operate on the same in-memory state the customer
//! workflows see:
//!
//! - [`products`] - add, edit, and delete catalog products
//! - [`users`] - create accounts and list the user store
//! - [`insights`] - catalog totals and low-stock monitoring

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod insights;
pub mod products;
pub mod users;

pub use error::AdminError;
pub use insights::{CatalogInsights, LOW_STOCK_THRESHOLD, StockLevel, catalog_insights, monitor_stock};
pub use products::{NewProduct, ProductPatch, add_product, delete_product, edit_product};
pub use users::{UserSummary, add_user, list_users};
