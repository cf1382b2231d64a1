//! Sakura Core - Shared types library.
//!
//! This crate provides common types used across all Sakura store components:
//! - `store` - Catalog, cart, checkout, returns, and persistence
//! - `admin` - Catalog administration and inventory reporting
//! - `cli` - Interactive terminal front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no terminal
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, sizes, roles,
//!   and usernames

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
