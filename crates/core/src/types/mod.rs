//! Core types for the Sakura store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;
pub mod size;
pub mod username;

pub use id::*;
pub use price::Price;
pub use role::{Role, RoleError};
pub use size::{SizeCode, SizeCodeError};
pub use username::{Username, UsernameError};
