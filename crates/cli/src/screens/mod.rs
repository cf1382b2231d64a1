//! Interactive screens dispatched from the menu shell.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod history;
pub mod returns;
