//! Cart view and checkout.

use std::io;

use crossterm::style::Stylize;

use sakura_store::Store;
use sakura_store::checkout::CheckoutError;

use crate::ui;

/// The cart page: list staged lines and offer checkout.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn view(store: &mut Store) -> io::Result<()> {
    ui::heading("Your Cart");

    if store.cart.is_empty() {
        ui::error("Your Cart is empty. Add some items first!");
        return Ok(());
    }

    println!("{}", "Items in your cart:".to_owned().bold());
    for line in store.cart.lines() {
        println!(
            "{} (Size {}) x {} = {}",
            line.name,
            line.size,
            line.quantity,
            ui::money(line.subtotal())
        );
    }
    println!(
        "\n{}",
        format!("Your Total Amount : {}", ui::money(store.cart.total())).green()
    );

    match ui::confirm("\nProceed to checkout? (y/n): ")? {
        Some(true) => checkout(store),
        Some(false) => ui::notice("Checkout Cancelled..."),
        None => ui::error("Invalid input. Please enter 'y' or 'n'."),
    }
    Ok(())
}

/// Commit the cart and report the outcome.
pub fn checkout(store: &mut Store) {
    ui::heading("Checkout");

    match store.checkout() {
        Ok(_) => ui::success("Your Order Successful! Thank you for your purchase."),
        Err(CheckoutError::EmptyCart) => {
            ui::error("Your Cart is empty. Add some items first!");
        }
        Err(err) => {
            tracing::error!(error = %err, "checkout failed to persist");
            ui::error("Could not save your order. Please try again.");
        }
    }
}
