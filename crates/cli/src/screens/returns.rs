//! Return items from past purchases.

use std::io;

use crossterm::style::Stylize;

use sakura_store::Store;
use sakura_store::returns::ReturnError;

use crate::ui;

/// The returns page: list returnable items, pick one, pick a quantity.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn view(store: &mut Store) -> io::Result<()> {
    ui::heading("Return Items");

    let items = match store.returnable_items() {
        Ok(items) => items,
        Err(err) => {
            tracing::error!(error = %err, "could not read purchase history");
            ui::error("Error reading Purchase History.");
            return Ok(());
        }
    };

    if items.is_empty() {
        ui::error("No Purchases to Return.");
        return Ok(());
    }

    println!("{}\n", "Your Purchase History:".to_owned().bold());
    for (index, item) in items.iter().enumerate() {
        println!(
            " [{index}] {} x {} @ {} (Size {})",
            item.name,
            item.quantity,
            ui::money(item.price),
            item.size
        );
    }
    println!();

    let Some(index) = ui::prompt_parse::<usize>("Which item do you want to return: ")? else {
        return Ok(());
    };

    let Some(quantity) = ui::prompt_parse::<u32>("How many items do you want to return: ")? else {
        return Ok(());
    };

    match store.return_item(index, quantity) {
        Ok(receipt) => ui::success(&format!(
            "Successfully Returned {} x {} (Size {}).",
            receipt.quantity, receipt.name, receipt.size
        )),
        Err(ReturnError::InvalidSelection { .. }) => {
            ui::error("Invalid Selection. Please choose a valid item number.");
        }
        Err(err @ ReturnError::InvalidQuantity { .. }) => ui::error(&format!("{err}.")),
        Err(ReturnError::ProductNotFound(_)) => {
            ui::error("Returned item not found in catalog.");
        }
        Err(err @ ReturnError::SizeUnavailable { .. }) => ui::error(&format!("{err}.")),
        Err(err) => {
            tracing::error!(error = %err, "return failed to persist");
            ui::error("Could not save the return. Please try again.");
        }
    }

    Ok(())
}
