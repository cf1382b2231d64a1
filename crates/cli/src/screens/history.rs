//! Purchase history view.

use std::io;

use sakura_store::Store;
use sakura_store::models::purchase::TIMESTAMP_FORMAT;

use crate::ui;

/// The purchase history page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn view(store: &Store) -> io::Result<()> {
    ui::heading("Purchase History");

    let records = match store.purchase_history() {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(error = %err, "could not read purchase history");
            ui::error("Error reading Purchase History.");
            return Ok(());
        }
    };

    if records.is_empty() {
        ui::error("No Purchase History Found.");
        return Ok(());
    }

    for record in records {
        println!(
            "{} - Date: {}",
            record.kind.label(),
            record.timestamp.format(TIMESTAMP_FORMAT)
        );
        for item in &record.items {
            println!(
                " - {} x {} @ {} (Size {})",
                item.name,
                item.quantity,
                ui::money(item.price),
                item.size
            );
        }
        println!();
    }

    Ok(())
}
