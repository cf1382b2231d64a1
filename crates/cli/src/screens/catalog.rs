//! Catalog browsing: table view, search, filters, and add-to-cart.

use std::io;

use crossterm::style::Stylize;
use rust_decimal::Decimal;

use sakura_core::{ProductId, SizeCode};
use sakura_store::Store;
use sakura_store::cart::CartError;
use sakura_store::models::Product;

use crate::screens::cart;
use crate::ui;

/// The catalog page with its search/filter/add submenu.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn view(store: &mut Store) -> io::Result<()> {
    loop {
        ui::heading("Catalog");
        render_table(store.catalog.products());

        println!("\t1. Search Product");
        println!("\t2. Filter Products");
        println!("\t3. Add to Cart");
        println!("\t4. Back to Menu");

        match ui::prompt_choice()?.as_str() {
            "1" => search(store)?,
            "2" => filter(store)?,
            "3" => {
                add_to_cart(store)?;
                match ui::confirm("\nProceed to checkout now? (y/n): ")? {
                    Some(true) => {
                        cart::checkout(store);
                        return Ok(());
                    }
                    Some(false) => ui::notice("Checkout cancelled. Returning to Catalog menu..."),
                    None => ui::error("Invalid input. Returning to Catalog menu..."),
                }
            }
            "4" => return Ok(()),
            _ => ui::error("Invalid Choice. Please try again..."),
        }
    }
}

fn render_table(products: &[Product]) {
    println!(
        "{}",
        format!(
            "{:<5} {:<12} {:<12} {:<15} {:<6}",
            "ID",
            "Name",
            format!("Price ({})", ui::CURRENCY),
            "Sizes",
            "Stock"
        )
        .bold()
    );
    println!("{}", "-".repeat(54));

    for product in products {
        println!(
            "{:<5} {:<12} {:<12} {:<15} {:<6}",
            product.id,
            product.name,
            ui::money(product.price),
            product.sizes_display(),
            product.total_stock()
        );
    }

    println!("{}", "-".repeat(54));
    println!();
}

fn render_line(product: &Product) {
    println!(
        "{}: {} - {} | Sizes: {} | Stock: {}",
        product.id,
        product.name,
        ui::money(product.price),
        product.sizes_display(),
        product.total_stock()
    );
}

fn render_results(products: &[Product], empty_message: &str) {
    if products.is_empty() {
        ui::error(empty_message);
        return;
    }
    println!();
    for product in products {
        render_line(product);
    }
}

fn search(store: &Store) -> io::Result<()> {
    ui::heading("Search Product");
    let keyword = ui::prompt("Enter keyword: ")?;

    let hits: Vec<Product> = store.catalog.search(&keyword).into_iter().cloned().collect();
    render_results(&hits, "No Matching Products Found...");
    Ok(())
}

fn filter(store: &Store) -> io::Result<()> {
    loop {
        ui::heading("Filter Products");
        println!("\t1. Filter by Size");
        println!("\t2. Filter by Price");
        println!("\t3. Back to Menu");

        match ui::prompt_choice()?.as_str() {
            "1" => filter_by_size(store)?,
            "2" => filter_by_price(store)?,
            "3" => return Ok(()),
            _ => ui::error("Invalid Choice. Please try again..."),
        }
    }
}

fn filter_by_size(store: &Store) -> io::Result<()> {
    ui::heading("Filter Products by Size");

    let input = ui::prompt("Enter the size to filter by: ")?;
    let size = match SizeCode::parse(&input) {
        Ok(size) => size,
        Err(err) => {
            ui::error(&err.to_string());
            return Ok(());
        }
    };

    let hits: Vec<Product> = store
        .catalog
        .filter_by_size(&size)
        .into_iter()
        .cloned()
        .collect();
    render_results(&hits, "No products found for given size...");
    Ok(())
}

fn filter_by_price(store: &Store) -> io::Result<()> {
    ui::heading("Filter Products by Price");

    let Some(min) = ui::prompt_parse::<Decimal>("Enter the minimum price: ")? else {
        return Ok(());
    };
    let Some(max) = ui::prompt_parse::<Decimal>("Enter the maximum price: ")? else {
        return Ok(());
    };

    let hits: Vec<Product> = store
        .catalog
        .filter_by_price(min, max)
        .into_iter()
        .cloned()
        .collect();
    render_results(&hits, "No products found for given price...");
    Ok(())
}

fn add_to_cart(store: &mut Store) -> io::Result<()> {
    ui::heading("Add to Cart");

    let Some(id) = ui::prompt_parse::<i32>("Enter ID of the item you want to add: ")? else {
        return Ok(());
    };
    let id = ProductId::new(id);

    let Some(product) = store.catalog.get(id) else {
        ui::error("No product found for given ID...");
        return Ok(());
    };
    println!("Available Sizes: {}", product.sizes_display());

    let size_input = ui::prompt("Enter Size: ")?;
    let size = match SizeCode::parse(&size_input) {
        Ok(size) => size,
        Err(err) => {
            ui::error(&err.to_string());
            return Ok(());
        }
    };

    let Some(quantity) = ui::prompt_parse::<u32>("Enter quantity: ")? else {
        return Ok(());
    };

    match store.cart.add(&store.catalog, id, size, quantity) {
        Ok(line) => ui::success(&format!(
            "Successfully added {} x {} (Size {}) to cart.",
            line.quantity, line.name, line.size
        )),
        Err(err @ CartError::InsufficientStock { .. }) => {
            ui::error(&format!("Sorry! {err}."));
        }
        Err(err) => ui::error(&err.to_string()),
    }
    Ok(())
}
