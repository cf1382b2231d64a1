//! Admin pages: user management, product CRUD, insights, stock monitor.

use std::io;

use crossterm::style::Stylize;
use rust_decimal::Decimal;

use sakura_admin::{self as admin, AdminError, NewProduct, ProductPatch};
use sakura_core::{Price, ProductId, Role, SizeCode, Username};
use sakura_store::Store;
use sakura_store::auth::AuthError;
use sakura_store::models::purchase::TIMESTAMP_FORMAT;

use crate::ui;

/// The add-users page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn add_user(store: &mut Store) -> io::Result<()> {
    ui::heading("Add New Users");

    let username = match Username::parse(&ui::prompt("Enter Username: ")?) {
        Ok(username) => username,
        Err(err) => {
            ui::error(&err.to_string());
            return Ok(());
        }
    };

    let password = ui::prompt("Enter Password: ")?;

    println!("\n{}", "Please Select the User Role:".to_owned().bold());
    println!("\t1. Admin");
    println!("\t2. User");
    let role = match ui::prompt("\nEnter Role Number: ")?.as_str() {
        "1" => Role::Admin,
        "2" => Role::User,
        _ => {
            ui::error("Invalid Role Selected. Only 'admin' or 'user' Allowed.");
            return Ok(());
        }
    };

    match admin::add_user(&mut store.auth, username.clone(), &password, role) {
        Ok(()) => ui::success(&format!(
            "User {username} with \"{role}\" role has been added successfully!"
        )),
        Err(AuthError::UsernameTaken) => ui::error("Username already exists!"),
        Err(err) => {
            tracing::error!(error = %err, "could not save user");
            ui::error("Could not save the new user. Please try again.");
        }
    }
    Ok(())
}

/// The registered-users page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn view_users(store: &Store) -> io::Result<()> {
    ui::heading("Registered Users");

    let users = admin::list_users(&store.auth);
    if users.is_empty() {
        ui::error("No Users Found!");
        return Ok(());
    }

    for user in users {
        let registered = user.registered_date.map_or_else(
            || "-".to_owned(),
            |date| date.format(TIMESTAMP_FORMAT).to_string(),
        );
        println!(
            "Username: {}  |  Role: {}  |  Registered Date: {}",
            user.username, user.role, registered
        );
    }
    Ok(())
}

/// Prompt for a per-size quantity list from a comma-separated size entry.
fn prompt_size_quantities(sizes_input: &str) -> io::Result<Option<Vec<(SizeCode, u32)>>> {
    let mut quantities = Vec::new();

    for raw in sizes_input.split(',') {
        let size = match SizeCode::parse(raw) {
            Ok(size) => size,
            Err(err) => {
                ui::error(&err.to_string());
                return Ok(None);
            }
        };

        let Some(quantity) =
            ui::prompt_parse::<u32>(&format!("Enter Product Quantity for size {size}: "))?
        else {
            return Ok(None);
        };

        quantities.push((size, quantity));
    }

    Ok(Some(quantities))
}

/// The add-product page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn add_product(store: &mut Store) -> io::Result<()> {
    ui::heading("Add New Products");

    let name = ui::prompt("Enter Product Name: ")?;
    if name.is_empty() {
        ui::error("Product name cannot be empty.");
        return Ok(());
    }

    let Some(price) = ui::prompt_parse::<Decimal>("Enter Product Price: ")? else {
        return Ok(());
    };

    let sizes_input = ui::prompt("Enter Product Sizes (comma-separated): ")?;
    let Some(quantities) = prompt_size_quantities(&sizes_input)? else {
        return Ok(());
    };

    let new = NewProduct {
        name,
        price: Price::new(price),
        quantities,
    };

    match admin::add_product(&mut store.catalog, new) {
        Ok(id) => ui::success(&format!("Product Added Successfully with ID {id}.")),
        Err(err @ AdminError::DuplicateName(_)) => ui::error(&format!("{err}.")),
        Err(err) => {
            tracing::error!(error = %err, "could not save product");
            ui::error("Could not save the new product. Please try again.");
        }
    }
    Ok(())
}

/// The edit-product page. Blank input keeps the current value; entering
/// sizes re-prompts every quantity and discards sizes left out.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn edit_product(store: &mut Store) -> io::Result<()> {
    ui::heading("Edit Products");

    let Some(id) = ui::prompt_parse::<i32>("Enter Product ID: ")? else {
        return Ok(());
    };
    let id = ProductId::new(id);

    let Some(product) = store.catalog.get(id) else {
        ui::error("Product not found.");
        return Ok(());
    };
    println!("{}\n", format!("Editing {}...", product.name).green());

    let name = ui::prompt(&format!("Name ({}): ", product.name))?;
    let price_input = ui::prompt(&format!("Price ({}): ", product.price))?;
    let sizes_input = ui::prompt(&format!("Sizes ({}, blank to keep): ", product.sizes_display()))?;

    let mut patch = ProductPatch::default();

    if !name.is_empty() {
        patch.name = Some(name);
    }

    if !price_input.is_empty() {
        match price_input.parse::<Decimal>() {
            Ok(price) => patch.price = Some(Price::new(price)),
            Err(_) => {
                ui::error("Invalid number entered.");
                return Ok(());
            }
        }
    }

    if !sizes_input.is_empty() {
        let Some(quantities) = prompt_size_quantities(&sizes_input)? else {
            return Ok(());
        };
        patch.quantities = Some(quantities);
    }

    match admin::edit_product(&mut store.catalog, id, patch) {
        Ok(()) => ui::success("Product Updated Successfully."),
        Err(AdminError::ProductNotFound(_)) => ui::error("Product not found."),
        Err(err) => {
            tracing::error!(error = %err, "could not save product edit");
            ui::error("Could not save the product. Please try again.");
        }
    }
    Ok(())
}

/// The delete-product page, with its confirmation prompt.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn delete_product(store: &mut Store) -> io::Result<()> {
    ui::heading("Delete Products");

    let Some(id) = ui::prompt_parse::<i32>("Enter Product ID: ")? else {
        return Ok(());
    };
    let id = ProductId::new(id);

    let Some(product) = store.catalog.get(id) else {
        ui::error("Product not found.");
        return Ok(());
    };

    let question = format!("\nAre you sure you want to delete \"{}\"? (y/n): ", product.name);
    if ui::confirm(&question)? == Some(true) {
        match admin::delete_product(&mut store.catalog, id) {
            Ok(removed) => ui::success(&format!("\"{}\" Deleted Successfully.", removed.name)),
            Err(AdminError::ProductNotFound(_)) => ui::error("Product not found."),
            Err(err) => {
                tracing::error!(error = %err, "could not save product delete");
                ui::error("Could not save the catalog. Please try again.");
            }
        }
    } else {
        ui::error("Product delete Cancelled.");
    }
    Ok(())
}

/// The catalog insights page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn insights(store: &Store) -> io::Result<()> {
    ui::heading("Catalog Insights");

    let insights = admin::catalog_insights(&store.catalog);
    println!("{}", format!("Total Products:  {}", insights.total_products).bold());
    println!(
        "{}",
        format!("Total Stock Units: {}", insights.total_stock_units).bold()
    );
    println!(
        "{}",
        format!(
            "Total Inventory Value: {}",
            ui::money(Price::new(insights.total_inventory_value))
        )
        .bold()
    );
    Ok(())
}

/// The stock monitor page.
///
/// # Errors
///
/// Returns an error only if the terminal streams fail.
pub fn monitor_stock(store: &Store) -> io::Result<()> {
    ui::heading("Monitor Stock");

    for level in admin::monitor_stock(&store.catalog) {
        let status = if level.low {
            "Low Stock!!!".to_owned().red()
        } else {
            "Enough Stock Available".to_owned().green()
        };
        println!("{} | Stock {} -> {}", level.name, level.total_stock, status);
    }
    Ok(())
}
