//! The role-gated menu shell.
//!
//! Each menu level is an explicit loop; bad input reports inline and the
//! loop re-prompts, so the session never crashes on operator error and
//! never recurses to re-enter a menu.

use std::io;

use sakura_store::Store;
use sakura_store::auth::Session;

use crate::screens;
use crate::ui;

/// The interactive session driver.
pub struct Shell {
    store: Store,
}

impl Shell {
    /// Wrap an opened store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Run the main menu until the operator exits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal streams fail.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            ui::banner("Welcome to the Sakura Clothing Store");
            println!("\nPlease select from the following options:");
            println!("\t1. Login");
            println!("\t2. Register");
            println!("\t3. Exit");

            match ui::prompt_choice()?.as_str() {
                "1" => self.login()?,
                "2" => self.register()?,
                "3" => {
                    ui::notice("Exiting from the System...");
                    return Ok(());
                }
                _ => ui::error("Sorry, invalid option. Please try again."),
            }
        }
    }

    fn login(&mut self) -> io::Result<()> {
        ui::heading("Login");
        let username = ui::prompt("Please enter your Username: ")?;
        let password = ui::prompt("Please enter your Password: ")?;

        match self.store.auth.login(&username, &password) {
            Ok(session) => {
                ui::success(&format!(
                    "Welcome {}! You are now logged in.",
                    session.username
                ));
                self.session_menu(&session)
            }
            Err(_) => {
                ui::error("Invalid Username or Password. Please try again!");
                Ok(())
            }
        }
    }

    fn register(&mut self) -> io::Result<()> {
        ui::heading("Register");
        let username = ui::prompt("Enter Username: ")?;
        let password = ui::prompt("Enter Password: ")?;

        match self.store.auth.register(&username, &password) {
            Ok(()) => {
                ui::success(&format!("User \"{username}\" registered successfully."));
                // Registration drops straight into the login page.
                self.login()
            }
            Err(sakura_store::auth::AuthError::UsernameTaken) => {
                ui::error("Username Already Exists.");
                Ok(())
            }
            Err(err) => {
                ui::error(&err.to_string());
                Ok(())
            }
        }
    }

    fn session_menu(&mut self, session: &Session) -> io::Result<()> {
        if session.role.is_admin() {
            self.admin_menu()
        } else {
            self.user_menu()
        }
    }

    fn user_menu(&mut self) -> io::Result<()> {
        loop {
            ui::heading("User Menu");
            println!("\t1. View Catalog");
            println!("\t2. Purchase History");
            println!("\t3. View Cart");
            println!("\t4. Return Item");
            println!("\t5. Logout");

            match ui::prompt_choice()?.as_str() {
                "1" => screens::catalog::view(&mut self.store)?,
                "2" => screens::history::view(&self.store)?,
                "3" => screens::cart::view(&mut self.store)?,
                "4" => screens::returns::view(&mut self.store)?,
                "5" => {
                    ui::notice("Logging out...\nReturning to Main Menu...");
                    return Ok(());
                }
                _ => ui::error("Sorry, invalid option. Please try again."),
            }
        }
    }

    fn admin_menu(&mut self) -> io::Result<()> {
        loop {
            ui::heading("Admin Menu");
            println!("\t1. Add Users");
            println!("\t2. View User Details");
            println!("\t3. Add Product");
            println!("\t4. Edit Product");
            println!("\t5. Delete Product");
            println!("\t6. View Catalog");
            println!("\t7. View Catalog Insights");
            println!("\t8. Monitor Stock");
            println!("\t9. Logout");

            match ui::prompt_choice()?.as_str() {
                "1" => screens::admin::add_user(&mut self.store)?,
                "2" => screens::admin::view_users(&self.store)?,
                "3" => screens::admin::add_product(&mut self.store)?,
                "4" => screens::admin::edit_product(&mut self.store)?,
                "5" => screens::admin::delete_product(&mut self.store)?,
                "6" => screens::catalog::view(&mut self.store)?,
                "7" => screens::admin::insights(&self.store)?,
                "8" => screens::admin::monitor_stock(&self.store)?,
                "9" => {
                    ui::notice("Logging out...\nReturning to Main Menu...");
                    return Ok(());
                }
                _ => ui::error("Sorry, invalid option. Please try again."),
            }
        }
    }
}
