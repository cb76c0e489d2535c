//! Enhanced inventory shell: JSON-backed store with categories, expiration
//! tracking, and reporting.

use chrono::{Local, NaiveDate, Utc};

use bakestock_cli::prompt::{menu_choice, prompt};
use bakestock_cli::view;
use bakestock_infra::{DEFAULT_SNAPSHOT_PATH, JsonFileStore, SnapshotStore};
use bakestock_inventory::{Inventory, normalize_name};

/// Default window for the expiring-ingredients check.
const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 7;

fn main() {
    bakestock_observability::init();

    let store = JsonFileStore::new(DEFAULT_SNAPSHOT_PATH);
    let mut inventory = store.load();

    println!("{}", "=".repeat(70));
    println!("WELCOME TO THE SWEET SURRENDER BAKERY INVENTORY SYSTEM");
    println!("{}", "=".repeat(70));

    loop {
        print_menu();
        let Some(choice) = menu_choice("Enter your choice (1-9): ", 9) else {
            break;
        };
        let mutated = match choice {
            1 => add_ingredient(&mut inventory),
            2 => {
                view::print_section("CURRENT INVENTORY");
                view::print_inventory(&inventory);
                false
            }
            3 => update_quantity(&mut inventory),
            4 => search(&inventory),
            5 => remove_ingredient(&mut inventory),
            6 => set_expiration(&mut inventory),
            7 => check_expiring(&inventory),
            8 => {
                view::print_section("INVENTORY REPORT");
                view::print_report(&inventory.report(Utc::now()));
                false
            }
            _ => break,
        };
        if mutated {
            if let Err(err) = store.save(&inventory) {
                tracing::warn!(%err, "could not save inventory");
                println!("Warning: could not save inventory data.");
            }
        }
    }

    println!("\nThank you for using the Sweet Surrender Bakery inventory system!");
    println!("Exiting the program. Goodbye!");
}

fn print_menu() {
    println!("\n{}", "=".repeat(60));
    println!("SWEET SURRENDER BAKERY - INVENTORY MENU");
    println!("{}", "=".repeat(60));
    println!("1. Add new ingredient");
    println!("2. View all ingredients");
    println!("3. Update ingredient quantity");
    println!("4. Search ingredient");
    println!("5. Remove ingredient");
    println!("6. Set expiration date");
    println!("7. Check expiring ingredients");
    println!("8. Generate inventory report");
    println!("9. Exit");
    println!("{}", "=".repeat(60));
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn add_ingredient(inventory: &mut Inventory) -> bool {
    view::print_section("ADD NEW INGREDIENT");
    let Some(name) = prompt("Enter ingredient name: ") else {
        return false;
    };
    let Some(quantity) = prompt("Enter quantity with unit (e.g., '5 kg', '2 liters'): ") else {
        return false;
    };
    if quantity.is_empty() {
        println!("Error: Quantity cannot be empty.");
        return false;
    }
    let Some(category) = prompt("Enter category (e.g., 'dry', 'liquid', 'dairy', 'produce'): ")
    else {
        return false;
    };

    match inventory.add(&name, &quantity, &category.to_lowercase(), today()) {
        Ok(()) => {
            println!("Successfully added {} of {}.", quantity, normalize_name(&name));
            true
        }
        Err(err) => {
            println!("Error: {err}.");
            false
        }
    }
}

fn update_quantity(inventory: &mut Inventory) -> bool {
    view::print_section("UPDATE INGREDIENT QUANTITY");
    let Some(name) = prompt("Enter ingredient name: ") else {
        return false;
    };
    let Some(record) = inventory.get(&name) else {
        println!("Error: '{}' not found in inventory.", normalize_name(&name));
        return false;
    };
    println!("Current quantity: {}", record.quantity);

    let Some(amount) = prompt("Enter amount to add (positive) or deduct (negative): ") else {
        return false;
    };
    let Ok(delta) = amount.parse::<f64>() else {
        println!("Error: Invalid amount. Please enter a numeric value.");
        return false;
    };

    match inventory.adjust(&name, delta, today()) {
        Ok(quantity) => {
            println!("Updated {} to {}", normalize_name(&name), quantity);
            true
        }
        Err(err) => {
            println!("Error: {err}.");
            false
        }
    }
}

fn search(inventory: &Inventory) -> bool {
    view::print_section("SEARCH INGREDIENT");
    let Some(term) = prompt("Enter ingredient name to search: ") else {
        return false;
    };
    if term.is_empty() {
        println!("Error: Please enter a search term.");
        return false;
    }
    let term = term.to_lowercase();
    view::print_search_results(&term, &inventory.search(&term));
    false
}

fn remove_ingredient(inventory: &mut Inventory) -> bool {
    view::print_section("REMOVE INGREDIENT");
    let Some(name) = prompt("Enter ingredient name to remove: ") else {
        return false;
    };
    let key = normalize_name(&name);
    if inventory.get(&key).is_none() {
        println!("Error: '{key}' not found in inventory.");
        return false;
    }
    let Some(confirm) = prompt(&format!("Are you sure you want to remove {key}? (yes/no): "))
    else {
        return false;
    };
    if !confirm.eq_ignore_ascii_case("yes") {
        println!("Removal cancelled.");
        return false;
    }

    match inventory.remove(&key) {
        Ok(()) => {
            println!("Removed {key} from inventory.");
            true
        }
        Err(err) => {
            println!("Error: {err}.");
            false
        }
    }
}

fn set_expiration(inventory: &mut Inventory) -> bool {
    view::print_section("SET EXPIRATION DATE");
    let Some(name) = prompt("Enter ingredient name: ") else {
        return false;
    };
    let Some(date_text) = prompt("Enter expiration date (YYYY-MM-DD) or press Enter to remove: ")
    else {
        return false;
    };

    match inventory.set_expiration(&name, &date_text) {
        Ok(()) if date_text.is_empty() => {
            println!("Removed expiration date for {}.", normalize_name(&name));
            true
        }
        Ok(()) => {
            println!(
                "Set expiration date for {} to {}.",
                normalize_name(&name),
                date_text
            );
            true
        }
        Err(err) => {
            println!("Error: {err}.");
            false
        }
    }
}

fn check_expiring(inventory: &Inventory) -> bool {
    view::print_section("EXPIRING INGREDIENTS CHECK");
    let Some(reply) = prompt("Check ingredients expiring within how many days? (default 7): ")
    else {
        return false;
    };
    let days = if reply.is_empty() {
        DEFAULT_EXPIRY_WINDOW_DAYS
    } else {
        match reply.parse::<i64>() {
            Ok(days) if days >= 0 => days,
            _ => {
                println!("Error: Please enter a valid number of days.");
                return false;
            }
        }
    };
    view::print_expiring(&inventory.expiring_within(today(), days), days);
    false
}
