//! Minimal inventory shell: in-memory only, consumption-only quantity
//! updates, state gone when the process exits.

use chrono::{Local, NaiveDate};

use bakestock_cli::prompt::{menu_choice, prompt};
use bakestock_cli::view;
use bakestock_inventory::{Inventory, InventoryError, normalize_name};

fn main() {
    bakestock_observability::init();

    let mut inventory = Inventory::new();

    loop {
        print_menu();
        let Some(choice) = menu_choice("Choose an option (1-6): ", 6) else {
            break;
        };
        match choice {
            1 => add_ingredient(&mut inventory),
            2 => print_all(&inventory),
            3 => consume_ingredient(&mut inventory),
            4 => search(&inventory),
            5 => delete_ingredient(&mut inventory),
            _ => break,
        }
    }

    println!("Exiting program. Goodbye!");
}

fn print_menu() {
    println!("\n--- Sweet Surrender Bakery Inventory Menu ---");
    println!("1. Add New Ingredient");
    println!("2. View All Ingredients");
    println!("3. Update Ingredient Quantity");
    println!("4. Search Ingredient");
    println!("5. Delete Ingredient");
    println!("6. Exit");
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn add_ingredient(inventory: &mut Inventory) {
    let Some(name) = prompt("Enter the ingredient name: ") else {
        return;
    };
    let key = normalize_name(&name);
    if inventory.get(&key).is_some() {
        println!("{} already exists in the inventory.", view::capitalize(&key));
        return;
    }
    let Some(amount) = prompt(&format!("Enter the quantity of {key}: ")) else {
        return;
    };
    if amount.parse::<f64>().is_err() {
        println!("Invalid input. Quantity must be a number.");
        return;
    }
    let Some(unit) = prompt("Enter the unit (e.g., kilos, litres): ") else {
        return;
    };

    match inventory.add(&name, &format!("{} {}", amount, unit.to_lowercase()), "", today()) {
        Ok(()) => println!("{} added successfully.", view::capitalize(&key)),
        Err(err) => println!("Error: {err}."),
    }
}

fn print_all(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("Inventory is currently empty.");
        return;
    }
    println!("\nCurrent Inventory:");
    for (name, record) in inventory.iter() {
        println!("- {}: {}", view::capitalize(name), record.quantity);
    }
    println!();
}

fn consume_ingredient(inventory: &mut Inventory) {
    let Some(name) = prompt("Enter the ingredient to update: ") else {
        return;
    };
    let key = normalize_name(&name);
    if inventory.get(&key).is_none() {
        println!("{} not found in inventory.", view::capitalize(&key));
        return;
    }
    let Some(used) = prompt(&format!("Enter amount of {key} used: ")) else {
        return;
    };
    let Ok(used) = used.parse::<f64>() else {
        println!("Invalid input. Quantity must be a number.");
        return;
    };

    match inventory.consume(&key, used, today()) {
        Ok(quantity) => {
            println!("{} updated. Remaining: {}", view::capitalize(&key), quantity)
        }
        Err(InventoryError::InvalidAmount) => println!("Usage must be a positive number."),
        Err(InventoryError::InsufficientStock { available }) => {
            println!("Not enough {key}. Only {available} available.")
        }
        Err(err) => println!("Error: {err}."),
    }
}

fn search(inventory: &Inventory) {
    let Some(term) = prompt("Enter the ingredient to search for: ") else {
        return;
    };
    if term.is_empty() {
        println!("Error: Please enter a search term.");
        return;
    }
    let term = term.to_lowercase();
    let matches = inventory.search(&term);
    if matches.is_empty() {
        println!("{} not found in inventory.", view::capitalize(&term));
        return;
    }
    for (name, record) in matches {
        println!("{} - {}", view::capitalize(name), record.quantity);
    }
}

fn delete_ingredient(inventory: &mut Inventory) {
    let Some(name) = prompt("Enter the ingredient name to delete: ") else {
        return;
    };
    let key = normalize_name(&name);
    match inventory.remove(&key) {
        Ok(()) => println!("{} deleted successfully!", view::capitalize(&key)),
        Err(err) => println!("Error: {err}."),
    }
}
