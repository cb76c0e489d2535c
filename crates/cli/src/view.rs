//! Output formatting shared by the menu shells.

use bakestock_inventory::{
    ExpiringItem, IngredientRecord, Inventory, InventoryReport, REPORT_EXPIRY_WINDOW_DAYS,
};

/// Uppercase the first character, the way names and categories print.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Section header between menu actions.
pub fn print_section(title: &str) {
    println!("\n{}", "-".repeat(40));
    println!("{title}");
    println!("{}", "-".repeat(40));
}

/// Aligned inventory table, one row per record in name order.
pub fn print_inventory(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("Inventory is empty. Add some ingredients first!");
        return;
    }

    println!(
        "{:<20} {:<15} {:<12} {:<12}",
        "Ingredient", "Quantity", "Category", "Expires"
    );
    println!("{}", "-".repeat(60));

    for (name, record) in inventory.iter() {
        let expires = record
            .expiration_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<20} {:<15} {:<12} {:<12}",
            capitalize(name),
            record.quantity,
            capitalize(&record.category),
            expires
        );
    }
}

pub fn print_search_results(term: &str, matches: &[(&str, &IngredientRecord)]) {
    if matches.is_empty() {
        println!("No ingredients found matching '{term}'.");
        return;
    }
    println!("Found {} matching ingredient(s):", matches.len());
    for (name, record) in matches {
        println!(
            "- {}: {} (Category: {})",
            capitalize(name),
            record.quantity,
            record.category
        );
    }
}

pub fn print_expiring(items: &[ExpiringItem<'_>], days: i64) {
    if items.is_empty() {
        println!("No ingredients expiring within the next {days} days.");
        return;
    }
    println!("Ingredients expiring within the next {days} days:");
    for item in items {
        let date = item
            .record
            .expiration_date
            .map(|date| date.to_string())
            .unwrap_or_default();
        println!(
            "- {}: {} (Expires in {} days on {})",
            capitalize(item.name),
            item.record.quantity,
            item.days_remaining,
            date
        );
    }
}

pub fn print_report(report: &InventoryReport) {
    println!("Total ingredients: {}", report.total_count);
    let categories = report
        .counts_by_category
        .iter()
        .map(|(category, count)| format!("{}: {}", capitalize(category), count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Categories: {categories}");
    println!(
        "Ingredients expiring within {} days: {}",
        REPORT_EXPIRY_WINDOW_DAYS, report.expiring_soon
    );
    println!(
        "Report generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_only_the_first_character() {
        assert_eq!(capitalize("flour"), "Flour");
        assert_eq!(capitalize("brown sugar"), "Brown sugar");
        assert_eq!(capitalize("Flour"), "Flour");
        assert_eq!(capitalize(""), "");
    }
}
