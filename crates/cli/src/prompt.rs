//! Line-oriented input helpers for the menu loops.

use std::io::{self, Write};

/// Print `label` and read one trimmed line.
///
/// Returns `None` at end of input or on a read error; callers treat both as
/// the exit path.
pub fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Prompt until the reply parses as a menu number between 1 and `max`.
pub fn menu_choice(label: &str, max: u32) -> Option<u32> {
    loop {
        let line = prompt(label)?;
        match line.parse::<u32>() {
            Ok(choice) if (1..=max).contains(&choice) => return Some(choice),
            Ok(_) => println!("Error: Please enter a number between 1 and {max}."),
            Err(_) => println!("Error: Invalid input. Please enter a number."),
        }
    }
}
