use crate::error::Result;
use crate::models::{PortionResult, VegetableEntry};

/// One line per result, `"{name}: {portion}g"`.
pub fn format_results(results: &[PortionResult]) -> Vec<String> {
    results.iter().map(|r| r.to_string()).collect()
}

/// Pretty-printed JSON array of results.
pub fn results_json(results: &[PortionResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Display computed portions.
pub fn display_results(results: &[PortionResult]) {
    println!();
    println!("=== Results ===");
    println!();

    for line in format_results(results) {
        println!("  {}", line);
    }

    println!();
}

/// Display the vegetables entered so far.
pub fn display_entries(entries: &[VegetableEntry]) {
    if entries.is_empty() {
        println!("Vegetables: (none)");
        return;
    }

    println!();
    println!("=== Vegetables ({} items) ===", entries.len());
    println!();

    for entry in entries {
        println!("  {} - {} mg per 100g", entry.name(), entry.potassium_per_100g());
    }

    println!();
}

/// Display an error message in place of any results.
pub fn display_error(message: &str) {
    eprintln!("Error: {}", message);
}
