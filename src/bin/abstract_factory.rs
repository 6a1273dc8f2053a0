//! Abstract Factory
//!
//! Run with: cargo run --bin abstract_factory [SELECTOR]...

use design_patterns::factory::{create_factory, SELECTORS};

fn main() {
    let mut selectors: Vec<String> = std::env::args().skip(1).collect();
    if selectors.is_empty() {
        selectors = SELECTORS.iter().map(|s| s.to_string()).collect();
        selectors.push("frozenWithRocket".to_string());
    }

    println!("=== Abstract Factory ===");
    // Usage: the selector picks a whole family, never a mismatched pair.
    for selector in &selectors {
        match create_factory(selector) {
            Ok(factory) => {
                println!("{selector}:");
                println!("  {}", factory.create_transport().delivery());
                println!("  {}", factory.create_store().store());
            }
            Err(err) => println!("{err}"),
        }
    }
}
