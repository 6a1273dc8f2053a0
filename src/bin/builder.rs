//! Builder + Director
//!
//! Run with: cargo run --bin builder

use design_patterns::builder::{ApartmentBuilder, Director, WoodBuilder};

fn main() {
    println!("=== Wood House ===");
    let mut director = Director::new(Box::new(WoodBuilder::new()));
    let house = director.build_house();
    println!("{house}");

    println!("\n=== Same Director, New Builder ===");
    // The assembly order stays with the director; only the parts change.
    director.set_builder(Box::new(ApartmentBuilder::new()));
    let apartment = director.build_house();
    println!("{apartment}");
}
