//! Factory Method
//!
//! Run with: cargo run --bin factory_method

use design_patterns::factory::{create_transport, Transport};

fn main() {
    println!("=== Factory Method ===");
    // Usage: one constructor hides which concrete transport comes back.
    for kind in Transport::KINDS.iter().copied().chain(["ship"]) {
        match create_transport(kind) {
            Ok(transport) => println!("{kind}: {}", transport.delivery()),
            Err(err) => println!("{kind}: {err}"),
        }
    }
}
