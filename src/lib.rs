//! # Design Patterns
//!
//! Small, self-contained illustrations of four classic creational and
//! structural patterns.
//!
//! ## Patterns Covered
//!
//! 1. **Factory Method** ([`factory::create_transport`])
//!    - One constructor picks a transport variant by key
//!
//! 2. **Abstract Factory** ([`factory::create_factory`])
//!    - A factory produces a transport and a store as a consistent pair
//!    - Selectors resolve through a lookup table, unknown keys are errors
//!
//! 3. **Builder + Director** ([`builder`])
//!    - Builders own *how* each part of a house is made
//!    - The director owns *in which order* the parts are made
//!
//! 4. **Adapter** ([`adapter`])
//!    - A legacy printer is made to fit the `Printer` interface
//!
//! ## Running
//!
//! ```bash
//! cargo run -- all
//! cargo run -- factory coldWithTruck frozenWithRocket
//! cargo run -- builder --style wood --rebind apartment
//! cargo run --bin adapter
//! ```

pub mod adapter;
pub mod builder;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory;
pub mod logging;
pub mod report;

pub use error::{PatternError, Result};
