//! Factory method and abstract factory.
//!
//! `create_transport` picks a single product by key. `create_factory` picks a
//! whole family, so the transport and the store it hands out always match.

mod family;
mod method;
mod products;

pub use family::{
    create_factory, ColdWithTruck, FactoryPair, HotWithAirPlane, LogisticsFactory, SELECTORS,
};
pub use method::create_transport;
pub use products::{Store, Transport};
