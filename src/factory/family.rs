use super::{Store, Transport};
use crate::error::{PatternError, Result};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

// =============================================================================
// Factory capability
// =============================================================================

/// Creates a transport and a store that belong together.
pub trait LogisticsFactory: fmt::Debug {
    fn selector(&self) -> &'static str;
    fn create_transport(&self) -> Transport;
    fn create_store(&self) -> Store;

    fn create_pair(&self) -> FactoryPair {
        FactoryPair {
            selector: self.selector(),
            transport: self.create_transport(),
            store: self.create_store(),
        }
    }
}

/// The consistent pair one factory hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactoryPair {
    pub selector: &'static str,
    pub transport: Transport,
    pub store: Store,
}

impl fmt::Display for FactoryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.transport, self.store)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColdWithTruck;

impl LogisticsFactory for ColdWithTruck {
    fn selector(&self) -> &'static str {
        "coldWithTruck"
    }

    fn create_transport(&self) -> Transport {
        Transport::Truck
    }

    fn create_store(&self) -> Store {
        Store::ColdStore
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HotWithAirPlane;

impl LogisticsFactory for HotWithAirPlane {
    fn selector(&self) -> &'static str {
        "hotWithAirPlane"
    }

    fn create_transport(&self) -> Transport {
        Transport::AirPlane
    }

    fn create_store(&self) -> Store {
        Store::HotStore
    }
}

// =============================================================================
// Selector lookup
// =============================================================================

type FactoryCtor = fn() -> Box<dyn LogisticsFactory>;

fn cold_with_truck() -> Box<dyn LogisticsFactory> {
    Box::new(ColdWithTruck)
}

fn hot_with_air_plane() -> Box<dyn LogisticsFactory> {
    Box::new(HotWithAirPlane)
}

/// Every selector with its constructor, in registration order.
const REGISTRY: &[(&str, FactoryCtor)] = &[
    ("coldWithTruck", cold_with_truck),
    ("hotWithAirPlane", hot_with_air_plane),
];

lazy_static! {
    static ref FACTORIES: HashMap<&'static str, FactoryCtor> =
        REGISTRY.iter().copied().collect();

    /// Selectors accepted by [`create_factory`], in registration order.
    pub static ref SELECTORS: Vec<&'static str> =
        REGISTRY.iter().map(|(selector, _)| *selector).collect();
}

/// Resolves a selector to its factory. Exact match only.
pub fn create_factory(selector: &str) -> Result<Box<dyn LogisticsFactory>> {
    match FACTORIES.get(selector) {
        Some(ctor) => {
            debug!(selector, "factory resolved");
            Ok(ctor())
        }
        None => {
            warn!(selector, "no such factory");
            Err(PatternError::factory_not_found(selector, &SELECTORS))
        }
    }
}
