//! The two product families: how goods travel and how they are kept.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transport {
    Truck,
    AirPlane,
}

impl Transport {
    /// Keys accepted by [`super::create_transport`].
    pub const KINDS: &'static [&'static str] = &["truck", "airPlane"];

    pub fn delivery(&self) -> &'static str {
        match self {
            Transport::Truck => "use truck delivery...",
            Transport::AirPlane => "use airplane delivery...",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.delivery())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Store {
    ColdStore,
    HotStore,
}

impl Store {
    pub fn store(&self) -> &'static str {
        match self {
            Store::ColdStore => "use cold store...",
            Store::HotStore => "use hot store...",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store())
    }
}
