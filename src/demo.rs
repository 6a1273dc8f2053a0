//! Runs each pattern over a set of inputs and collects what happened.
//!
//! Failures are kept as outcomes rather than returned early: an unknown
//! selector is part of the demonstration.

use crate::adapter::{LegacyPrinter, Printer, PrinterAdapter};
use crate::builder::{Director, House, HouseStyle};
use crate::error::Result;
use crate::factory::{create_factory, create_transport, FactoryPair, Transport};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FactoryOutcome {
    Found { pair: FactoryPair },
    Missing { selector: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TransportOutcome {
    Found { kind: String, transport: Transport },
    Missing { kind: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltHouse {
    pub style: HouseStyle,
    pub house: House,
}

pub fn run_abstract_factory<S: AsRef<str>>(selectors: &[S]) -> Vec<FactoryOutcome> {
    selectors
        .iter()
        .map(|selector| {
            let selector = selector.as_ref();
            match create_factory(selector) {
                Ok(factory) => FactoryOutcome::Found {
                    pair: factory.create_pair(),
                },
                Err(err) => FactoryOutcome::Missing {
                    selector: selector.to_string(),
                    error: err.to_string(),
                },
            }
        })
        .collect()
}

pub fn run_factory_method<S: AsRef<str>>(kinds: &[S]) -> Vec<TransportOutcome> {
    kinds
        .iter()
        .map(|kind| {
            let kind = kind.as_ref().to_string();
            match create_transport(&kind) {
                Ok(transport) => TransportOutcome::Found { kind, transport },
                Err(err) => TransportOutcome::Missing {
                    kind,
                    error: err.to_string(),
                },
            }
        })
        .collect()
}

/// Builds with `style`, then, if asked, rebinds the director and builds again.
pub fn run_builder(style: HouseStyle, rebind: Option<HouseStyle>) -> Vec<BuiltHouse> {
    let mut director = Director::new(style.builder());
    let mut houses = vec![BuiltHouse {
        style,
        house: director.build_house(),
    }];
    info!(%style, "house built");

    if let Some(next) = rebind {
        director.set_builder(next.builder());
        houses.push(BuiltHouse {
            style: next,
            house: director.build_house(),
        });
        info!(style = %next, "house built after rebind");
    }
    houses
}

/// What went in to the adapter and what the legacy printer wrote out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterOutcome {
    pub message: String,
    pub forwarded: String,
}

pub fn run_adapter(printer: &mut dyn Printer, message: &str) -> Result<()> {
    printer.print(message)
}

/// Runs the adapter against an in-memory sink and reports what reached it.
pub fn capture_adapter(message: &str) -> Result<AdapterOutcome> {
    let mut adapter = PrinterAdapter::new(LegacyPrinter::new(Vec::new()));
    run_adapter(&mut adapter, message)?;
    let forwarded = String::from_utf8_lossy(&adapter.into_inner()).into_owned();
    Ok(AdapterOutcome {
        message: message.to_string(),
        forwarded,
    })
}
