//! Console rendering for demo outcomes.

use crate::demo::{BuiltHouse, FactoryOutcome, TransportOutcome};
use colored::Colorize;
use serde::Serialize;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn heading(title: &str) -> String {
        format!("{}\n{}\n", format!("=== {title} ===").bold().cyan(), "-".repeat(40))
    }

    pub fn format_factories(outcomes: &[FactoryOutcome]) -> String {
        let mut output = Self::heading("Abstract Factory");
        for outcome in outcomes {
            match outcome {
                FactoryOutcome::Found { pair } => {
                    output.push_str(&format!("{} {}\n", "[ok]".green(), pair.selector.bold()));
                    output.push_str(&format!("   transport: {}\n", pair.transport));
                    output.push_str(&format!("   store:     {}\n", pair.store));
                }
                FactoryOutcome::Missing { error, .. } => {
                    output.push_str(&format!("{} {}\n", "[err]".red(), error));
                }
            }
        }
        output
    }

    pub fn format_transports(outcomes: &[TransportOutcome]) -> String {
        let mut output = Self::heading("Factory Method");
        for outcome in outcomes {
            match outcome {
                TransportOutcome::Found { kind, transport } => {
                    let line = format!("{} {}: {}\n", "[ok]".green(), kind.bold(), transport);
                    output.push_str(&line);
                }
                TransportOutcome::Missing { error, .. } => {
                    output.push_str(&format!("{} {}\n", "[err]".red(), error));
                }
            }
        }
        output
    }

    pub fn format_houses(houses: &[BuiltHouse]) -> String {
        let mut output = Self::heading("Builder");
        for built in houses {
            let label = format!("{} house:", built.style);
            output.push_str(&format!("{} {}\n", label.bold(), built.house));
        }
        output
    }

    pub fn format_summary(found: usize, missing: usize) -> String {
        let plural = if missing == 1 { "" } else { "s" };
        let line = format!("Summary: {found} resolved, {missing} unknown key{plural}");
        if missing == 0 {
            line.green().to_string()
        } else {
            line.yellow().to_string()
        }
    }
}

/// Counts resolved and unknown keys across both factory demos.
pub fn tally(factories: &[FactoryOutcome], transports: &[TransportOutcome]) -> (usize, usize) {
    let found = factories
        .iter()
        .filter(|o| matches!(o, FactoryOutcome::Found { .. }))
        .count()
        + transports
            .iter()
            .filter(|o| matches!(o, TransportOutcome::Found { .. }))
            .count();
    let total = factories.len() + transports.len();
    (found, total - found)
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
