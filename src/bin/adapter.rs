//! Adapter
//!
//! Run with: cargo run --bin adapter

use design_patterns::adapter::{Printer, PrinterAdapter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut printer = PrinterAdapter::stdout();
    match printer.print("this is adapter pattern") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
