//! Adapter: fitting a legacy printer into the [`Printer`] interface.

use crate::error::Result;
use std::io::{self, Write};
use tracing::debug;

/// What callers expect to talk to.
pub trait Printer {
    fn print(&mut self, msg: &str) -> Result<()>;
}

/// An existing component with the wrong method name and its own error type.
#[derive(Debug)]
pub struct LegacyPrinter<W: Write> {
    out: W,
}

impl<W: Write> LegacyPrinter<W> {
    pub fn new(out: W) -> Self {
        LegacyPrinter { out }
    }

    pub fn print_msg(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug)]
pub struct PrinterAdapter<W: Write> {
    legacy: LegacyPrinter<W>,
}

impl<W: Write> PrinterAdapter<W> {
    pub fn new(legacy: LegacyPrinter<W>) -> Self {
        PrinterAdapter { legacy }
    }

    pub fn into_inner(self) -> W {
        self.legacy.into_inner()
    }
}

impl PrinterAdapter<io::Stdout> {
    pub fn stdout() -> Self {
        PrinterAdapter::new(LegacyPrinter::new(io::stdout()))
    }
}

impl<W: Write> Printer for PrinterAdapter<W> {
    fn print(&mut self, msg: &str) -> Result<()> {
        debug!(len = msg.len(), "forwarding to legacy printer");
        self.legacy.print_msg(msg)?;
        Ok(())
    }
}
