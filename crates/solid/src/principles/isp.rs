//! Interface Segregation Principle
//!
//! No type should be forced to implement methods it has no use for.
//! [`MultiFunctionalDevice`] bundles print, scan and fax, so a printer
//! without fax hardware still has to provide `fax` and can only fail.
//! Splitting the capabilities into [`Printable`], [`Scannable`] and
//! [`Faxable`] lets each device implement exactly what it supports.

use std::io::Write;

use crate::context::DemoContext;
use crate::error::{Result, SolidError};
use crate::principles::Principle;

/// One broad trait for every office-device capability.
pub trait MultiFunctionalDevice {
    /// Print a document.
    fn print(&self, out: &mut dyn Write) -> Result<()>;
    /// Scan a document.
    fn scan(&self, out: &mut dyn Write) -> Result<()>;
    /// Fax a document.
    fn fax(&self, out: &mut dyn Write) -> Result<()>;
}

/// Prints and scans, but has no fax line.
#[derive(Debug, Default)]
pub struct MultiFunctionalPrinter;

impl MultiFunctionalDevice for MultiFunctionalPrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing...")?;
        Ok(())
    }

    fn scan(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scanning...")?;
        Ok(())
    }

    fn fax(&self, _out: &mut dyn Write) -> Result<()> {
        Err(SolidError::unsupported("Faxing not supported"))
    }
}

/// Can print.
pub trait Printable {
    /// Print a document.
    fn print(&self, out: &mut dyn Write) -> Result<()>;
}

/// Can scan.
pub trait Scannable {
    /// Scan a document.
    fn scan(&self, out: &mut dyn Write) -> Result<()>;
}

/// Can fax.
pub trait Faxable {
    /// Fax a document.
    fn fax(&self, out: &mut dyn Write) -> Result<()>;
}

/// Print-only device.
#[derive(Debug, Default)]
pub struct SimplePrinter;

impl Printable for SimplePrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing...")?;
        Ok(())
    }
}

/// Device that really does all three.
#[derive(Debug, Default)]
pub struct AllInOnePrinter;

impl Printable for AllInOnePrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing...")?;
        Ok(())
    }
}

impl Scannable for AllInOnePrinter {
    fn scan(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scanning...")?;
        Ok(())
    }
}

impl Faxable for AllInOnePrinter {
    fn fax(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Faxing...")?;
        Ok(())
    }
}

/// Run the ISP demonstration.
pub fn run(ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Isp.title())?;

    let device = MultiFunctionalPrinter;
    device.print(out)?;
    device.scan(out)?;

    SimplePrinter.print(out)?;

    let office = AllInOnePrinter;
    office.print(out)?;
    office.scan(out)?;
    office.fax(out)?;

    ctx.violate("MultiFunctionalPrinter::fax", || device.fax(out))
}
