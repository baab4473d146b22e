//! DRY, KISS and YAGNI
//!
//! Three small contrasts that come before the SOLID principles:
//!
//! - **DRY** (Don't Repeat Yourself): [`AreaCalculatorV1`] repeats the area
//!   computation inline, [`AreaCalculatorV2`] has one reusable function.
//! - **KISS** (Keep It Simple, Stupid): [`IsNumberEvenV1`] branches into a
//!   flag, [`IsNumberEvenV2`] returns the comparison.
//! - **YAGNI** (You Ain't Gonna Need It): [`InvoiceV1`] carries an accessor
//!   nothing calls, [`InvoiceV2`] does not.

use std::io::Write;

use crate::context::DemoContext;
use crate::error::Result;
use crate::principles::Principle;

// ═══════════════════════════════════════════════════════════════════════
// DRY
// ═══════════════════════════════════════════════════════════════════════

/// Computes two areas by copy-pasting the same arithmetic.
pub struct AreaCalculatorV1;

impl AreaCalculatorV1 {
    /// Write the areas of a 10×5 and a 20×10 rectangle.
    pub fn calculate(out: &mut dyn Write) -> Result<()> {
        let length1 = 10;
        let breadth1 = 5;
        let area1 = f64::from(length1 * breadth1);
        writeln!(out, "Area: {:?}", area1)?;
        let length2 = 20;
        let breadth2 = 10;
        let area2 = f64::from(length2 * breadth2);
        writeln!(out, "Area: {:?}", area2)?;
        Ok(())
    }
}

/// One area function, reused for any rectangle.
pub struct AreaCalculatorV2;

impl AreaCalculatorV2 {
    /// Area of a `length` × `breadth` rectangle.
    ///
    /// ```
    /// use solid::principles::basics::AreaCalculatorV2;
    ///
    /// assert_eq!(AreaCalculatorV2::calculate(10, 5), 50.0);
    /// ```
    pub fn calculate(length: i32, breadth: i32) -> f64 {
        f64::from(length) * f64::from(breadth)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// KISS
// ═══════════════════════════════════════════════════════════════════════

/// Even check with a needless branch and flag.
pub struct IsNumberEvenV1;

impl IsNumberEvenV1 {
    /// True when `number` is even.
    #[allow(clippy::all)]
    pub fn is_even(number: i32) -> bool {
        let is_even;
        if number % 2 == 0 {
            is_even = true;
        } else {
            is_even = false;
        }
        is_even
    }
}

/// Even check as a single expression.
pub struct IsNumberEvenV2;

impl IsNumberEvenV2 {
    /// True when `number` is even.
    pub fn is_even(number: i32) -> bool {
        number % 2 == 0
    }
}

// ═══════════════════════════════════════════════════════════════════════
// YAGNI
// ═══════════════════════════════════════════════════════════════════════

/// Invoice with an accessor nobody uses.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceV1 {
    customer_name: String,
    amount: f64,
}

impl InvoiceV1 {
    /// Create an invoice.
    pub fn new(customer_name: impl Into<String>, amount: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            amount,
        }
    }

    /// The customer's name. Never called by the demonstration.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Write the invoice details.
    pub fn print_invoice(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Customer Name: {}", self.customer_name)?;
        writeln!(out, "Amount: {:?}", self.amount)?;
        Ok(())
    }
}

/// Invoice with only what printing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceV2 {
    customer_name: String,
    amount: f64,
}

impl InvoiceV2 {
    /// Create an invoice.
    pub fn new(customer_name: impl Into<String>, amount: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            amount,
        }
    }

    /// Write the invoice details.
    pub fn print_invoice(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Customer Name: {}", self.customer_name)?;
        writeln!(out, "Amount: {:?}", self.amount)?;
        Ok(())
    }
}

/// Run the DRY/KISS/YAGNI demonstration.
pub fn run(_ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Basics.title())?;

    AreaCalculatorV1::calculate(out)?;
    for (length, breadth) in [(10, 5), (20, 10)] {
        let area = AreaCalculatorV2::calculate(length, breadth);
        writeln!(out, "Area: {:?}", area)?;
    }

    let number = 4;
    writeln!(out, "{} is even: {}", number, IsNumberEvenV1::is_even(number))?;
    writeln!(out, "{} is even: {}", number, IsNumberEvenV2::is_even(number))?;

    InvoiceV1::new("John Doe", 100.0).print_invoice(out)?;
    InvoiceV2::new("Jane Doe", 200.0).print_invoice(out)?;
    Ok(())
}
