//! Open/Closed Principle
//!
//! Types should be open for extension and closed for modification.
//! [`PaymentMethodV1`] branches on a payment-type string, so every new
//! payment type means editing it. With [`PaymentMethod`], each payment type
//! is its own implementation and [`PaymentProcessorV2`] never changes when
//! one is added ([`BankTransferPaymentMethod`] is such a later addition).

use std::io::Write;

use crate::context::DemoContext;
use crate::error::Result;
use crate::principles::Principle;

/// Payment handling as one if/else chain over type names.
#[derive(Debug, Default)]
pub struct PaymentMethodV1;

impl PaymentMethodV1 {
    /// Process a payment of the named type.
    ///
    /// Unknown types fall through every branch and nothing happens.
    pub fn process_payment(&self, payment_type: &str, out: &mut dyn Write) -> Result<()> {
        if payment_type == "CreditCard" {
            writeln!(out, "Processing credit card payment")?;
        } else if payment_type == "PayPal" {
            writeln!(out, "Processing PayPal payment")?;
        } else {
            tracing::warn!(payment_type, "no branch for payment type");
        }
        Ok(())
    }
}

/// A way of paying.
pub trait PaymentMethod {
    /// Process a payment.
    fn process_payment(&self, out: &mut dyn Write) -> Result<()>;
}

/// Credit card payments.
#[derive(Debug, Default)]
pub struct CreditCardPaymentMethod;

impl PaymentMethod for CreditCardPaymentMethod {
    fn process_payment(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Processing credit card payment")?;
        Ok(())
    }
}

/// PayPal payments.
#[derive(Debug, Default)]
pub struct PayPalPaymentMethod;

impl PaymentMethod for PayPalPaymentMethod {
    fn process_payment(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Processing PayPal payment")?;
        Ok(())
    }
}

/// Bank transfers, added without touching [`PaymentProcessorV2`].
#[derive(Debug, Default)]
pub struct BankTransferPaymentMethod;

impl PaymentMethod for BankTransferPaymentMethod {
    fn process_payment(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Processing bank transfer payment")?;
        Ok(())
    }
}

/// Processes whatever payment method it is given.
pub struct PaymentProcessorV2 {
    payment_method: Box<dyn PaymentMethod>,
}

impl PaymentProcessorV2 {
    /// Create a processor for one payment method.
    pub fn new(payment_method: Box<dyn PaymentMethod>) -> Self {
        Self { payment_method }
    }

    /// Process a payment with the configured method.
    pub fn process(&self, out: &mut dyn Write) -> Result<()> {
        self.payment_method.process_payment(out)
    }
}

/// Run the OCP demonstration.
pub fn run(_ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Ocp.title())?;

    let payment1 = PaymentMethodV1;
    for payment_type in ["CreditCard", "PayPal"] {
        payment1.process_payment(payment_type, out)?;
    }

    let methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCardPaymentMethod),
        Box::new(PayPalPaymentMethod),
        Box::new(BankTransferPaymentMethod),
    ];
    for method in methods {
        PaymentProcessorV2::new(method).process(out)?;
    }
    Ok(())
}
