use crate::domain::customer::Customer;
use crate::domain::money::Money;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::io::Write;

/// One summary row per billed customer.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct InvoiceRecord {
    pub customer: String,
    pub items: usize,
    #[serde(serialize_with = "serialize_display")]
    pub total: Money,
    #[serde(serialize_with = "serialize_display")]
    pub discount: Decimal,
    #[serde(serialize_with = "serialize_display")]
    pub invoice: Money,
}

impl InvoiceRecord {
    pub fn new(customer: &Customer, discount: Decimal, invoice: Money) -> Self {
        Self {
            customer: customer.name().to_string(),
            items: customer.order_items().len(),
            total: customer.total().into(),
            discount: discount.normalize(),
            invoice,
        }
    }
}

fn serialize_display<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Writes invoice summaries as CSV, header first.
pub struct InvoiceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InvoiceWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_invoices(&mut self, invoices: impl IntoIterator<Item = InvoiceRecord>) -> Result<()> {
        for invoice in invoices {
            self.writer.serialize(invoice)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
