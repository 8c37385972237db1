//! CSV adapters: order lines in, invoice summaries out.

pub mod invoice_writer;
pub mod order_reader;
