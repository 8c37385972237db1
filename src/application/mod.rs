//! Application layer: the vending machine that turns customer orders into invoices.
//!
//! Items are priced by the domain model; the machine only registers orders and
//! applies discounts on top of the order totals.

pub mod vending_machine;
