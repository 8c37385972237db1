//! Domain model: menu items, their pricing rules and customer orders.

pub mod customer;
pub mod drink;
pub mod item;
pub mod money;
pub mod sandwich;
