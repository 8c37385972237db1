use crate::domain::item::MenuItem;
use crate::domain::money::Price;
use serde::Serialize;

/// A sandwich sold at a fixed price.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Sandwich {
    name: String,
    price: Price,
}

impl Sandwich {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl MenuItem for Sandwich {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Price {
        self.price
    }
}
