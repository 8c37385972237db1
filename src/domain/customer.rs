use crate::domain::item::{Item, MenuItem};
use crate::domain::money::Price;
use std::fmt;

/// Currency every price is quoted in.
pub const CURRENCY: &str = "SAR";

/// A customer and the items they have ordered so far.
///
/// Items are only ever appended; nothing removes them from an order.
#[derive(Debug, PartialEq, Clone)]
pub struct Customer {
    name: String,
    items: Vec<Item>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn order_items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of the current item prices, before any discount.
    pub fn total(&self) -> Price {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// Human-readable summary of the order, recomputed on every call.
    pub fn describe(&self) -> String {
        let items = self
            .items
            .iter()
            .map(MenuItem::label)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "The order for {} is: {}\ntotal price: {} {}",
            self.name,
            items,
            self.total(),
            CURRENCY
        )
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drink::Drink;
    use crate::domain::sandwich::Sandwich;
    use rust_decimal_macros::dec;

    fn ali() -> Customer {
        let mut latte = Drink::new("Latte", Price::new(dec!(14.0)).unwrap());
        latte.set_size("super-large").unwrap();
        latte.add_add_on("vanilla").unwrap();
        latte.add_add_on("hazelnut").unwrap();
        latte.add_add_on("whipped cream").unwrap();

        let mut customer = Customer::new("Ali");
        customer.add_item(latte.into());
        customer.add_item(Sandwich::new("Chicken", Price::new(dec!(5.0)).unwrap()).into());
        customer
    }

    #[test]
    fn test_add_item_keeps_order() {
        let customer = ali();
        let names: Vec<&str> = customer.order_items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Latte", "Chicken"]);
        assert_eq!(customer.total().value(), dec!(25.4));
    }

    #[test]
    fn test_describe_format() {
        let customer = ali();
        assert_eq!(
            customer.describe(),
            "The order for Ali is: super-large Latte, Chicken\ntotal price: 25.4 SAR"
        );
        assert_eq!(customer.to_string(), customer.describe());
    }

    #[test]
    fn test_describe_is_idempotent() {
        let customer = ali();
        assert_eq!(customer.describe(), customer.describe());
    }

    #[test]
    fn test_describe_empty_order() {
        let customer = Customer::new("Nobody");
        assert_eq!(
            customer.describe(),
            "The order for Nobody is: \ntotal price: 0.0 SAR"
        );
    }

    #[test]
    fn test_duplicate_items_allowed() {
        let beef = Sandwich::new("Beef", Price::new(dec!(6.0)).unwrap());
        let mut customer = Customer::new("Abdulaziz");
        customer.add_item(beef.clone().into());
        customer.add_item(beef.into());
        assert_eq!(customer.order_items().len(), 2);
        assert!(customer.describe().ends_with("Beef, Beef\ntotal price: 12.0 SAR"));
    }
}
