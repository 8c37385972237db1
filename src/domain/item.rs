use crate::domain::drink::Drink;
use crate::domain::money::Price;
use crate::domain::sandwich::Sandwich;
use serde::Serialize;

/// Capability shared by everything that can be put on an order.
pub trait MenuItem {
    fn name(&self) -> &str;

    fn price(&self) -> Price;

    /// How the item is listed in an order description. Defaults to the name.
    fn label(&self) -> String {
        self.name().to_string()
    }
}

/// An item on a customer's order.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "item", rename_all = "lowercase")]
pub enum Item {
    Drink(Drink),
    Sandwich(Sandwich),
}

impl MenuItem for Item {
    fn name(&self) -> &str {
        match self {
            Item::Drink(drink) => drink.name(),
            Item::Sandwich(sandwich) => sandwich.name(),
        }
    }

    fn price(&self) -> Price {
        match self {
            Item::Drink(drink) => drink.price(),
            Item::Sandwich(sandwich) => sandwich.price(),
        }
    }

    fn label(&self) -> String {
        match self {
            Item::Drink(drink) => drink.label(),
            Item::Sandwich(sandwich) => sandwich.label(),
        }
    }
}

impl From<Drink> for Item {
    fn from(drink: Drink) -> Self {
        Item::Drink(drink)
    }
}

impl From<Sandwich> for Item {
    fn from(sandwich: Sandwich) -> Self {
        Item::Sandwich(sandwich)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_dispatches_to_variant() {
        let mut drink = Drink::new("Mocha", Price::new(dec!(10.0)).unwrap());
        drink.set_size("large").unwrap();
        drink.add_add_on("hazelnut").unwrap();
        let drink: Item = drink.into();
        let sandwich: Item = Sandwich::new("Tuna", Price::new(dec!(7.5)).unwrap()).into();

        assert_eq!(drink.name(), "Mocha");
        assert_eq!(drink.price().value(), dec!(12.5));
        assert_eq!(drink.label(), "large Mocha");

        assert_eq!(sandwich.name(), "Tuna");
        assert_eq!(sandwich.price().value(), dec!(7.5));
        assert_eq!(sandwich.label(), "Tuna");
    }

    #[test]
    fn test_item_serialization_is_tagged() {
        let sandwich: Item = Sandwich::new("Beef", Price::new(dec!(6.0)).unwrap()).into();
        let json = serde_json::to_value(&sandwich).unwrap();
        assert_eq!(json["item"], "sandwich");
        assert_eq!(json["name"], "Beef");
    }
}
