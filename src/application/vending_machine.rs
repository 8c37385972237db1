use crate::domain::customer::Customer;
use crate::domain::item::Item;
use crate::domain::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

/// Takes orders on behalf of customers and bills them.
///
/// The machine does not own any order. It keeps a registry of the customers it
/// has served, in the order their orders were made. A customer ordering twice
/// appears twice.
#[derive(Debug, Default)]
pub struct VendingMachine {
    customers: Vec<String>,
}

impl VendingMachine {
    /// Creates a machine that has not served anyone yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `items` to the customer's order, in order, and registers the customer.
    pub fn make_order(&mut self, customer: &mut Customer, items: impl IntoIterator<Item = Item>) {
        let before = customer.order_items().len();
        for item in items {
            customer.add_item(item);
        }
        debug!(
            customer = customer.name(),
            added = customer.order_items().len() - before,
            "Order registered"
        );
        self.customers.push(customer.name().to_string());
    }

    /// Returns the order total with `discount_percent` taken off.
    ///
    /// The discount is not range-checked: a negative percentage raises the
    /// bill and anything above 100 yields a negative invoice.
    pub fn generate_invoice(&self, customer: &Customer, discount_percent: Decimal) -> Money {
        if discount_percent < Decimal::ZERO || discount_percent > dec!(100) {
            warn!(
                customer = customer.name(),
                %discount_percent,
                "Discount outside 0-100%"
            );
        }

        let total = Money::from(customer.total());
        let invoice = total.scaled(Decimal::ONE - discount_percent / dec!(100));
        debug!(customer = customer.name(), %total, %invoice, "Invoice generated");
        invoice
    }

    /// Names of the customers served so far, in order, duplicates included.
    pub fn customers(&self) -> &[String] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drink::Drink;
    use crate::domain::money::Price;
    use crate::domain::sandwich::Sandwich;

    fn beef() -> Item {
        Sandwich::new("Beef", Price::new(dec!(6.0)).unwrap()).into()
    }

    fn latte() -> Item {
        let mut latte = Drink::new("Latte", Price::new(dec!(14.0)).unwrap());
        latte.set_size("super-large").unwrap();
        latte.add_add_on("vanilla").unwrap();
        latte.add_add_on("hazelnut").unwrap();
        latte.add_add_on("whipped cream").unwrap();
        latte.into()
    }

    #[test]
    fn test_make_order_appends_and_registers() {
        let mut machine = VendingMachine::new();
        let mut ali = Customer::new("Ali");

        let chicken: Item = Sandwich::new("Chicken", Price::new(dec!(5.0)).unwrap()).into();
        machine.make_order(&mut ali, vec![latte(), chicken]);

        assert_eq!(ali.order_items().len(), 2);
        assert_eq!(machine.customers(), &["Ali".to_string()]);
        assert_eq!(machine.generate_invoice(&ali, dec!(0)), Money::new(dec!(25.4)));
    }

    #[test]
    fn test_repeated_orders_accumulate() {
        let mut machine = VendingMachine::new();
        let mut abdulaziz = Customer::new("Abdulaziz");

        machine.make_order(&mut abdulaziz, vec![beef()]);
        machine.make_order(&mut abdulaziz, vec![beef()]);

        assert_eq!(abdulaziz.order_items().len(), 2);
        assert_eq!(machine.customers().len(), 2);
        assert_eq!(
            machine.generate_invoice(&abdulaziz, dec!(0)),
            Money::new(dec!(12.0))
        );
    }

    #[test]
    fn test_empty_order_still_registers() {
        let mut machine = VendingMachine::new();
        let mut nobody = Customer::new("Nobody");
        machine.make_order(&mut nobody, Vec::new());

        assert_eq!(machine.customers(), &["Nobody".to_string()]);
        assert_eq!(machine.generate_invoice(&nobody, dec!(5)), Money::ZERO);
    }

    #[test]
    fn test_invoice_discounts() {
        let mut machine = VendingMachine::new();
        let mut abdulaziz = Customer::new("Abdulaziz");
        machine.make_order(&mut abdulaziz, vec![beef()]);

        assert_eq!(machine.generate_invoice(&abdulaziz, dec!(0)), Money::new(dec!(6.0)));
        assert_eq!(machine.generate_invoice(&abdulaziz, dec!(5)), Money::new(dec!(5.7)));
        assert_eq!(machine.generate_invoice(&abdulaziz, dec!(100)), Money::ZERO);
    }

    #[test]
    fn test_out_of_range_discounts_are_applied() {
        let mut machine = VendingMachine::new();
        let mut abdulaziz = Customer::new("Abdulaziz");
        machine.make_order(&mut abdulaziz, vec![beef()]);

        assert_eq!(
            machine.generate_invoice(&abdulaziz, dec!(-10)),
            Money::new(dec!(6.6))
        );
        assert_eq!(
            machine.generate_invoice(&abdulaziz, dec!(110)),
            Money::new(dec!(-0.6))
        );
    }
}
