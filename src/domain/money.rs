use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A signed monetary value in SAR.
///
/// Order totals and invoices are expressed as `Money`. Invoices may go negative
/// when a discount above 100% is applied, so no sign rule is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Money(pub Decimal);

/// Largest base price an item may carry.
///
/// Keeps size surcharges, add-ons and order totals well inside `Decimal` range.
pub const MAX_PRICE: Decimal = dec!(1000000000);

/// The non-negative price of a single item, at most [`MAX_PRICE`].
///
/// Prices are the only way money enters an order, which keeps every item
/// price and every order total at or above zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            Err(VendingError::InvalidInput(format!(
                "price must not be negative, got {value}"
            )))
        } else if value > MAX_PRICE {
            Err(VendingError::InvalidInput(format!(
                "price must not exceed {MAX_PRICE}, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    /// For fixed menu prices known to be non-negative.
    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Scales the price by a non-negative factor, such as a size multiplier.
    pub(crate) fn scaled(self, factor: Decimal) -> Self {
        debug_assert!(factor >= Decimal::ZERO);
        Self(self.0 * factor)
    }
}

impl From<Price> for Money {
    fn from(price: Price) -> Self {
        Self(price.0)
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn scaled(self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }
}

// Renders like "25.4" or "6.0": trailing zeros dropped, one fractional digit kept.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.normalize();
        if value.scale() == 0 {
            write!(f, "{value}.0")
        } else {
            write!(f, "{value}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Money::from(*self).fmt(f)
    }
}
