use crate::domain::item::MenuItem;
use crate::domain::money::Price;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of add-ons a single drink can carry.
pub const MAX_ADD_ONS: usize = 3;

const SUPER_LARGE_MULTIPLIER: Decimal = dec!(1.10);

const VANILLA_PRICE: Price = Price::new_unchecked(dec!(1.5));
const CARAMEL_PRICE: Price = Price::new_unchecked(dec!(2.0));
const HAZELNUT_PRICE: Price = Price::new_unchecked(dec!(2.5));
const WHIPPED_CREAM_PRICE: Price = Price::new_unchecked(dec!(1.0));

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DrinkSize {
    #[default]
    Regular,
    Large,
    SuperLarge,
}

impl DrinkSize {
    /// Factor applied to the base price of a drink of this size.
    ///
    /// Large is deliberately priced like regular; only super-large carries a
    /// surcharge.
    pub fn multiplier(&self) -> Decimal {
        match self {
            DrinkSize::Regular | DrinkSize::Large => Decimal::ONE,
            DrinkSize::SuperLarge => SUPER_LARGE_MULTIPLIER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkSize::Regular => "regular",
            DrinkSize::Large => "large",
            DrinkSize::SuperLarge => "super-large",
        }
    }
}

impl FromStr for DrinkSize {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(DrinkSize::Regular),
            "large" => Ok(DrinkSize::Large),
            "super-large" => Ok(DrinkSize::SuperLarge),
            _ => Err(VendingError::InvalidInput(format!(
                "unknown drink size '{s}'"
            ))),
        }
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    Vanilla,
    Caramel,
    Hazelnut,
    #[serde(rename = "whipped cream")]
    WhippedCream,
}

impl AddOn {
    pub fn price(&self) -> Price {
        match self {
            AddOn::Vanilla => VANILLA_PRICE,
            AddOn::Caramel => CARAMEL_PRICE,
            AddOn::Hazelnut => HAZELNUT_PRICE,
            AddOn::WhippedCream => WHIPPED_CREAM_PRICE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddOn::Vanilla => "vanilla",
            AddOn::Caramel => "caramel",
            AddOn::Hazelnut => "hazelnut",
            AddOn::WhippedCream => "whipped cream",
        }
    }
}

impl FromStr for AddOn {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vanilla" => Ok(AddOn::Vanilla),
            "caramel" => Ok(AddOn::Caramel),
            "hazelnut" => Ok(AddOn::Hazelnut),
            "whipped cream" => Ok(AddOn::WhippedCream),
            _ => Err(VendingError::InvalidInput(format!("unknown add-on '{s}'"))),
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drink with a size and up to [`MAX_ADD_ONS`] add-ons.
///
/// Starts out regular with no add-ons. Size and add-ons are expected to be
/// settled before the drink is handed to an order.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Drink {
    name: String,
    base_price: Price,
    size: DrinkSize,
    add_ons: Vec<AddOn>,
}

impl Drink {
    pub fn new(name: impl Into<String>, base_price: Price) -> Self {
        Self {
            name: name.into(),
            base_price,
            size: DrinkSize::default(),
            add_ons: Vec::with_capacity(MAX_ADD_ONS),
        }
    }

    pub fn size(&self) -> DrinkSize {
        self.size
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Sets the size from a case-insensitive name. The size is left untouched on error.
    pub fn set_size(&mut self, size: &str) -> Result<()> {
        self.size = size.parse()?;
        Ok(())
    }

    /// Appends an add-on given by its case-insensitive name.
    ///
    /// The limit is checked before the name, so a full drink always reports
    /// [`VendingError::AddOnLimitExceeded`].
    pub fn add_add_on(&mut self, name: &str) -> Result<()> {
        if self.add_ons.len() >= MAX_ADD_ONS {
            return Err(VendingError::AddOnLimitExceeded { max: MAX_ADD_ONS });
        }
        self.add_ons.push(name.parse()?);
        Ok(())
    }
}

impl MenuItem for Drink {
    fn name(&self) -> &str {
        &self.name
    }

    /// Base price times the size multiplier, plus every add-on.
    fn price(&self) -> Price {
        let add_ons: Price = self.add_ons.iter().map(AddOn::price).sum();
        self.base_price.scaled(self.size.multiplier()) + add_ons
    }

    fn label(&self) -> String {
        format!("{} {}", self.size, self.name)
    }
}
