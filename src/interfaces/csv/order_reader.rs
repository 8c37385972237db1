use crate::domain::drink::Drink;
use crate::domain::item::Item;
use crate::domain::money::Price;
use crate::domain::sandwich::Sandwich;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Separator between add-on names inside the `add_ons` column.
pub const ADD_ON_SEPARATOR: char = ';';

/// One raw row of an orders file.
///
/// Header: `customer,item,name,price,size,add_ons`. The last two columns are
/// optional and only make sense for drinks.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderLine {
    pub customer: String,
    pub item: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub add_ons: Option<String>,
}

/// A validated order line: the item built and ready to go on `customer`'s order.
#[derive(Debug, PartialEq, Clone)]
pub struct OrderEntry {
    pub customer: String,
    pub item: Item,
}

impl TryFrom<OrderLine> for OrderEntry {
    type Error = VendingError;

    fn try_from(line: OrderLine) -> Result<Self> {
        let price = Price::new(line.price)?;
        let item = match line.item.to_lowercase().as_str() {
            "drink" => {
                let mut drink = Drink::new(line.name, price);
                if let Some(size) = line.size.as_deref() {
                    drink.set_size(size)?;
                }
                for add_on in add_on_names(line.add_ons.as_deref()) {
                    drink.add_add_on(add_on)?;
                }
                Item::Drink(drink)
            }
            "sandwich" => {
                if line.size.is_some() || !add_on_names(line.add_ons.as_deref()).is_empty() {
                    return Err(VendingError::InvalidInput(format!(
                        "sandwich '{}' takes no size or add-ons",
                        line.name
                    )));
                }
                Item::Sandwich(Sandwich::new(line.name, price))
            }
            other => {
                return Err(VendingError::InvalidInput(format!(
                    "unknown item kind '{other}'"
                )));
            }
        };

        Ok(Self {
            customer: line.customer,
            item,
        })
    }
}

fn add_on_names(column: Option<&str>) -> Vec<&str> {
    column
        .map(|names| {
            names
                .split(ADD_ON_SEPARATOR)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Reads order lines from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so rows may leave out the trailing optional columns.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates each row.
    ///
    /// A bad row yields an error for that row only; later rows are still read.
    pub fn entries(self) -> impl Iterator<Item = Result<OrderEntry>> {
        self.reader.into_deserialize::<OrderLine>().map(|result| {
            result
                .map_err(VendingError::from)
                .and_then(OrderEntry::try_from)
        })
    }
}
