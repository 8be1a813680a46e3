//! Wire records
//!
//! Serialized shapes consumed from and sent to the remote API, kept separate from the domain
//! types they hydrate.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::{cart::CartLine, products::Product, services::catalog::ProductPage};

/// Wire shape of a catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product id.
    pub id: i64,

    /// Product name.
    pub name: String,

    /// Unit price in major currency units.
    pub price: Decimal,
}

impl ProductRecord {
    /// Hydrate a domain product priced in the given currency.
    #[must_use]
    pub fn into_product(self, currency: &'static Currency) -> Product<'static> {
        Product {
            id: self.id,
            name: self.name,
            price: Money::from_decimal(self.price, currency),
        }
    }
}

impl From<&Product<'_>> for ProductRecord {
    fn from(product: &Product<'_>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: *product.price.amount(),
        }
    }
}

/// Wire shape of a product listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageRecord {
    /// Products on this page.
    pub items: Vec<ProductRecord>,

    /// Cursor for the next page; null when the listing is exhausted.
    pub next_cursor: Option<String>,
}

impl ProductPageRecord {
    /// Hydrate a domain page priced in the given currency.
    #[must_use]
    pub fn into_page(self, currency: &'static Currency) -> ProductPage {
        ProductPage {
            items: self
                .items
                .into_iter()
                .map(|record| record.into_product(currency))
                .collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Export shape of a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineRecord {
    /// Product id.
    pub id: i64,

    /// Product name.
    pub name: String,

    /// Unit price in major currency units.
    pub price: Decimal,

    /// Units in the line.
    pub quantity: u32,
}

impl From<&CartLine<'_>> for CartLineRecord {
    fn from(line: &CartLine<'_>) -> Self {
        Self {
            id: line.product_id(),
            name: line.name().to_string(),
            price: *line.unit_price().amount(),
            quantity: line.quantity(),
        }
    }
}

/// Body of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Ids of the products being ordered.
    pub products: Vec<i64>,
}
