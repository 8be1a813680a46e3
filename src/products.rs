//! Products

use rusty_money::{Money, iso::Currency};

/// A catalogue product.
///
/// Owned by the catalogue collaborator; the cart only reads it. Ids are externally assigned, and
/// ids of zero or below are placeholders that never reach an order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: i64,

    /// Product name
    pub name: String,

    /// Product unit price
    pub price: Money<'a, Currency>,
}
