//! Cart

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::products::Product;

/// Errors related to cart mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product id, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(i64, &'static str, &'static str),
}

/// A single cart line: one product and the quantity of it being bought.
///
/// A line is only present while its quantity is above zero; a line reaching zero is removed,
/// never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product_id: i64,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    fn new(product: &Product<'a>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Returns the product id of the line.
    #[must_use]
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Returns the product name of the line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the line.
    #[must_use]
    pub fn unit_price(&self) -> Money<'a, Currency> {
        self.unit_price
    }

    /// Returns the quantity of the line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the pre-discount subtotal of the line.
    #[must_use]
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_decimal(
            self.unit_price.amount() * Decimal::from(self.quantity),
            self.unit_price.currency(),
        )
    }
}

/// The in-memory shopping cart: an ordered sequence of lines with at most one line per
/// product id.
///
/// Lines keep their insertion order; re-adding an existing product bumps its quantity in place
/// without reordering. The cart is the single source of truth for its contents and is mutated
/// only through its operations.
#[derive(Debug)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// An existing line for the product has its quantity incremented; otherwise a new line with
    /// quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::CurrencyMismatch` if the product is priced in a different currency
    /// to the cart. Products fetched from a single catalogue share the cart currency, so for
    /// those this never fails.
    pub fn add(&mut self, product: &Product<'a>) -> Result<(), CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }

        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line entirely, equivalent to [`Cart::remove`]. A positive
    /// quantity for a product with no line is a no-op: only [`Cart::add`] creates lines.
    pub fn update_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the line for a product, if present.
    #[must_use]
    pub fn line(&self, product_id: i64) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Iterate over the lines in the cart, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Pre-discount total of the cart: the sum of unit price times quantity over every line.
    #[must_use]
    pub fn total_price(&self) -> Money<'a, Currency> {
        let total: Decimal = self
            .lines
            .iter()
            .map(|line| line.unit_price.amount() * Decimal::from(line.quantity))
            .sum();

        Money::from_decimal(total, self.currency)
    }

    fn line_mut(&mut self, product_id: i64) -> Option<&mut CartLine<'a>> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
