//! Cart store.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    cart::{Cart, CartError, CartLine},
    products::Product,
    promotions::pair_discount::{PromotionResult, calculate_pair_discount_promotion},
    services::orders::{OrderService, OrderServiceError},
};

/// Errors surfaced by [`CartStore::checkout`].
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with no lines in the cart. Recovered locally; the order
    /// collaborator is never called.
    #[error("cart is empty")]
    EmptyCart,

    /// The order collaborator refused the submission. Carries the collaborator's reason
    /// verbatim; the cart is left untouched so the user can retry.
    #[error(transparent)]
    Order(#[from] OrderServiceError),
}

/// Owns the cart and coordinates checkout with the order collaborator.
///
/// Mutations apply in call order on one logical thread of control; the only suspension point is
/// [`CartStore::checkout`]. All derived queries recompute from the current cart and cache
/// nothing.
#[derive(Debug)]
pub struct CartStore<'a, O> {
    cart: Cart<'a>,
    orders: O,
    checkout_in_flight: bool,
}

impl<'a, O: OrderService> CartStore<'a, O> {
    /// Create a store with an empty cart priced in the given currency.
    pub fn new(orders: O, currency: &'static Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            orders,
            checkout_in_flight: false,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::CurrencyMismatch` if the product is priced in a different currency
    /// to the cart.
    pub fn add_to_cart(&mut self, product: &Product<'a>) -> Result<(), CartError> {
        self.cart.add(product)
    }

    /// Set the quantity of an existing line; zero removes the line.
    pub fn update_quantity(&mut self, product_id: i64, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Remove the line for a product, if present.
    pub fn remove_from_cart(&mut self, product_id: i64) {
        self.cart.remove(product_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Get the cart line for a product, if present.
    #[must_use]
    pub fn cart_item(&self, product_id: i64) -> Option<&CartLine<'a>> {
        self.cart.line(product_id)
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn cart_items_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Pre-discount cart total.
    #[must_use]
    pub fn cart_total(&self) -> Money<'a, Currency> {
        self.cart.total_price()
    }

    /// Priced breakdown of the current cart under the pair discount promotion, with an
    /// optional promotion code.
    #[must_use]
    pub fn promotion_details(&self, code: Option<&str>) -> PromotionResult<'a> {
        calculate_pair_discount_promotion(&self.cart, code)
    }

    /// Whether a checkout call is outstanding, for disabling re-entrant checkout triggers in
    /// the UI.
    #[must_use]
    pub fn is_checking_out(&self) -> bool {
        self.checkout_in_flight
    }

    /// Submit the cart as an order.
    ///
    /// Placeholder ids (zero or below) are filtered out of the submission. On success the cart
    /// is cleared; on failure it is preserved for retry. Overlapping calls are excluded by the
    /// `&mut self` receiver rather than a lock; the busy flag only feeds the UI.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines; the collaborator is not called.
    /// - [`CheckoutError::Order`]: the collaborator failed; carries its reason verbatim.
    #[tracing::instrument(
        name = "cart.store.checkout",
        skip(self),
        fields(lines = self.cart.len(), items = self.cart.item_count()),
        err
    )]
    pub async fn checkout(&mut self) -> Result<(), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let product_ids: Vec<i64> = self
            .cart
            .iter()
            .map(CartLine::product_id)
            .filter(|id| *id > 0)
            .collect();

        self.checkout_in_flight = true;
        let result = self.orders.submit_checkout(product_ids).await;
        self.checkout_in_flight = false;

        result?;

        let items = self.cart.item_count();
        self.cart.clear();

        info!(items, "order submitted");

        Ok(())
    }
}
