//! Pair Discount
//!
//! Buy two of the same product, get 5% off the pair price. Every full pair in a line qualifies
//! independently; an odd unit stays at full price.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::cart::Cart;

/// The promotion code recognised at checkout.
pub const PROMOTION_CODE: &str = "freshket555";

/// Flat amount, in whole currency units, deducted when [`PROMOTION_CODE`] is supplied.
const CODE_DEDUCTION_MAJOR: i64 = 555;

/// Fraction of a pair's combined price taken off for each full pair.
fn pair_discount_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Per-line breakdown of the pair discount calculation.
///
/// Derived on demand from a cart snapshot, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBreakdown<'a> {
    /// Product id of the line.
    pub product_id: i64,

    /// Product name of the line.
    pub name: String,

    /// Unit price of the line.
    pub unit_price: Money<'a, Currency>,

    /// Units in the line.
    pub quantity: u32,

    /// Full pairs that qualified for the discount.
    pub pairs: u32,

    /// Units left over after pairing.
    pub remaining_units: u32,

    /// Discount taken off each full pair.
    pub discount_per_pair: Money<'a, Currency>,

    /// Total discount for the line.
    pub line_discount: Money<'a, Currency>,

    /// Line subtotal before the discount.
    pub subtotal_before_discount: Money<'a, Currency>,

    /// Line subtotal after the discount.
    pub subtotal_after_discount: Money<'a, Currency>,
}

/// Flat deduction applied because a recognised promotion code was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeDiscount<'a> {
    /// Amount deducted from the final total.
    pub amount: Money<'a, Currency>,

    /// Final total as it stood before the code deduction.
    pub total_before_code: Money<'a, Currency>,
}

/// Priced breakdown of a cart under the pair discount promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionResult<'a> {
    /// Sum of all pre-discount line subtotals.
    pub subtotal: Money<'a, Currency>,

    /// Sum of all line discounts.
    pub total_discount: Money<'a, Currency>,

    /// Amount payable: subtotal minus discounts, minus any code deduction.
    pub final_total: Money<'a, Currency>,

    /// Code deduction metadata, present only when a recognised code was supplied for a
    /// non-empty cart.
    pub code_discount: Option<CodeDiscount<'a>>,

    /// Per-line breakdowns, in cart order.
    pub item_breakdown: Vec<ItemBreakdown<'a>>,
}

/// Calculates the pair discount promotion over a cart snapshot.
///
/// Pure and total: no side effects, no dependence on time or external state, and defined for
/// every cart and every code string, so there is no error channel. All arithmetic is exact
/// decimal arithmetic; rounding belongs to the presentation layer.
///
/// The flat code deduction is applied exactly once to the aggregate total, never per line.
#[must_use]
pub fn calculate_pair_discount_promotion<'a>(
    cart: &Cart<'a>,
    code: Option<&str>,
) -> PromotionResult<'a> {
    let currency = cart.currency();
    let rate = pair_discount_rate();

    let mut subtotal = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut item_breakdown = Vec::with_capacity(cart.len());

    for line in cart.iter() {
        let unit_price = *line.unit_price().amount();
        let quantity = line.quantity();

        let pairs = quantity / 2;
        let remaining_units = quantity % 2;

        let discount_per_pair = unit_price * Decimal::TWO * rate;
        let line_discount = Decimal::from(pairs) * discount_per_pair;

        let subtotal_before_discount = unit_price * Decimal::from(quantity);
        let subtotal_after_discount = subtotal_before_discount - line_discount;

        subtotal += subtotal_before_discount;
        total_discount += line_discount;

        item_breakdown.push(ItemBreakdown {
            product_id: line.product_id(),
            name: line.name().to_string(),
            unit_price: line.unit_price(),
            quantity,
            pairs,
            remaining_units,
            discount_per_pair: Money::from_decimal(discount_per_pair, currency),
            line_discount: Money::from_decimal(line_discount, currency),
            subtotal_before_discount: Money::from_decimal(subtotal_before_discount, currency),
            subtotal_after_discount: Money::from_decimal(subtotal_after_discount, currency),
        });
    }

    let mut final_total = subtotal - total_discount;

    let code_discount = match code {
        Some(PROMOTION_CODE) if !cart.is_empty() => {
            let total_before_code = final_total;
            final_total -= Decimal::from(CODE_DEDUCTION_MAJOR);

            Some(CodeDiscount {
                amount: Money::from_major(CODE_DEDUCTION_MAJOR, currency),
                total_before_code: Money::from_decimal(total_before_code, currency),
            })
        }
        _ => None,
    };

    PromotionResult {
        subtotal: Money::from_decimal(subtotal, currency),
        total_discount: Money::from_decimal(total_discount, currency),
        final_total: Money::from_decimal(final_total, currency),
        code_discount,
        item_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::THB;

    use crate::products::Product;

    use super::*;

    fn product(id: i64, name: &str, price_minor: i64) -> Product<'static> {
        Product {
            id,
            name: name.to_string(),
            price: Money::from_minor(price_minor, THB),
        }
    }

    fn cart_of(entries: &[(Product<'static>, u32)]) -> Cart<'static> {
        let mut cart = Cart::new(THB);

        for (product, quantity) in entries {
            if cart.add(product).is_ok() {
                cart.update_quantity(product.id, *quantity);
            }
        }

        cart
    }

    #[test]
    fn empty_cart_produces_zero_totals() {
        let cart = Cart::new(THB);

        let result = calculate_pair_discount_promotion(&cart, None);

        assert_eq!(result.subtotal, Money::from_minor(0, THB));
        assert_eq!(result.total_discount, Money::from_minor(0, THB));
        assert_eq!(result.final_total, Money::from_minor(0, THB));
        assert!(result.code_discount.is_none());
        assert!(result.item_breakdown.is_empty());
    }

    #[test]
    fn three_units_discount_one_pair() {
        let cart = cart_of(&[(product(1, "Apple", 10_00), 3)]);

        let result = calculate_pair_discount_promotion(&cart, None);

        let breakdown = result
            .item_breakdown
            .first()
            .expect("expected a breakdown line");

        assert_eq!(breakdown.pairs, 1);
        assert_eq!(breakdown.remaining_units, 1);
        assert_eq!(breakdown.discount_per_pair, Money::from_minor(1_00, THB));
        assert_eq!(breakdown.line_discount, Money::from_minor(1_00, THB));
        assert_eq!(
            breakdown.subtotal_before_discount,
            Money::from_minor(30_00, THB)
        );
        assert_eq!(
            breakdown.subtotal_after_discount,
            Money::from_minor(29_00, THB)
        );

        assert_eq!(result.subtotal, Money::from_minor(30_00, THB));
        assert_eq!(result.total_discount, Money::from_minor(1_00, THB));
        assert_eq!(result.final_total, Money::from_minor(29_00, THB));
    }

    #[test]
    fn single_unit_gets_no_discount() {
        let cart = cart_of(&[(product(1, "Apple", 10_00), 1)]);

        let result = calculate_pair_discount_promotion(&cart, None);

        assert_eq!(result.total_discount, Money::from_minor(0, THB));
        assert_eq!(result.final_total, Money::from_minor(10_00, THB));
    }

    #[test]
    fn lines_are_discounted_independently_then_aggregated() {
        let cart = cart_of(&[
            (product(1, "Apple", 10_00), 4),
            (product(2, "Banana", 5_00), 1),
        ]);

        let result = calculate_pair_discount_promotion(&cart, None);

        let apple = result
            .item_breakdown
            .iter()
            .find(|line| line.product_id == 1)
            .expect("expected a breakdown line for product 1");

        assert_eq!(apple.pairs, 2);
        assert_eq!(apple.line_discount, Money::from_minor(2_00, THB));
        assert_eq!(apple.subtotal_after_discount, Money::from_minor(38_00, THB));

        let banana = result
            .item_breakdown
            .iter()
            .find(|line| line.product_id == 2)
            .expect("expected a breakdown line for product 2");

        assert_eq!(banana.pairs, 0);
        assert_eq!(banana.line_discount, Money::from_minor(0, THB));

        assert_eq!(result.subtotal, Money::from_minor(45_00, THB));
        assert_eq!(result.total_discount, Money::from_minor(2_00, THB));
        assert_eq!(result.final_total, Money::from_minor(43_00, THB));
    }

    #[test]
    fn discount_arithmetic_is_exact_below_minor_units() {
        // 10.33 a unit: 5% off the 20.66 pair price is 1.033, which has no exact
        // minor-unit representation.
        let cart = cart_of(&[(product(1, "Salmon", 10_33), 2)]);

        let result = calculate_pair_discount_promotion(&cart, None);

        assert_eq!(
            result.total_discount,
            Money::from_decimal(Decimal::new(1_033, 3), THB)
        );
        assert_eq!(
            result.final_total,
            Money::from_decimal(Decimal::new(19_627, 3), THB)
        );
    }

    #[test]
    fn recognised_code_deducts_flat_amount_once() {
        let cart = cart_of(&[
            (product(1, "Prawns", 400_00), 2),
            (product(2, "Rice", 300_00), 1),
        ]);

        let result = calculate_pair_discount_promotion(&cart, Some(PROMOTION_CODE));

        // 1100 subtotal, 40 pair discount, then 555 off the aggregate exactly once.
        assert_eq!(result.subtotal, Money::from_minor(1100_00, THB));
        assert_eq!(result.total_discount, Money::from_minor(40_00, THB));
        assert_eq!(result.final_total, Money::from_minor(505_00, THB));

        let code = result
            .code_discount
            .expect("expected code discount metadata");

        assert_eq!(code.amount, Money::from_major(555, THB));
        assert_eq!(code.total_before_code, Money::from_minor(1060_00, THB));
    }

    #[test]
    fn unrecognised_code_deducts_nothing() {
        let cart = cart_of(&[(product(1, "Apple", 10_00), 3)]);

        let result = calculate_pair_discount_promotion(&cart, Some("freshket999"));

        assert_eq!(result.final_total, Money::from_minor(29_00, THB));
        assert!(result.code_discount.is_none());
    }

    #[test]
    fn empty_code_deducts_nothing() {
        let cart = cart_of(&[(product(1, "Apple", 10_00), 3)]);

        let result = calculate_pair_discount_promotion(&cart, Some(""));

        assert_eq!(result.final_total, Money::from_minor(29_00, THB));
        assert!(result.code_discount.is_none());
    }

    #[test]
    fn code_on_empty_cart_deducts_nothing() {
        let cart = Cart::new(THB);

        let result = calculate_pair_discount_promotion(&cart, Some(PROMOTION_CODE));

        assert_eq!(result.final_total, Money::from_minor(0, THB));
        assert!(result.code_discount.is_none());
    }

    #[test]
    fn code_deduction_is_not_clamped() {
        // A cart cheaper than the deduction goes negative; clamping for display is a
        // presentation concern.
        let cart = cart_of(&[(product(1, "Apple", 100_00), 1)]);

        let result = calculate_pair_discount_promotion(&cart, Some(PROMOTION_CODE));

        assert_eq!(result.final_total, Money::from_major(-455, THB));
    }

    #[test]
    fn subtotal_after_discount_is_never_negative_without_code() {
        let cart = cart_of(&[(product(1, "Apple", 0), 6), (product(2, "Banana", 1), 7)]);

        let result = calculate_pair_discount_promotion(&cart, None);

        for line in &result.item_breakdown {
            assert!(
                !line.subtotal_after_discount.is_negative(),
                "line {} went negative",
                line.product_id
            );
        }
    }
}
