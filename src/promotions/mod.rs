//! Promotions

pub mod pair_discount;

pub use pair_discount::{
    CodeDiscount, ItemBreakdown, PROMOTION_CODE, PromotionResult, calculate_pair_discount_promotion,
};
