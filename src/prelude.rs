//! Freshcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    products::Product,
    promotions::pair_discount::{
        CodeDiscount, ItemBreakdown, PROMOTION_CODE, PromotionResult,
        calculate_pair_discount_promotion,
    },
    services::{
        CatalogService, CatalogServiceError, OrderService, OrderServiceError, ProductPage,
        records::{CartLineRecord, CheckoutRequest, ProductPageRecord, ProductRecord},
    },
    store::{CartStore, CatalogStore, CheckoutError, DEFAULT_PAGE_SIZE},
};
