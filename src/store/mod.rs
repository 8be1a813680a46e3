//! Stores
//!
//! Injectable state containers driven by discrete UI events. Data flows one way: UI event →
//! store mutation → cart snapshot → promotion engine → priced breakdown → UI. A single
//! process-wide instance of each store is a deployment choice, not an assumption made here.

pub mod cart;
pub mod catalog;

pub use cart::{CartStore, CheckoutError};
pub use catalog::{CatalogStore, DEFAULT_PAGE_SIZE};
