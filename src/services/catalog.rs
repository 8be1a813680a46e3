//! Catalogue service.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::products::Product;

/// Errors surfaced by the catalogue collaborator.
///
/// The storefront does not interpret these beyond "the fetch failed with a reason"; the message
/// is shown to the user as-is.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The fetch failed; carries the human-readable reason.
    #[error("{0}")]
    Fetch(String),
}

/// One page of catalogue products.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Products on this page.
    pub items: Vec<Product<'static>>,

    /// Cursor for the next page; `None` when the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// Remote product catalogue.
///
/// Implementations own pagination state on the server side; consumers resume a listing by
/// passing back the cursor from the previous page.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch a page of products, optionally resuming from a cursor.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogServiceError` carrying the reason the fetch failed.
    async fn fetch_products(
        &self,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<ProductPage, CatalogServiceError>;

    /// Fetch the products recommended for the storefront home screen.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogServiceError` carrying the reason the fetch failed.
    async fn fetch_recommended_products(
        &self,
    ) -> Result<Vec<Product<'static>>, CatalogServiceError>;
}
