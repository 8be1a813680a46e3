//! Catalogue store.

use crate::{
    products::Product,
    services::catalog::{CatalogService, CatalogServiceError},
};

/// Page size used when the listing is extended via [`CatalogStore::load_more`].
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Owns the catalogue browsing state: the fetched product listing, the recommended products,
/// and the pagination cursor.
///
/// Fetch failures are kept as inline error state; previously fetched data is never discarded on
/// failure, and no retry is performed automatically.
#[derive(Debug)]
pub struct CatalogStore<C> {
    catalog: C,
    products: Vec<Product<'static>>,
    recommended: Vec<Product<'static>>,
    next_cursor: Option<String>,
    has_more: bool,
    loading: bool,
    recommend_loading: bool,
    last_error: Option<String>,
}

impl<C: CatalogService> CatalogStore<C> {
    /// Create a store with an empty listing.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            products: Vec::new(),
            recommended: Vec::new(),
            next_cursor: None,
            has_more: true,
            loading: false,
            recommend_loading: false,
            last_error: None,
        }
    }

    /// Fetch a page of products, replacing the current listing.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's `CatalogServiceError`. The reason is also recorded as inline
    /// error state, and the current listing is kept.
    #[tracing::instrument(name = "catalog.store.fetch_products", skip(self), err)]
    pub async fn fetch_products(
        &mut self,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<(), CatalogServiceError> {
        self.loading = true;
        self.last_error = None;

        let result = self.catalog.fetch_products(limit, cursor).await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.products = page.items;
                self.apply_cursor(page.next_cursor);
                Ok(())
            }
            Err(error) => Err(self.note_failure(error)),
        }
    }

    /// Fetch the next page and append it to the listing.
    ///
    /// A no-op while a fetch is in flight, when the listing is exhausted, or when no cursor is
    /// held.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's `CatalogServiceError`. The reason is also recorded as inline
    /// error state, and the current listing is kept.
    #[tracing::instrument(name = "catalog.store.load_more", skip(self), err)]
    pub async fn load_more(&mut self) -> Result<(), CatalogServiceError> {
        if self.loading || !self.has_more {
            return Ok(());
        }

        let Some(cursor) = self.next_cursor.clone() else {
            return Ok(());
        };

        self.loading = true;
        self.last_error = None;

        let result = self
            .catalog
            .fetch_products(DEFAULT_PAGE_SIZE, Some(cursor))
            .await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.products.extend(page.items);
                self.apply_cursor(page.next_cursor);
                Ok(())
            }
            Err(error) => Err(self.note_failure(error)),
        }
    }

    /// Fetch the recommended products, replacing the current list.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's `CatalogServiceError`. The reason is also recorded as inline
    /// error state, and the current list is kept.
    #[tracing::instrument(name = "catalog.store.fetch_recommended", skip(self), err)]
    pub async fn fetch_recommended(&mut self) -> Result<(), CatalogServiceError> {
        self.recommend_loading = true;
        self.last_error = None;

        let result = self.catalog.fetch_recommended_products().await;
        self.recommend_loading = false;

        match result {
            Ok(products) => {
                self.recommended = products;
                Ok(())
            }
            Err(error) => Err(self.note_failure(error)),
        }
    }

    /// Replace the product listing directly.
    pub fn set_products(&mut self, products: Vec<Product<'static>>) {
        self.products = products;
    }

    /// The fetched product listing.
    #[must_use]
    pub fn products(&self) -> &[Product<'static>] {
        &self.products
    }

    /// The recommended products.
    #[must_use]
    pub fn recommended(&self) -> &[Product<'static>] {
        &self.recommended
    }

    /// Whether more pages remain in the listing.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a listing fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a recommendation fetch is in flight.
    #[must_use]
    pub fn is_recommend_loading(&self) -> bool {
        self.recommend_loading
    }

    /// The reason the most recent fetch failed, if it did.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn apply_cursor(&mut self, next_cursor: Option<String>) {
        self.has_more = next_cursor.is_some();
        self.next_cursor = next_cursor;
    }

    fn note_failure(&mut self, error: CatalogServiceError) -> CatalogServiceError {
        self.last_error = Some(error.to_string());
        error
    }
}
