//! Order service.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Errors surfaced by the order collaborator.
///
/// The core does not interpret error codes: an order either succeeded or failed with a reason,
/// and the reason is surfaced verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderServiceError {
    /// The submission was refused or could not be completed; carries the reason.
    #[error("{0}")]
    Rejected(String),
}

/// Remote order API.
#[automock]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submit an order for the given product ids.
    ///
    /// # Errors
    ///
    /// Returns an `OrderServiceError` carrying the reason the submission failed.
    async fn submit_checkout(&self, product_ids: Vec<i64>) -> Result<(), OrderServiceError>;
}
