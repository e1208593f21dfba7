//! Port abstraction for offer persistence.
use async_trait::async_trait;

use crate::domain::{Offer, OfferFields};

use super::RepositoryError;

/// Storage operations for [`Offer`] rows.
///
/// Offers have no replace operation: the only update the API accepts names a
/// column the table does not have.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Insert an offer and return it with its assigned identifier.
    async fn create(&self, fields: &OfferFields) -> Result<Offer, RepositoryError>;

    /// Every stored offer in storage order.
    async fn list(&self) -> Result<Vec<Offer>, RepositoryError>;

    /// Fetch one offer; [`RepositoryError::NotFound`] when absent.
    async fn find(&self, id: i32) -> Result<Offer, RepositoryError>;

    /// Remove an offer; [`RepositoryError::NotFound`] when absent.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
