//! Port abstraction for order persistence.
use async_trait::async_trait;

use crate::domain::{Order, OrderFields};

use super::RepositoryError;

/// Storage operations for [`Order`] rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order and return it with its assigned identifier.
    async fn create(&self, fields: &OrderFields) -> Result<Order, RepositoryError>;

    /// Every stored order in storage order.
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Fetch one order; [`RepositoryError::NotFound`] when absent.
    async fn find(&self, id: i32) -> Result<Order, RepositoryError>;

    /// Overwrite every writable column of an existing order.
    async fn replace(&self, id: i32, fields: &OrderFields) -> Result<(), RepositoryError>;

    /// Remove an order; [`RepositoryError::NotFound`] when absent.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
