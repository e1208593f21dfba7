//! Port abstraction for user persistence.
use async_trait::async_trait;

use crate::domain::{User, UserFields};

use super::RepositoryError;

/// Storage operations for [`User`] rows.
///
/// Every write commits on its own; no call spans several entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned identifier.
    async fn create(&self, fields: &UserFields) -> Result<User, RepositoryError>;

    /// Every stored user in storage order.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch one user; [`RepositoryError::NotFound`] when absent.
    async fn find(&self, id: i32) -> Result<User, RepositoryError>;

    /// Overwrite every writable column of an existing user.
    async fn replace(&self, id: i32, fields: &UserFields) -> Result<(), RepositoryError>;

    /// Remove a user; [`RepositoryError::NotFound`] when absent.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
