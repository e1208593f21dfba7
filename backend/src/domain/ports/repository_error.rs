//! Error type shared by the entity repository ports.

use tracing::error;

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by entity repository adapters.
    pub enum RepositoryError {
        /// The store could not be reached or its connection is unusable.
        Connection { message: String } => "repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// No row exists for the requested identifier.
        NotFound { entity: String, id: i32 } => "{entity} {id} not found",
    }
}

impl From<RepositoryError> for Error {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound { .. } => Error::not_found(value.to_string()),
            RepositoryError::Connection { message } => {
                error!(%message, "repository connection failure");
                Error::service_unavailable(message)
            }
            RepositoryError::Query { message } => {
                error!(%message, "repository query failure");
                Error::internal(message)
            }
        }
    }
}
