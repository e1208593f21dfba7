//! Shared Diesel error mapping for the entity repositories.

use tracing::debug;

use crate::domain::ports::RepositoryError;

/// Map Diesel errors onto [`RepositoryError`] variants.
///
/// Missing rows are resolved by the repositories themselves, which know the
/// entity and id; a stray `NotFound` here is treated as a query failure.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        _ => RepositoryError::query("database error"),
    }
}

/// Turn an affected-row count into `NotFound` when nothing matched.
pub(crate) fn expect_affected(
    affected: usize,
    entity: &'static str,
    id: i32,
) -> Result<(), RepositoryError> {
    if affected == 0 {
        Err(RepositoryError::not_found(entity, id))
    } else {
        Ok(())
    }
}
