//! SQLite-backed `OfferRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{OfferRepository, RepositoryError};
use crate::domain::{Offer, OfferFields};

use super::connection::DbHandle;
use super::diesel_helpers::{expect_affected, map_diesel_error};
use super::models::{OfferRow, OfferWrite};
use super::schema::offers;

const ENTITY: &str = "offer";

/// Diesel-backed implementation of the [`OfferRepository`] port.
#[derive(Debug, Clone)]
pub struct DieselOfferRepository {
    db: DbHandle,
}

impl DieselOfferRepository {
    /// Create a new repository over the shared connection.
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfferRepository for DieselOfferRepository {
    async fn create(&self, fields: &OfferFields) -> Result<Offer, RepositoryError> {
        let row = OfferWrite::from(fields);
        self.db
            .run(move |conn| {
                diesel::insert_into(offers::table)
                    .values(row)
                    .returning(OfferRow::as_returning())
                    .get_result(conn)
                    .map(Offer::from)
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn list(&self) -> Result<Vec<Offer>, RepositoryError> {
        self.db
            .run(|conn| {
                offers::table
                    .order(offers::id.asc())
                    .select(OfferRow::as_select())
                    .load(conn)
                    .map(|rows| rows.into_iter().map(Offer::from).collect())
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn find(&self, id: i32) -> Result<Offer, RepositoryError> {
        self.db
            .run(move |conn| {
                offers::table
                    .find(id)
                    .select(OfferRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(map_diesel_error)?
                    .map(Offer::from)
                    .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
            })
            .await
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.db
            .run(move |conn| {
                let affected = diesel::delete(offers::table.find(id))
                    .execute(conn)
                    .map_err(map_diesel_error)?;
                expect_affected(affected, ENTITY, id)
            })
            .await
    }
}
