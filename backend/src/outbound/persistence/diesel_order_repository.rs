//! SQLite-backed `OrderRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{OrderRepository, RepositoryError};
use crate::domain::{Order, OrderFields};

use super::connection::DbHandle;
use super::diesel_helpers::{expect_affected, map_diesel_error};
use super::models::{OrderRow, OrderWrite};
use super::schema::orders;

const ENTITY: &str = "order";

/// Diesel-backed implementation of the [`OrderRepository`] port.
///
/// `customer_id` and `executor_id` are stored without checking the user
/// table.
#[derive(Debug, Clone)]
pub struct DieselOrderRepository {
    db: DbHandle,
}

impl DieselOrderRepository {
    /// Create a new repository over the shared connection.
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn create(&self, fields: &OrderFields) -> Result<Order, RepositoryError> {
        let fields = fields.clone();
        self.db
            .run(move |conn| {
                diesel::insert_into(orders::table)
                    .values(OrderWrite::from(&fields))
                    .returning(OrderRow::as_returning())
                    .get_result(conn)
                    .map(Order::from)
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        self.db
            .run(|conn| {
                orders::table
                    .order(orders::id.asc())
                    .select(OrderRow::as_select())
                    .load(conn)
                    .map(|rows| rows.into_iter().map(Order::from).collect())
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn find(&self, id: i32) -> Result<Order, RepositoryError> {
        self.db
            .run(move |conn| {
                orders::table
                    .find(id)
                    .select(OrderRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(map_diesel_error)?
                    .map(Order::from)
                    .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
            })
            .await
    }

    async fn replace(&self, id: i32, fields: &OrderFields) -> Result<(), RepositoryError> {
        let fields = fields.clone();
        self.db
            .run(move |conn| {
                let affected = diesel::update(orders::table.find(id))
                    .set(OrderWrite::from(&fields))
                    .execute(conn)
                    .map_err(map_diesel_error)?;
                expect_affected(affected, ENTITY, id)
            })
            .await
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.db
            .run(move |conn| {
                let affected = diesel::delete(orders::table.find(id))
                    .execute(conn)
                    .map_err(map_diesel_error)?;
                expect_affected(affected, ENTITY, id)
            })
            .await
    }
}
