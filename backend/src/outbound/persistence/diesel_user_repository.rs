//! SQLite-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{User, UserFields};

use super::connection::DbHandle;
use super::diesel_helpers::{expect_affected, map_diesel_error};
use super::models::{UserRow, UserWrite};
use super::schema::users;

const ENTITY: &str = "user";

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Debug, Clone)]
pub struct DieselUserRepository {
    db: DbHandle,
}

impl DieselUserRepository {
    /// Create a new repository over the shared connection.
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, fields: &UserFields) -> Result<User, RepositoryError> {
        let fields = fields.clone();
        self.db
            .run(move |conn| {
                diesel::insert_into(users::table)
                    .values(UserWrite::from(&fields))
                    .returning(UserRow::as_returning())
                    .get_result(conn)
                    .map(User::from)
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.db
            .run(|conn| {
                users::table
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load(conn)
                    .map(|rows| rows.into_iter().map(User::from).collect())
                    .map_err(map_diesel_error)
            })
            .await
    }

    async fn find(&self, id: i32) -> Result<User, RepositoryError> {
        self.db
            .run(move |conn| {
                users::table
                    .find(id)
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(map_diesel_error)?
                    .map(User::from)
                    .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
            })
            .await
    }

    async fn replace(&self, id: i32, fields: &UserFields) -> Result<(), RepositoryError> {
        let fields = fields.clone();
        self.db
            .run(move |conn| {
                let affected = diesel::update(users::table.find(id))
                    .set(UserWrite::from(&fields))
                    .execute(conn)
                    .map_err(map_diesel_error)?;
                expect_affected(affected, ENTITY, id)
            })
            .await
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.db
            .run(move |conn| {
                let affected = diesel::delete(users::table.find(id))
                    .execute(conn)
                    .map_err(map_diesel_error)?;
                expect_affected(affected, ENTITY, id)
            })
            .await
    }
}
