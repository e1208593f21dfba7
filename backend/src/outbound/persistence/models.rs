//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each table has a read row and a borrowed
//! write struct shared by inserts and full-replace updates.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Offer, OfferFields, Order, OrderFields, User, UserFields};

use super::schema::{offers, orders, users};

/// Row struct for reading from the user table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            row.id,
            UserFields {
                first_name: row.first_name,
                last_name: row.last_name,
                age: row.age,
                email: row.email,
                role: row.role,
                phone: row.phone,
            },
        )
    }
}

/// Column values written by user inserts and replacements.
///
/// `None` is written as SQL `NULL` in both cases.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserWrite<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub age: Option<i32>,
    pub email: Option<&'a str>,
    pub role: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl<'a> From<&'a UserFields> for UserWrite<'a> {
    fn from(fields: &'a UserFields) -> Self {
        Self {
            first_name: fields.first_name.as_deref(),
            last_name: fields.last_name.as_deref(),
            age: fields.age,
            email: fields.email.as_deref(),
            role: fields.role.as_deref(),
            phone: fields.phone.as_deref(),
        }
    }
}

/// Row struct for reading from the order table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OrderRow {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i32>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::new(
            row.id,
            OrderFields {
                name: row.name,
                description: row.description,
                start_date: row.start_date,
                end_date: row.end_date,
                address: row.address,
                price: row.price,
                customer_id: row.customer_id,
                executor_id: row.executor_id,
            },
        )
    }
}

/// Column values written by order inserts and replacements.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct OrderWrite<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<&'a str>,
    pub price: Option<i32>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl<'a> From<&'a OrderFields> for OrderWrite<'a> {
    fn from(fields: &'a OrderFields) -> Self {
        Self {
            name: fields.name.as_deref(),
            description: fields.description.as_deref(),
            start_date: fields.start_date,
            end_date: fields.end_date,
            address: fields.address.as_deref(),
            price: fields.price,
            customer_id: fields.customer_id,
            executor_id: fields.executor_id,
        }
    }
}

/// Row struct for reading from the offer table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OfferRow {
    pub id: i32,
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Offer::new(
            row.id,
            OfferFields {
                order_id: row.order_id,
                executor_id: row.executor_id,
            },
        )
    }
}

/// Column values written by offer inserts.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = offers)]
pub(crate) struct OfferWrite {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<&OfferFields> for OfferWrite {
    fn from(fields: &OfferFields) -> Self {
        Self {
            order_id: fields.order_id,
            executor_id: fields.executor_id,
        }
    }
}
