//! Startup seed data and the service that loads it into storage.
//!
//! The seed document lists users, orders, and offers without identifiers.
//! Order dates are written `MM/DD/YYYY` and converted to calendar dates
//! before anything touches storage, so a malformed record aborts seeding
//! without leaving a partial load behind.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::{OfferRepository, OrderRepository, RepositoryError, UserRepository};
use crate::domain::{OfferFields, OrderFields, UserFields};

/// Date layout used by order records in the seed document.
pub const SEED_DATE_FORMAT: &str = "%m/%d/%Y";

const EMBEDDED_SEED: &str = include_str!("../../fixtures/seed/raw_data.json");

/// Errors raised while preparing or applying seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed document is not valid JSON for the expected shape.
    #[error("seed document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// An order date does not follow [`SEED_DATE_FORMAT`].
    #[error("order #{index} has invalid {field} {value:?}: {source}")]
    InvalidDate {
        /// Zero-based position of the order in the seed document.
        index: usize,
        /// Column holding the bad value.
        field: &'static str,
        /// Raw text found in the document.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Storage rejected a seed record.
    #[error("seed persistence failed: {0}")]
    Persistence(#[from] RepositoryError),
}

/// User record as written in the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UserSeed> for UserFields {
    fn from(value: UserSeed) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            email: value.email,
            role: value.role,
            phone: value.phone,
        }
    }
}

/// Order record as written in the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSeed {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub customer_id: Option<i32>,
    #[serde(default)]
    pub executor_id: Option<i32>,
}

impl OrderSeed {
    fn into_fields(self, index: usize) -> Result<OrderFields, SeedError> {
        Ok(OrderFields {
            start_date: parse_seed_date(self.start_date, index, "start_date")?,
            end_date: parse_seed_date(self.end_date, index, "end_date")?,
            name: self.name,
            description: self.description,
            address: self.address,
            price: self.price,
            customer_id: self.customer_id,
            executor_id: self.executor_id,
        })
    }
}

/// Offer record as written in the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferSeed {
    #[serde(default)]
    pub order_id: Option<i32>,
    #[serde(default)]
    pub executor_id: Option<i32>,
}

impl From<OfferSeed> for OfferFields {
    fn from(value: OfferSeed) -> Self {
        Self {
            order_id: value.order_id,
            executor_id: value.executor_id,
        }
    }
}

fn parse_seed_date(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<Option<NaiveDate>, SeedError> {
    value
        .map(|text| {
            NaiveDate::parse_from_str(text.trim(), SEED_DATE_FORMAT).map_err(|source| {
                SeedError::InvalidDate {
                    index,
                    field,
                    value: text.clone(),
                    source,
                }
            })
        })
        .transpose()
}

/// Seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserSeed>,
    #[serde(default)]
    pub orders: Vec<OrderSeed>,
    #[serde(default)]
    pub offers: Vec<OfferSeed>,
}

impl SeedData {
    /// Parse a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when the JSON is malformed or carries
    /// unknown keys.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The seed document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the embedded fixture is malformed.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }
}

/// Counts of records written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Service that writes seed data through the repository ports.
#[derive(Clone)]
pub struct Seeder {
    users: Arc<dyn UserRepository>,
    orders: Arc<dyn OrderRepository>,
    offers: Arc<dyn OfferRepository>,
}

impl Seeder {
    /// Create a seeder over the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
        offers: Arc<dyn OfferRepository>,
    ) -> Self {
        Self {
            users,
            orders,
            offers,
        }
    }

    /// Insert users, then orders, then offers.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidDate`] before any write if an order date
    /// is malformed, or [`SeedError::Persistence`] when a create fails.
    pub async fn apply(&self, data: SeedData) -> Result<SeedOutcome, SeedError> {
        let SeedData {
            users,
            orders,
            offers,
        } = data;
        let orders = orders
            .into_iter()
            .enumerate()
            .map(|(index, order)| order.into_fields(index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut outcome = SeedOutcome::default();
        for user in users {
            self.users.create(&UserFields::from(user)).await?;
            outcome.users += 1;
        }
        for order in orders {
            self.orders.create(&order).await?;
            outcome.orders += 1;
        }
        for offer in offers {
            self.offers.create(&OfferFields::from(offer)).await?;
            outcome.offers += 1;
        }
        Ok(outcome)
    }
}
