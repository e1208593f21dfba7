//! Marketplace order entity.

use chrono::NaiveDate;

use super::record::{Record, ToRecord};

/// Writable order columns.
///
/// `customer_id` and `executor_id` name users but are not checked against
/// the user table; a dangling reference is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i32>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

/// Stored order with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub fields: OrderFields,
}

impl Order {
    /// Pair stored columns with their identifier.
    #[must_use]
    pub fn new(id: i32, fields: OrderFields) -> Self {
        Self { id, fields }
    }
}

impl ToRecord for Order {
    fn to_record(&self) -> Record {
        let OrderFields {
            name,
            description,
            start_date,
            end_date,
            address,
            price,
            customer_id,
            executor_id,
        } = self.fields.clone();
        Record::default()
            .field("id", self.id)
            .field("name", name)
            .field("description", description)
            .date_field("start_date", start_date)
            .date_field("end_date", end_date)
            .field("address", address)
            .field("price", price)
            .field("customer_id", customer_id)
            .field("executor_id", executor_id)
    }
}
