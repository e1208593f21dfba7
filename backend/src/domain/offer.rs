//! Offer entity: an executor's bid on an order.

use super::record::{Record, ToRecord};

/// Writable offer columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFields {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

/// Stored offer with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: i32,
    pub fields: OfferFields,
}

impl Offer {
    /// Pair stored columns with their identifier.
    #[must_use]
    pub fn new(id: i32, fields: OfferFields) -> Self {
        Self { id, fields }
    }
}

impl ToRecord for Offer {
    fn to_record(&self) -> Record {
        Record::default()
            .field("id", self.id)
            .field("order_id", self.fields.order_id)
            .field("executor_id", self.fields.executor_id)
    }
}
