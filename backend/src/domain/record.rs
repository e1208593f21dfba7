//! Column-ordered serialisation of stored entities.
//!
//! Each entity describes itself as an explicit list of `(column, value)`
//! pairs in table order. Serialising a [`Record`] emits a JSON object whose
//! keys keep that order, which a `serde_json::Map` would not guarantee.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Text layout used for calendar dates in serialised records.
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered column/value pairs describing one stored entity.
///
/// # Examples
/// ```
/// use marketplace::domain::Record;
///
/// let record = Record::default().field("id", 1).field("role", Some("client".to_owned()));
/// let json = serde_json::to_string(&record).expect("serialise record");
/// assert_eq!(json, r#"{"id":1,"role":"client"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    /// Append a column.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Append a date column rendered as `YYYY-MM-DD` text.
    ///
    /// JSON has no date type, so dates always travel as strings. A missing
    /// date stays `null`.
    #[must_use]
    pub fn date_field(self, name: &'static str, value: Option<NaiveDate>) -> Self {
        let text = value.map(|date| date.format(RECORD_DATE_FORMAT).to_string());
        self.field(name, text)
    }

    /// Look up a column value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(column, _)| *column == name)
            .map(|(_, value)| value)
    }

    /// Column names in emission order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(column, _)| *column)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Entities that can be flattened into a [`Record`].
pub trait ToRecord {
    /// Produce the entity's columns in table order.
    fn to_record(&self) -> Record;
}
