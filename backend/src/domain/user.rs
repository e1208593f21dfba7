//! Marketplace user entity.

use super::record::{Record, ToRecord};

/// Writable user columns.
///
/// Every column is optional; nothing beyond the primary key is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Stored user with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub fields: UserFields,
}

impl User {
    /// Pair stored columns with their identifier.
    #[must_use]
    pub fn new(id: i32, fields: UserFields) -> Self {
        Self { id, fields }
    }
}

impl ToRecord for User {
    fn to_record(&self) -> Record {
        let UserFields {
            first_name,
            last_name,
            age,
            email,
            role,
            phone,
        } = self.fields.clone();
        Record::default()
            .field("id", self.id)
            .field("first_name", first_name)
            .field("last_name", last_name)
            .field("age", age)
            .field("email", email)
            .field("role", role)
            .field("phone", phone)
    }
}
