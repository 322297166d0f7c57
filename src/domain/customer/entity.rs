use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Entity
// ============================================================================

/// A customer record as held by the storage layer.
///
/// The identifier is assigned by the store on insert and never changes for
/// the lifetime of the record. Email is a uniqueness key enforced at write
/// time by the service, not by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// A customer that has not been persisted yet, so no identifier exists.
/// The store turns this into a `Customer` when it assigns an id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
