use anyhow::Result;
use async_trait::async_trait;

use crate::domain::customer::{Customer, NewCustomer};

mod memory;
mod postgres;

pub use memory::MemoryCustomerStore;
pub use postgres::PostgresCustomerStore;

// ============================================================================
// Storage Port
// ============================================================================
//
// The read/write contract the customer service depends on, independent of
// backend. The desired implementation is injected at service construction;
// any conforming store is interchangeable with no change to the service.
//
// ============================================================================

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Snapshot of all customers. Order carries no meaning but is stable
    /// within a single call.
    async fn select_all(&self) -> Result<Vec<Customer>>;

    /// `None` when no record has the id; absence is not an error here.
    async fn select_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Persist a new customer; the store assigns the identifier.
    async fn insert(&self, customer: NewCustomer) -> Result<()>;

    async fn exists_with_email(&self, email: &str) -> Result<bool>;

    async fn exists_with_id(&self, id: i64) -> Result<bool>;

    /// Removes the record if present; a no-op when absent. Existence checks
    /// are the caller's responsibility.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Full replacement of the record's mutable fields, keyed by id.
    async fn update(&self, customer: &Customer) -> Result<()>;
}
