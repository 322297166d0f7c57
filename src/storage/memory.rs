use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::customer::{Customer, NewCustomer};

use super::CustomerStore;

// ============================================================================
// In-Memory Customer Store
// ============================================================================
//
// Volatile store backing tests and database-free demo runs. Identifiers come
// from a monotonic counter; nothing survives process exit.
//
// Note: the original test double this replaces had an update() that appended
// a new record instead of replacing the existing one. That behavior is fixed
// here: update() replaces in place, which is what the service contract and
// its tests rely on.
//
// ============================================================================

struct Inner {
    customers: Vec<Customer>,
    next_id: i64,
}

pub struct MemoryCustomerStore {
    inner: RwLock<Inner>,
}

impl MemoryCustomerStore {
    /// An empty store, for tests that want full control over contents.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                customers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store pre-populated with two sample customers, for demo runs.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(Inner {
                customers: vec![
                    Customer {
                        id: 1,
                        name: "Alex".to_string(),
                        email: "alex@gmail.com".to_string(),
                        age: 21,
                    },
                    Customer {
                        id: 2,
                        name: "Jamila".to_string(),
                        email: "jamila@gmail.com".to_string(),
                        age: 19,
                    },
                ],
                next_id: 3,
            }),
        }
    }
}

impl Default for MemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn select_all(&self) -> Result<Vec<Customer>> {
        Ok(self.inner.read().await.customers.clone())
    }

    async fn select_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, customer: NewCustomer) -> Result<()> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.customers.push(customer.with_id(id));
        Ok(())
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().any(|c| c.email == email))
    }

    async fn exists_with_id(&self, id: i64) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.customers.retain(|c| c.id != id);
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer.clone();
        }
        Ok(())
    }
}
