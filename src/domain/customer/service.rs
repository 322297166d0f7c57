use std::sync::Arc;

use crate::storage::CustomerStore;

use super::entity::{Customer, NewCustomer};
use super::errors::CustomerError;
use super::requests::{RegistrationRequest, UpdateRequest};

// ============================================================================
// Customer Service - Business Logic
// ============================================================================
//
// Stateless request handler between the HTTP boundary and the storage port.
// All uniqueness and change-detection rules live here; the store is a dumb
// read/write collaborator injected at construction.
//
// The check-then-act sequences (exists-then-delete, exists-then-insert) are
// not transactional. Two concurrent racers can produce a duplicate email or
// a not-found on the second delete. Accepted limitation under the
// single-process, low-concurrency assumption this service runs with.
//
// ============================================================================

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// All customers, unfiltered and untransformed.
    pub async fn all_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.store.select_all().await?)
    }

    /// A single customer by id. Also the lookup primitive update() builds on.
    pub async fn customer(&self, id: i64) -> Result<Customer, CustomerError> {
        self.store
            .select_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Register a new customer. Email is the only uniqueness key; the store
    /// assigns the identifier.
    pub async fn register(&self, request: RegistrationRequest) -> Result<(), CustomerError> {
        if self.store.exists_with_email(&request.email).await? {
            return Err(CustomerError::EmailTaken);
        }

        tracing::info!(email = %request.email, "registering customer");
        self.store
            .insert(NewCustomer::new(request.name, request.email, request.age))
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), CustomerError> {
        if !self.store.exists_with_id(id).await? {
            return Err(CustomerError::NotFound(id));
        }

        tracing::info!(id, "deleting customer");
        self.store.delete_by_id(id).await?;
        Ok(())
    }

    /// Apply a partial update to an existing customer.
    ///
    /// Each present field that differs from the stored value is applied to a
    /// working copy; a single changed field is enough to proceed. Comparison
    /// is exact value equality. A changed email is checked for uniqueness
    /// before being applied; on conflict the whole update is discarded, so
    /// name/age edits made earlier in the same call never reach the store.
    /// A request where nothing ends up changed is rejected wholesale.
    pub async fn update(&self, id: i64, request: UpdateRequest) -> Result<(), CustomerError> {
        let mut customer = self.customer(id).await?;

        let mut changed = false;

        if let Some(name) = request.name {
            if name != customer.name {
                customer.name = name;
                changed = true;
            }
        }

        if let Some(age) = request.age {
            if age != customer.age {
                customer.age = age;
                changed = true;
            }
        }

        if let Some(email) = request.email {
            if email != customer.email {
                if self.store.exists_with_email(&email).await? {
                    return Err(CustomerError::EmailTaken);
                }
                customer.email = email;
                changed = true;
            }
        }

        if !changed {
            return Err(CustomerError::NoChanges);
        }

        tracing::info!(id, "updating customer");
        self.store.update(&customer).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCustomerStore;

    fn service_with_seed() -> CustomerService {
        CustomerService::new(Arc::new(MemoryCustomerStore::seeded()))
    }

    #[tokio::test]
    async fn test_get_absent_customer_is_not_found() {
        let service = service_with_seed();

        let result = service.customer(99).await;
        assert!(matches!(result.unwrap_err(), CustomerError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_delete_absent_customer_is_not_found() {
        let service = service_with_seed();

        let result = service.delete_by_id(99).await;
        assert!(matches!(result.unwrap_err(), CustomerError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_register_then_get_round_trip() {
        let service = service_with_seed();

        service
            .register(RegistrationRequest {
                name: "Bo".to_string(),
                email: "bo@gmail.com".to_string(),
                age: 30,
            })
            .await
            .unwrap();

        // Seeded store holds ids 1 and 2, so the new record lands on 3
        let bo = service.customer(3).await.unwrap();
        assert_eq!(bo.name, "Bo");
        assert_eq!(bo.email, "bo@gmail.com");
        assert_eq!(bo.age, 30);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict() {
        let service = service_with_seed();

        let result = service
            .register(RegistrationRequest {
                name: "Bo".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 30,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CustomerError::EmailTaken));
        // Storage is unchanged: no new record was inserted
        assert_eq!(service.all_customers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_rejected() {
        let service = service_with_seed();

        let result = service.update(1, UpdateRequest::default()).await;
        assert!(matches!(result.unwrap_err(), CustomerError::NoChanges));
    }

    #[tokio::test]
    async fn test_update_with_identical_values_is_rejected() {
        let service = service_with_seed();

        let result = service
            .update(
                1,
                UpdateRequest {
                    name: Some("Alex".to_string()),
                    email: Some("alex@gmail.com".to_string()),
                    age: Some(21),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), CustomerError::NoChanges));
        // Storage is unchanged
        let alex = service.customer(1).await.unwrap();
        assert_eq!(alex.age, 21);
    }

    #[tokio::test]
    async fn test_update_single_changed_field_is_enough() {
        let service = service_with_seed();

        // Name and email equal the stored values; only age differs
        service
            .update(
                1,
                UpdateRequest {
                    name: Some("Alex".to_string()),
                    email: Some("alex@gmail.com".to_string()),
                    age: Some(22),
                },
            )
            .await
            .unwrap();

        let alex = service.customer(1).await.unwrap();
        assert_eq!(alex.age, 22);
        assert_eq!(alex.name, "Alex");
        assert_eq!(alex.email, "alex@gmail.com");
    }

    #[tokio::test]
    async fn test_update_absent_customer_is_not_found() {
        let service = service_with_seed();

        let result = service
            .update(
                99,
                UpdateRequest {
                    age: Some(50),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), CustomerError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_update_email_conflict_discards_other_changes() {
        let service = service_with_seed();

        // Name would change, but the new email belongs to Jamila
        let result = service
            .update(
                1,
                UpdateRequest {
                    name: Some("Alexander".to_string()),
                    email: Some("jamila@gmail.com".to_string()),
                    age: Some(22),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), CustomerError::EmailTaken));

        // Nothing was partially applied
        let alex = service.customer(1).await.unwrap();
        assert_eq!(alex.name, "Alex");
        assert_eq!(alex.email, "alex@gmail.com");
        assert_eq!(alex.age, 21);
    }

    #[tokio::test]
    async fn test_update_to_unused_email_succeeds() {
        let service = service_with_seed();

        service
            .update(
                1,
                UpdateRequest {
                    email: Some("alexander@gmail.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let alex = service.customer(1).await.unwrap();
        assert_eq!(alex.email, "alexander@gmail.com");
    }

    #[tokio::test]
    async fn test_change_detection_is_exact_equality() {
        let service = service_with_seed();

        // Case differs, so this counts as a change, not a no-op
        service
            .update(
                1,
                UpdateRequest {
                    name: Some("ALEX".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(service.customer(1).await.unwrap().name, "ALEX");
    }

    #[tokio::test]
    async fn test_full_lifecycle_scenario() {
        let service = CustomerService::new(Arc::new(MemoryCustomerStore::new()));

        service
            .register(RegistrationRequest {
                name: "Alex".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 21,
            })
            .await
            .unwrap();

        // Duplicate email is rejected
        let conflict = service
            .register(RegistrationRequest {
                name: "Bo".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 30,
            })
            .await;
        assert!(matches!(conflict.unwrap_err(), CustomerError::EmailTaken));

        // Age-only update goes through
        service
            .update(
                1,
                UpdateRequest {
                    age: Some(22),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            service.customer(1).await.unwrap(),
            Customer {
                id: 1,
                name: "Alex".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 22,
            }
        );

        // Delete, then the record is gone
        service.delete_by_id(1).await.unwrap();
        let gone = service.customer(1).await;
        assert!(matches!(gone.unwrap_err(), CustomerError::NotFound(1)));
    }
}
