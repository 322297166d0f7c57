use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::customer::{Customer, NewCustomer};

use super::CustomerStore;

// ============================================================================
// PostgreSQL Customer Store
// ============================================================================
//
// Durable store on a single `customer` table. Identifiers come from the
// table's BIGSERIAL sequence. Queries are bound at runtime so no live
// database is needed to compile.
//
// ============================================================================

pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the customer table when it does not exist yet. Bootstrap for
    /// local runs; anything beyond this belongs to external tooling.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS customer (
                id    BIGSERIAL PRIMARY KEY,
                name  TEXT NOT NULL,
                email TEXT NOT NULL,
                age   INT  NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("customer table ready");
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn select_all(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, age FROM customer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    async fn select_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, age FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<()> {
        sqlx::query("INSERT INTO customer (name, email, age) VALUES ($1, $2, $3)")
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customer WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn exists_with_id(&self, id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customer WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        sqlx::query("UPDATE customer SET name = $1, email = $2, age = $3 WHERE id = $4")
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .bind(customer.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
