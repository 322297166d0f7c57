use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod http;
mod metrics;
mod storage;

use config::{Config, StoreBackend};
use domain::customer::CustomerService;
use storage::{CustomerStore, MemoryCustomerStore, PostgresCustomerStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_service=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("🚀 Starting customer service");

    // Pick the storage backend once at startup; the service is agnostic to
    // which one it gets.
    let store: Arc<dyn CustomerStore> = match config.store_backend {
        StoreBackend::Postgres => {
            tracing::info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database_url)
                .await?;

            let store = PostgresCustomerStore::new(pool);
            store.init_schema().await?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store with sample customers");
            Arc::new(MemoryCustomerStore::seeded())
        }
    };

    let metrics = Arc::new(metrics::Metrics::new()?);
    let service = CustomerService::new(store);

    http::start_http_server(service, metrics, &config.http_addr, config.http_port).await?;

    Ok(())
}
