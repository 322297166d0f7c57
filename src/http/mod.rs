use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::domain::customer::CustomerService;
use crate::metrics::Metrics;

mod handlers;

// ============================================================================
// HTTP Boundary
// ============================================================================
//
// Thin transport layer: routes under /api/v1/customers forward to the
// customer service, plus /health and /metrics. Error-kind to status-code
// mapping lives in the handlers module.
//
// ============================================================================

/// The customer route table, shared between the server and handler tests.
pub(crate) fn customer_scope() -> actix_web::Scope {
    web::scope("/api/v1/customers")
        .route("", web::get().to(handlers::list_customers))
        .route("", web::post().to(handlers::register_customer))
        .route("/{customer_id}", web::get().to(handlers::get_customer))
        .route("/{customer_id}", web::put().to(handlers::update_customer))
        .route("/{customer_id}", web::delete().to(handlers::delete_customer))
}

pub async fn start_http_server(
    service: CustomerService,
    metrics: Arc<Metrics>,
    addr: &str,
    port: u16,
) -> std::io::Result<()> {
    tracing::info!("Starting HTTP server on http://{}:{}", addr, port);

    let service = web::Data::new(service);
    let metrics = web::Data::from(metrics);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(metrics.clone())
            .service(customer_scope())
            .route("/metrics", web::get().to(handlers::metrics_handler))
            .route("/health", web::get().to(handlers::health_handler))
    })
    .bind((addr, port))?
    .run()
    .await
}
