use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use prometheus::{Encoder, TextEncoder};

use crate::domain::customer::{
    CustomerError, CustomerService, RegistrationRequest, UpdateRequest,
};
use crate::metrics::Metrics;

// ============================================================================
// Route Handlers
// ============================================================================

/// Boundary-owned mapping from error kind to transport status. The service
/// itself knows nothing about HTTP.
impl ResponseError for CustomerError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomerError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomerError::EmailTaken => StatusCode::CONFLICT,
            CustomerError::NoChanges => StatusCode::BAD_REQUEST,
            CustomerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            CustomerError::Storage(e) => {
                tracing::error!("storage failure: {e:#}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

pub async fn list_customers(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, CustomerError> {
    let result = service.all_customers().await;
    metrics.record_request("list", result.is_ok());
    Ok(HttpResponse::Ok().json(result?))
}

pub async fn get_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CustomerError> {
    let result = service.customer(path.into_inner()).await;
    metrics.record_request("get", result.is_ok());
    Ok(HttpResponse::Ok().json(result?))
}

pub async fn register_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    request: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, CustomerError> {
    let result = service.register(request.into_inner()).await;
    metrics.record_request("register", result.is_ok());
    result?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn update_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
    request: web::Json<UpdateRequest>,
) -> Result<HttpResponse, CustomerError> {
    let result = service.update(path.into_inner(), request.into_inner()).await;
    metrics.record_request("update", result.is_ok());
    result?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn delete_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CustomerError> {
    let result = service.delete_by_id(path.into_inner()).await;
    metrics.record_request("delete", result.is_ok());
    result?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn metrics_handler(metrics: web::Data<Metrics>) -> Result<HttpResponse, CustomerError> {
    let encoder = TextEncoder::new();
    let metric_families = metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(anyhow::Error::from)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "customer-service"
    }))
}
