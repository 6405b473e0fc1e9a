// Route exports
pub mod bookings;
pub mod fleet;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use crate::core::{BookingError, BookingOrchestrator};
use crate::models::ErrorResponse;
use crate::services::FleetStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FleetStore>,
    pub orchestrator: BookingOrchestrator,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(bookings::configure)
            .configure(fleet::configure),
    );
}

/// JSON error returned for malformed request payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path segment errors, e.g. a malformed vehicle id
pub fn handle_path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

/// Extractor configs that turn payload errors into JSON bodies
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

fn error_body(error: &str, message: String, status_code: u16) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
        status_code,
    }
}

pub(crate) fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(error_body("Validation failed", message, 400))
}

pub(crate) fn not_found(message: String) -> HttpResponse {
    HttpResponse::NotFound().json(error_body("Not found", message, 404))
}

/// Map a booking error to its HTTP response
pub(crate) fn booking_error_response(context: &str, err: BookingError) -> HttpResponse {
    match err {
        BookingError::Validation(message) => validation_failed(message),
        BookingError::Store(e) => {
            tracing::error!("{}: {}", context, e);
            HttpResponse::ServiceUnavailable().json(error_body(context, e.to_string(), 503))
        }
    }
}
