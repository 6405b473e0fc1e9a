use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{ReleaseOutcome, ReserveOutcome};
use crate::models::{
    BookingRequest, HealthResponse, ReleaseRequest, ReleaseResponse, ReservationTarget,
    ReserveRequest, ReserveResponse, SearchRequest, SearchResponse, VehicleMatch,
};
use super::{booking_error_response, not_found, validation_failed, AppState};

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/bookings/search", web::post().to(search))
        .route("/bookings/reserve", web::post().to(reserve))
        .route("/bookings/release", web::post().to(release));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Fleet store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.store.backend().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search for the best-fitting available vehicles
///
/// POST /api/v1/bookings/search
///
/// Request body:
/// ```json
/// {
///   "payload": 900,
///   "length": 4.0,
///   "width": 2.0,
///   "height": 2.0
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return validation_failed(errors.to_string());
    }

    let request = BookingRequest::from(&*req);

    tracing::info!(
        "Searching fleet: payload {}, envelope {}x{}x{}",
        request.payload_needed,
        request.length_needed,
        request.width_needed,
        request.height_needed
    );

    let result = match state.orchestrator.search(state.store.as_ref(), &request).await {
        Ok(result) => result,
        Err(e) => return booking_error_response("Failed to search fleet", e),
    };

    let response = SearchResponse {
        matches: result.matches.into_iter().map(VehicleMatch::from).collect(),
        available_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches (from {} available vehicles)",
        response.matches.len(),
        response.available_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Reserve a vehicle
///
/// POST /api/v1/bookings/reserve
///
/// Request body, either form:
/// ```json
/// { "id": "uuid" }
/// { "name": "string", "payload": 1000, "length": 4.0, "width": 2.0, "height": 2.0 }
/// ```
async fn reserve(
    state: web::Data<AppState>,
    req: web::Json<ReserveRequest>,
) -> impl Responder {
    let target = ReservationTarget::from(req.into_inner());

    match state.orchestrator.reserve(state.store.as_ref(), &target).await {
        Ok(ReserveOutcome::Reserved(vehicle)) => {
            HttpResponse::Ok().json(ReserveResponse { reserved: vehicle })
        }
        Ok(ReserveOutcome::NotFound) => {
            not_found("No available vehicle matches the request; search again".to_string())
        }
        Err(e) => booking_error_response("Failed to reserve vehicle", e),
    }
}

/// Return a reserved vehicle to the available pool
///
/// POST /api/v1/bookings/release
async fn release(
    state: web::Data<AppState>,
    req: web::Json<ReleaseRequest>,
) -> impl Responder {
    match state.orchestrator.release(state.store.as_ref(), req.id).await {
        Ok(ReleaseOutcome::Released(vehicle)) => {
            HttpResponse::Ok().json(ReleaseResponse { released: vehicle })
        }
        Ok(ReleaseOutcome::NotFound) => {
            not_found(format!("No reserved vehicle with id {}", req.id))
        }
        Err(e) => booking_error_response("Failed to release vehicle", e),
    }
}
