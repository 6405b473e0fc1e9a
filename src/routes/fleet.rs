use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{BulkRegisterRequest, BulkRegisterResponse, FleetQuery, FleetResponse, NewVehicle};
use super::{booking_error_response, not_found, validation_failed, AppState};

/// Configure fleet administration routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/fleet", web::get().to(list_fleet))
        .route("/fleet", web::post().to(register_vehicle))
        .route("/fleet/bulk", web::post().to(register_vehicles))
        .route("/fleet/{id}", web::get().to(get_vehicle));
}

/// List the fleet
///
/// GET /api/v1/fleet?status=available|reserved
async fn list_fleet(
    state: web::Data<AppState>,
    query: web::Query<FleetQuery>,
) -> impl Responder {
    match state.orchestrator.list_fleet(state.store.as_ref(), query.status).await {
        Ok(vehicles) => HttpResponse::Ok().json(FleetResponse {
            total: vehicles.len(),
            vehicles,
        }),
        Err(e) => booking_error_response("Failed to list fleet", e),
    }
}

/// GET /api/v1/fleet/{id}
async fn get_vehicle(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.orchestrator.get_vehicle(state.store.as_ref(), id).await {
        Ok(Some(vehicle)) => HttpResponse::Ok().json(vehicle),
        Ok(None) => not_found(format!("No vehicle with id {}", id)),
        Err(e) => booking_error_response("Failed to fetch vehicle", e),
    }
}

/// Register a vehicle
///
/// POST /api/v1/fleet
///
/// Request body:
/// ```json
/// { "name": "string", "payload": 1000, "length": 4.0, "width": 2.0, "height": 2.0 }
/// ```
async fn register_vehicle(
    state: web::Data<AppState>,
    req: web::Json<NewVehicle>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    match state.orchestrator.register(state.store.as_ref(), req.into_inner()).await {
        Ok(vehicle) => HttpResponse::Created().json(vehicle),
        Err(e) => booking_error_response("Failed to register vehicle", e),
    }
}

/// Register many vehicles at once; all or nothing
///
/// POST /api/v1/fleet/bulk
async fn register_vehicles(
    state: web::Data<AppState>,
    req: web::Json<BulkRegisterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let vehicles = req.into_inner().vehicles;

    match state.orchestrator.register_many(state.store.as_ref(), vehicles).await {
        Ok(vehicles) => HttpResponse::Created().json(BulkRegisterResponse {
            registered: vehicles.len(),
            vehicles,
        }),
        Err(e) => booking_error_response("Failed to register vehicles", e),
    }
}
