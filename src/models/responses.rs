use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::domain::Vehicle;

/// Vehicle attributes exposed in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleMatch {
    pub id: Uuid,
    pub name: String,
    pub payload: i64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Vehicle> for VehicleMatch {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            payload: vehicle.payload,
            length: vehicle.length,
            width: vehicle.width,
            height: vehicle.height,
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<VehicleMatch>,
    #[serde(rename = "availableCandidates")]
    pub available_candidates: usize,
}

/// Response for a successful reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveResponse {
    pub reserved: Vehicle,
}

/// Response for a successful release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResponse {
    pub released: Vehicle,
}

/// Fleet listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetResponse {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
}

/// Bulk registration result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkRegisterResponse {
    pub registered: usize,
    pub vehicles: Vec<Vehicle>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
