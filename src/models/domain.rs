use chrono::SubsecRound;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Dimensions must be finite and strictly positive
pub(crate) fn validate_dimension(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("dimension_must_be_positive"))
    }
}

/// Booking state of a vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Reserved,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Available => write!(f, "available"),
            VehicleStatus::Reserved => write!(f, "reserved"),
        }
    }
}

/// A registered fleet vehicle with its capacity envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub payload: i64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Vehicle {
    /// Build a freshly registered, available vehicle
    ///
    /// The registration time is truncated to microseconds, the precision
    /// PostgreSQL stores.
    pub fn register(new_vehicle: NewVehicle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_vehicle.name,
            payload: new_vehicle.payload,
            length: new_vehicle.length,
            width: new_vehicle.width,
            height: new_vehicle.height,
            status: VehicleStatus::Available,
            created_at: chrono::Utc::now().trunc_subsecs(6),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// The attribute tuple callers see for this vehicle
    pub fn descriptor(&self) -> VehicleDescriptor {
        VehicleDescriptor {
            name: self.name.clone(),
            payload: self.payload,
            length: self.length,
            width: self.width,
            height: self.height,
        }
    }

    /// Exact match on all five descriptor attributes
    pub fn matches_descriptor(&self, descriptor: &VehicleDescriptor) -> bool {
        self.name == descriptor.name
            && self.payload == descriptor.payload
            && self.length == descriptor.length
            && self.width == descriptor.width
            && self.height == descriptor.height
    }
}

/// Vehicle attributes used to identify a vehicle when no id is at hand
///
/// Unknown fields are rejected, so a body carrying a malformed `id` next to
/// the attributes never reads as a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleDescriptor {
    pub name: String,
    pub payload: i64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Registration input; status always starts as available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewVehicle {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0))]
    pub payload: i64,
    #[validate(custom(function = "validate_dimension"))]
    pub length: f64,
    #[validate(custom(function = "validate_dimension"))]
    pub width: f64,
    #[validate(custom(function = "validate_dimension"))]
    pub height: f64,
}

/// Payload and dimensional envelope a shipment needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingRequest {
    pub payload_needed: i64,
    pub length_needed: f64,
    pub width_needed: f64,
    pub height_needed: f64,
}

/// Vehicle paired with its fit score during ranking
#[derive(Debug, Clone)]
pub struct ScoredVehicle {
    pub vehicle: Vehicle,
    pub fit_score: f64,
}

/// Which vehicle a reservation targets
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationTarget {
    Id(Uuid),
    Descriptor(VehicleDescriptor),
}

/// Per-dimension weights for the fit score
///
/// All weights default to 1.0, which sums payload and length differences
/// as-is. Tune them to normalize units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitWeights {
    pub payload: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            payload: 1.0,
            length: 1.0,
            width: 1.0,
            height: 1.0,
        }
    }
}
