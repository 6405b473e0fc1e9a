use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::models::domain::{validate_dimension, BookingRequest, NewVehicle, ReservationTarget, VehicleDescriptor, VehicleStatus};

/// Request to search the fleet for the best-fitting vehicles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(range(min = 0))]
    #[serde(alias = "payloadNeeded")]
    pub payload: i64,
    #[validate(custom(function = "validate_dimension"))]
    #[serde(alias = "lengthNeeded")]
    pub length: f64,
    #[validate(custom(function = "validate_dimension"))]
    #[serde(alias = "widthNeeded")]
    pub width: f64,
    #[validate(custom(function = "validate_dimension"))]
    #[serde(alias = "heightNeeded")]
    pub height: f64,
}

impl From<&SearchRequest> for BookingRequest {
    fn from(req: &SearchRequest) -> Self {
        BookingRequest {
            payload_needed: req.payload,
            length_needed: req.length,
            width_needed: req.width,
            height_needed: req.height,
        }
    }
}

/// Request to register many vehicles in one transaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkRegisterRequest {
    #[validate(length(min = 1), nested)]
    pub vehicles: Vec<NewVehicle>,
}

/// Request to reserve a vehicle, by id or by its full attribute tuple
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReserveRequest {
    ById { id: Uuid },
    ByDescriptor(VehicleDescriptor),
}

impl From<ReserveRequest> for ReservationTarget {
    fn from(req: ReserveRequest) -> Self {
        match req {
            ReserveRequest::ById { id } => ReservationTarget::Id(id),
            ReserveRequest::ByDescriptor(descriptor) => ReservationTarget::Descriptor(descriptor),
        }
    }
}

/// Request to return a reserved vehicle to the available pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRequest {
    pub id: Uuid,
}

/// Query parameters for listing the fleet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetQuery {
    pub status: Option<VehicleStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_rejects_bad_dimensions() {
        let req = SearchRequest { payload: 900, length: 4.0, width: 0.0, height: f64::NAN };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("width"));
        assert!(fields.contains_key("height"));
        assert!(!fields.contains_key("length"));
    }

    #[test]
    fn test_search_request_rejects_negative_payload() {
        let req = SearchRequest { payload: -1, length: 4.0, width: 2.0, height: 2.0 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_request_accepts_aliases() {
        let json = r#"{"payloadNeeded": 900, "lengthNeeded": 4, "widthNeeded": 2, "heightNeeded": 2}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(BookingRequest::from(&req).payload_needed, 900);
    }

    #[test]
    fn test_reserve_request_by_id() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id": "{}"}}"#, id);
        let req: ReserveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(ReservationTarget::from(req), ReservationTarget::Id(id));
    }

    #[test]
    fn test_reserve_request_by_descriptor() {
        let json = r#"{"name": "A", "payload": 1000, "length": 4.0, "width": 2.0, "height": 2.0}"#;
        let req: ReserveRequest = serde_json::from_str(json).unwrap();
        match ReservationTarget::from(req) {
            ReservationTarget::Descriptor(d) => {
                assert_eq!(d.name, "A");
                assert_eq!(d.payload, 1000);
            }
            other => panic!("expected descriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_reserve_request_with_malformed_id_is_rejected() {
        let json = r#"{"id": "not-a-uuid", "name": "A", "payload": 1000, "length": 4.0, "width": 2.0, "height": 2.0}"#;
        assert!(serde_json::from_str::<ReserveRequest>(json).is_err());
    }

    #[test]
    fn test_reserve_request_with_valid_id_ignores_attributes() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id": "{}", "name": "A", "payload": 1000}}"#, id);
        let req: ReserveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(ReservationTarget::from(req), ReservationTarget::Id(id));
    }

    #[test]
    fn test_bulk_register_requires_vehicles() {
        let req = BulkRegisterRequest { vehicles: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bulk_register_validates_each_vehicle() {
        let req = BulkRegisterRequest {
            vehicles: vec![
                NewVehicle { name: "A".into(), payload: 1000, length: 4.0, width: 2.0, height: 2.0 },
                NewVehicle { name: "".into(), payload: 1000, length: 4.0, width: 2.0, height: 2.0 },
            ],
        };
        assert!(req.validate().is_err());
    }
}
