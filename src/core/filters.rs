use crate::models::{BookingRequest, Vehicle};

/// Check if a vehicle can carry the requested payload
///
/// This is the hard filter of the matching pipeline. Vehicles that fail it are
/// never returned, even when nothing else qualifies.
#[inline]
pub fn has_sufficient_payload(vehicle: &Vehicle, request: &BookingRequest) -> bool {
    vehicle.payload >= request.payload_needed
}
