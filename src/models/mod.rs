// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Vehicle, VehicleStatus, VehicleDescriptor, NewVehicle, BookingRequest, ScoredVehicle, ReservationTarget, FitWeights};
pub use requests::{SearchRequest, BulkRegisterRequest, ReserveRequest, ReleaseRequest, FleetQuery};
pub use responses::{VehicleMatch, SearchResponse, ReserveResponse, ReleaseResponse, FleetResponse, BulkRegisterResponse, HealthResponse, ErrorResponse};
