use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;
use crate::models::{NewVehicle, Vehicle, VehicleDescriptor, VehicleStatus};

/// Errors that can occur when talking to the fleet store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Fleet store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Persistence boundary for fleet vehicles
///
/// Listings come back in encounter order (registration time, then id).
/// Status transitions are compare-and-set: a transition only applies when the
/// vehicle is currently in the `from` state, and at most one vehicle changes
/// per call.
#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Short name of the backing store, for health reporting
    fn backend(&self) -> &'static str;

    /// List vehicles, optionally only those in the given status
    async fn list_vehicles(&self, status: Option<VehicleStatus>) -> Result<Vec<Vehicle>, StoreError>;

    /// Fetch a single vehicle by id
    async fn get_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, StoreError>;

    /// Register a vehicle; it starts out available
    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, StoreError>;

    /// Register several vehicles; either all are stored or none are
    async fn insert_vehicles(&self, vehicles: Vec<NewVehicle>) -> Result<Vec<Vehicle>, StoreError>;

    /// Move the vehicle with this id from `from` to `to`
    ///
    /// Returns the updated vehicle, or `None` if no vehicle with this id is in `from`.
    async fn transition_status(
        &self,
        id: Uuid,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Option<Vehicle>, StoreError>;

    /// Move the earliest vehicle in `from` that matches the descriptor exactly to `to`
    async fn transition_by_descriptor(
        &self,
        descriptor: &VehicleDescriptor,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Option<Vehicle>, StoreError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<bool, StoreError>;
}
