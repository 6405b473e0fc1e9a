use thiserror::Error;
use uuid::Uuid;
use validator::Validate;
use crate::core::matcher::{MatchResult, Matcher};
use crate::models::{BookingRequest, NewVehicle, ReservationTarget, Vehicle, VehicleStatus};
use crate::services::{FleetStore, StoreError};

/// Errors surfaced by booking operations
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a reservation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ReserveOutcome {
    Reserved(Vehicle),
    /// No available vehicle matched the target
    NotFound,
}

/// Outcome of returning a vehicle to the pool
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    Released(Vehicle),
    /// No reserved vehicle has this id
    NotFound,
}

/// Sequences matching with status transitions on the fleet store
///
/// The store handle is passed into each call rather than held here, so one
/// orchestrator serves every request regardless of which connection it uses.
#[derive(Debug, Clone, Default)]
pub struct BookingOrchestrator {
    matcher: Matcher,
}

impl BookingOrchestrator {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Find the best-fitting available vehicles. Read-only.
    pub async fn search(
        &self,
        store: &dyn FleetStore,
        request: &BookingRequest,
    ) -> Result<MatchResult, BookingError> {
        let candidates = store.list_vehicles(Some(VehicleStatus::Available)).await?;

        tracing::debug!("Ranking {} available vehicles", candidates.len());

        Ok(self.matcher.find_best_fits(request, candidates))
    }

    /// Reserve one available vehicle, by id or by exact descriptor
    ///
    /// A single attempt; the store applies it as an atomic compare-and-set.
    pub async fn reserve(
        &self,
        store: &dyn FleetStore,
        target: &ReservationTarget,
    ) -> Result<ReserveOutcome, BookingError> {
        let reserved = match target {
            ReservationTarget::Id(id) => {
                store
                    .transition_status(*id, VehicleStatus::Available, VehicleStatus::Reserved)
                    .await?
            }
            ReservationTarget::Descriptor(descriptor) => {
                store
                    .transition_by_descriptor(descriptor, VehicleStatus::Available, VehicleStatus::Reserved)
                    .await?
            }
        };

        match reserved {
            Some(vehicle) => {
                tracing::info!("Vehicle {} ({}) reserved", vehicle.name, vehicle.id);
                Ok(ReserveOutcome::Reserved(vehicle))
            }
            None => {
                tracing::warn!("No available vehicle for reservation target {:?}", target);
                Ok(ReserveOutcome::NotFound)
            }
        }
    }

    /// Return a reserved vehicle to the available pool
    pub async fn release(
        &self,
        store: &dyn FleetStore,
        id: Uuid,
    ) -> Result<ReleaseOutcome, BookingError> {
        match store
            .transition_status(id, VehicleStatus::Reserved, VehicleStatus::Available)
            .await?
        {
            Some(vehicle) => {
                tracing::info!("Vehicle {} ({}) released", vehicle.name, vehicle.id);
                Ok(ReleaseOutcome::Released(vehicle))
            }
            None => {
                tracing::warn!("No reserved vehicle with id {}", id);
                Ok(ReleaseOutcome::NotFound)
            }
        }
    }

    /// Register a single vehicle
    pub async fn register(
        &self,
        store: &dyn FleetStore,
        vehicle: NewVehicle,
    ) -> Result<Vehicle, BookingError> {
        vehicle
            .validate()
            .map_err(|e| BookingError::Validation(e.to_string()))?;

        let vehicle = store.insert_vehicle(vehicle).await?;
        tracing::info!("Registered vehicle {} ({})", vehicle.name, vehicle.id);

        Ok(vehicle)
    }

    /// Register a batch of vehicles; nothing is stored if any entry is invalid
    pub async fn register_many(
        &self,
        store: &dyn FleetStore,
        vehicles: Vec<NewVehicle>,
    ) -> Result<Vec<Vehicle>, BookingError> {
        if vehicles.is_empty() {
            return Err(BookingError::Validation("no vehicles to register".to_string()));
        }

        for (index, vehicle) in vehicles.iter().enumerate() {
            vehicle
                .validate()
                .map_err(|e| BookingError::Validation(format!("vehicle #{}: {}", index, e)))?;
        }

        let registered = store.insert_vehicles(vehicles).await?;
        tracing::info!("Registered {} vehicles", registered.len());

        Ok(registered)
    }

    /// List the fleet, optionally filtered by status
    pub async fn list_fleet(
        &self,
        store: &dyn FleetStore,
        status: Option<VehicleStatus>,
    ) -> Result<Vec<Vehicle>, BookingError> {
        Ok(store.list_vehicles(status).await?)
    }

    pub async fn get_vehicle(
        &self,
        store: &dyn FleetStore,
        id: Uuid,
    ) -> Result<Option<Vehicle>, BookingError> {
        Ok(store.get_vehicle(id).await?)
    }
}
