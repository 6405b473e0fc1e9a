use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::models::{NewVehicle, Vehicle, VehicleDescriptor, VehicleStatus};
use crate::services::store::{FleetStore, StoreError};

/// In-process fleet store
///
/// Vehicles are kept in registration order. Every status transition runs
/// under a single write lock, so lookup and update cannot interleave with
/// another caller.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered vehicles
    pub async fn len(&self) -> usize {
        self.vehicles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.vehicles.read().await.is_empty()
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_vehicles(&self, status: Option<VehicleStatus>) -> Result<Vec<Vehicle>, StoreError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles
            .iter()
            .filter(|v| status.map_or(true, |s| v.status == s))
            .cloned()
            .collect())
    }

    async fn get_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, StoreError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, StoreError> {
        let vehicle = Vehicle::register(vehicle);
        self.vehicles.write().await.push(vehicle.clone());

        tracing::debug!("Registered vehicle {} ({})", vehicle.name, vehicle.id);
        Ok(vehicle)
    }

    async fn insert_vehicles(&self, vehicles: Vec<NewVehicle>) -> Result<Vec<Vehicle>, StoreError> {
        let registered: Vec<Vehicle> = vehicles.into_iter().map(Vehicle::register).collect();
        self.vehicles.write().await.extend(registered.iter().cloned());

        tracing::debug!("Registered {} vehicles", registered.len());
        Ok(registered)
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Option<Vehicle>, StoreError> {
        let mut vehicles = self.vehicles.write().await;

        Ok(vehicles
            .iter_mut()
            .find(|v| v.id == id && v.status == from)
            .map(|v| {
                v.status = to;
                v.clone()
            }))
    }

    async fn transition_by_descriptor(
        &self,
        descriptor: &VehicleDescriptor,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Option<Vehicle>, StoreError> {
        let mut vehicles = self.vehicles.write().await;

        Ok(vehicles
            .iter_mut()
            .find(|v| v.status == from && v.matches_descriptor(descriptor))
            .map(|v| {
                v.status = to;
                v.clone()
            }))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_vehicle(name: &str, payload: i64) -> NewVehicle {
        NewVehicle {
            name: name.to_string(),
            payload,
            length: 4.0,
            width: 2.0,
            height: 2.0,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_in_order() {
        let store = InMemoryFleetStore::new();
        store.insert_vehicle(new_vehicle("A", 1000)).await.unwrap();
        store
            .insert_vehicles(vec![new_vehicle("B", 1500), new_vehicle("C", 800)])
            .await
            .unwrap();

        let all = store.list_vehicles(None).await.unwrap();
        let names: Vec<_> = all.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_transition_requires_expected_status() {
        let store = InMemoryFleetStore::new();
        let vehicle = store.insert_vehicle(new_vehicle("A", 1000)).await.unwrap();

        let reserved = store
            .transition_status(vehicle.id, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap();
        assert_eq!(reserved.map(|v| v.status), Some(VehicleStatus::Reserved));

        let again = store
            .transition_status(vehicle.id, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_descriptor_transition_picks_earliest() {
        let store = InMemoryFleetStore::new();
        let first = store.insert_vehicle(new_vehicle("twin", 1000)).await.unwrap();
        let second = store.insert_vehicle(new_vehicle("twin", 1000)).await.unwrap();
        let descriptor = first.descriptor();

        let hit = store
            .transition_by_descriptor(&descriptor, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hit.id, first.id);

        let next = store
            .transition_by_descriptor(&descriptor, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.id, second.id);

        let none = store
            .transition_by_descriptor(&descriptor, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let store = InMemoryFleetStore::new();
        let a = store.insert_vehicle(new_vehicle("A", 1000)).await.unwrap();
        store.insert_vehicle(new_vehicle("B", 1000)).await.unwrap();
        store
            .transition_status(a.id, VehicleStatus::Available, VehicleStatus::Reserved)
            .await
            .unwrap();

        let available = store.list_vehicles(Some(VehicleStatus::Available)).await.unwrap();
        let reserved = store.list_vehicles(Some(VehicleStatus::Reserved)).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "B");
        assert_eq!(reserved.len(), 1);
        assert_eq!(reserved[0].id, a.id);
    }
}
