// Service exports
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryFleetStore;
pub use postgres::PostgresFleetStore;
pub use store::{FleetStore, StoreError};
