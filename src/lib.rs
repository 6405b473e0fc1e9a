//! Fleet Booking - vehicle matching and booking service for fleet dispatch
//!
//! This library ranks available fleet vehicles against a shipment's payload and
//! dimensional envelope, and reserves a chosen vehicle with an atomic
//! status transition on the fleet store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{BookingOrchestrator, BookingError, Matcher, MatchResult, ReserveOutcome, ReleaseOutcome, calculate_fit_score};
pub use models::{Vehicle, VehicleStatus, VehicleDescriptor, NewVehicle, BookingRequest, ReservationTarget, FitWeights};
pub use services::{FleetStore, InMemoryFleetStore, PostgresFleetStore, StoreError};
