//! Trips module - domain models, services, and traits.

mod trips_model;
mod trips_service;
mod trips_traits;

#[cfg(test)]
mod trips_model_tests;
#[cfg(test)]
mod trips_service_tests;

pub use trips_model::{Destination, DestinationKind, NewTrip, Trip, TripStatus, TripUpdate};
pub use trips_service::TripService;
pub use trips_traits::{TripRepositoryTrait, TripServiceTrait};
