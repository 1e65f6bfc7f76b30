//! Destination search and routing for Tripdeck.
//!
//! This crate adapts external map providers into the domain model:
//! free-text place search produces [`tripdeck_core::trips::Destination`]
//! values ready to append to a trip, and routing turns a trip's ordered
//! destination list into leg-by-leg distance and duration figures.
//!
//! The only shipped provider is Google Maps (Places text search plus the
//! Directions API); the [`DestinationProvider`] trait is the seam for
//! swapping it out.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::PlacesError;
pub use models::{RouteLeg, RouteSummary};
pub use provider::google::GoogleMapsProvider;
pub use provider::DestinationProvider;
