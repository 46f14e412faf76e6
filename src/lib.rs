//! # garage-fleet
//!
//! Fleet dispatch simulation: vehicles parked in garages as LIFO stacks,
//! reusable routes between garages, and journeys during which passenger
//! loads are split greedily across vehicle capacities.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vehicle, Garage, Route, TripRecord, JourneyReport)
//! - [`fleet`] — The controller: registration, journey lifecycle, dispatch, trip queries
//! - [`config`] — Controller configuration
//! - [`error`] — Error type and result alias

pub mod config;
pub mod error;
pub mod fleet;
pub mod models;

pub use config::FleetConfig;
pub use error::{FleetError, FleetResult};
pub use fleet::{FleetController, Phase};
