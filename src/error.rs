//! Error type shared by every fleet operation.

use thiserror::Error;

use crate::models::{GarageId, PassengerCount, RouteId, TripRecord, VehicleId};

/// Result alias used throughout the crate.
pub type FleetResult<T> = Result<T, FleetError>;

/// Errors reported by [`FleetController`](crate::fleet::FleetController).
///
/// None of them is fatal: the controller stays usable after any error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// Registration attempted while a journey is running.
    #[error("cannot register while a journey is in progress")]
    JourneyInProgress,
    /// `start_journey` called twice.
    #[error("a journey is already active")]
    JourneyAlreadyActive,
    /// Journey-scoped operation called during setup.
    #[error("no journey is active")]
    NoActiveJourney,
    /// Not enough garages registered to start a journey.
    #[error("at least {required} garages are required, found {found}")]
    InsufficientGarages {
        /// Minimum number of garages.
        required: usize,
        /// Garages currently registered.
        found: usize,
    },
    /// Dispatch referenced an unknown origin or destination garage.
    #[error("invalid origin or destination garage {0}")]
    InvalidGarage(GarageId),
    /// Query referenced an unknown garage.
    #[error("garage {0} not found")]
    GarageNotFound(GarageId),
    /// Unknown route id.
    #[error("route {0} not found")]
    RouteNotFound(RouteId),
    /// Vehicle capacity must be positive.
    #[error("vehicle capacity must be positive, got {0}")]
    InvalidCapacity(PassengerCount),
    /// The origin garage ran out of vehicles before every passenger was served.
    ///
    /// Trips in `committed` were performed and are not rolled back.
    #[error("garage {garage_id} ran out of vehicles with {unserved} passengers left")]
    InsufficientVehicles {
        /// Origin garage that was exhausted.
        garage_id: GarageId,
        /// Passengers that could not be served.
        unserved: PassengerCount,
        /// Trips performed before the garage ran dry.
        committed: Vec<TripRecord>,
    },
    /// A single-vehicle release asked for more passengers than the top vehicle seats.
    #[error("vehicle {vehicle_id} seats {capacity}, cannot carry {passengers}")]
    CapacityExceeded {
        /// Vehicle on top of the origin stack.
        vehicle_id: VehicleId,
        /// Its capacity.
        capacity: PassengerCount,
        /// Requested passengers.
        passengers: PassengerCount,
    },
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
