//! Trip records.

use serde::{Deserialize, Serialize};

use super::{GarageId, PassengerCount, VehicleId};

/// One vehicle's movement between two garages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Garage the vehicle left.
    pub origin: GarageId,
    /// Garage the vehicle was parked in afterwards.
    pub destination: GarageId,
    /// Vehicle that made the trip.
    pub vehicle_id: VehicleId,
    /// Passengers carried, never above the vehicle's capacity.
    pub passengers: PassengerCount,
}

impl TripRecord {
    /// Returns `true` if this trip went from `origin` to `destination`.
    ///
    /// Direction matters: a trip from A to B does not match `(B, A)`.
    pub fn connects(&self, origin: GarageId, destination: GarageId) -> bool {
        self.origin == origin && self.destination == destination
    }
}
