//! End-of-journey summary.

use serde::{Deserialize, Serialize};

use super::{PassengerTotal, Vehicle, VehicleId};

/// Cumulative counters of one vehicle, captured when a journey ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleReport {
    /// Vehicle ID.
    pub vehicle_id: VehicleId,
    /// Passengers carried during the journey.
    pub passengers_carried: PassengerTotal,
    /// Trips made during the journey.
    pub trip_count: usize,
}

impl From<&Vehicle> for VehicleReport {
    fn from(v: &Vehicle) -> Self {
        Self {
            vehicle_id: v.id(),
            passengers_carried: v.passengers_carried(),
            trip_count: v.trip_count(),
        }
    }
}

/// Per-vehicle report returned by
/// [`FleetController::end_journey`](crate::fleet::FleetController::end_journey).
///
/// Vehicles are listed in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyReport {
    vehicles: Vec<VehicleReport>,
}

impl JourneyReport {
    /// Creates a report, sorting the entries by vehicle id.
    pub fn new(mut vehicles: Vec<VehicleReport>) -> Self {
        vehicles.sort_by_key(|r| r.vehicle_id);
        Self { vehicles }
    }

    /// Entries in vehicle id order.
    pub fn vehicles(&self) -> &[VehicleReport] {
        &self.vehicles
    }

    /// Entry for one vehicle.
    pub fn get(&self, vehicle_id: VehicleId) -> Option<&VehicleReport> {
        self.vehicles.iter().find(|r| r.vehicle_id == vehicle_id)
    }

    /// Passengers carried by the whole fleet.
    pub fn total_passengers(&self) -> PassengerTotal {
        self.vehicles.iter().map(|r| r.passengers_carried).sum()
    }

    /// Trips made by the whole fleet.
    pub fn total_trips(&self) -> usize {
        self.vehicles.iter().map(|r| r.trip_count).sum()
    }

    /// Serializes the report as JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::error::FleetResult<String> {
        serde_json::to_string(self).map_err(|e| crate::error::FleetError::Config(e.to_string()))
    }
}
