//! Vehicle type with capacity and cumulative journey counters.

use serde::{Deserialize, Serialize};

use super::{PassengerCount, PassengerTotal, VehicleId};

/// A vehicle that carries passengers between garages.
///
/// Capacity is fixed at registration. The passenger and trip counters
/// accumulate over a journey and are reset when it ends.
///
/// # Examples
///
/// ```
/// use garage_fleet::models::Vehicle;
///
/// let v = Vehicle::new(1, 40);
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.capacity(), 40);
/// assert_eq!(v.passengers_carried(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    capacity: PassengerCount,
    passengers_carried: PassengerTotal,
    trip_count: usize,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity and zeroed counters.
    pub fn new(id: VehicleId, capacity: PassengerCount) -> Self {
        Self {
            id,
            capacity,
            passengers_carried: 0,
            trip_count: 0,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Maximum passengers per trip.
    pub fn capacity(&self) -> PassengerCount {
        self.capacity
    }

    /// Passengers carried since the journey started.
    pub fn passengers_carried(&self) -> PassengerTotal {
        self.passengers_carried
    }

    /// Trips made since the journey started.
    pub fn trip_count(&self) -> usize {
        self.trip_count
    }

    /// Boards up to `capacity` of `requested` passengers and counts one trip.
    ///
    /// Returns the number actually carried.
    pub(crate) fn board(&mut self, requested: PassengerCount) -> PassengerCount {
        let carried = requested.min(self.capacity);
        self.passengers_carried += PassengerTotal::from(carried);
        self.trip_count += 1;
        carried
    }

    pub(crate) fn reset_counters(&mut self) {
        self.passengers_carried = 0;
        self.trip_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(3, 20);
        assert_eq!(v.id(), 3);
        assert_eq!(v.capacity(), 20);
        assert_eq!(v.passengers_carried(), 0);
        assert_eq!(v.trip_count(), 0);
    }

    #[test]
    fn test_board_caps_at_capacity() {
        let mut v = Vehicle::new(1, 5);
        assert_eq!(v.board(12), 5);
        assert_eq!(v.board(2), 2);
        assert_eq!(v.passengers_carried(), 7);
        assert_eq!(v.trip_count(), 2);
    }

    #[test]
    fn test_reset_counters() {
        let mut v = Vehicle::new(1, 5);
        v.board(4);
        v.reset_counters();
        assert_eq!(v.passengers_carried(), 0);
        assert_eq!(v.trip_count(), 0);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_board_full_capacity_twice_does_not_overflow() {
        let mut v = Vehicle::new(1, i32::MAX);
        assert_eq!(v.board(i32::MAX), i32::MAX);
        assert_eq!(v.board(i32::MAX), i32::MAX);
        assert_eq!(v.passengers_carried(), 2 * i64::from(i32::MAX));
        assert_eq!(v.trip_count(), 2);
    }
}
