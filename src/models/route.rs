//! Registered route templates.

use serde::{Deserialize, Serialize};

use super::{GarageId, PassengerCount, RouteId};

/// A reusable dispatch request between two garages.
///
/// Routes are immutable once registered and can be dispatched any number
/// of times. Garage ids are not checked until dispatch.
///
/// # Examples
///
/// ```
/// use garage_fleet::models::Route;
///
/// let r = Route::new(1, 1, 2, 30);
/// assert_eq!(r.origin(), 1);
/// assert_eq!(r.destination(), 2);
/// assert_eq!(r.passenger_count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    origin: GarageId,
    destination: GarageId,
    passenger_count: PassengerCount,
}

impl Route {
    /// Creates a route.
    pub fn new(
        id: RouteId,
        origin: GarageId,
        destination: GarageId,
        passenger_count: PassengerCount,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            passenger_count,
        }
    }

    /// Route ID.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Origin garage.
    pub fn origin(&self) -> GarageId {
        self.origin
    }

    /// Destination garage.
    pub fn destination(&self) -> GarageId {
        self.destination
    }

    /// Passengers requested on every dispatch of this route.
    pub fn passenger_count(&self) -> PassengerCount {
        self.passenger_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_new() {
        let r = Route::new(4, 2, 1, 15);
        assert_eq!(r.id(), 4);
        assert_eq!(r.origin(), 2);
        assert_eq!(r.destination(), 1);
        assert_eq!(r.passenger_count(), 15);
    }

    #[test]
    fn test_route_copy_equality() {
        let a = Route::new(1, 1, 2, 3);
        let b = a;
        assert_eq!(a, b);
    }
}
