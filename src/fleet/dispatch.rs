//! Passenger dispatch between garages.

use tracing::{debug, warn};

use super::FleetController;
use crate::error::{FleetError, FleetResult};
use crate::models::{GarageId, PassengerCount, RouteId, TripRecord};

impl FleetController {
    /// Moves vehicles from `origin` to `destination` until
    /// `passenger_count` passengers are served.
    ///
    /// Vehicles leave the origin top first. Each carries
    /// `min(remaining, capacity)` passengers, is logged as one trip and
    /// parked on top of the destination. A request of zero or fewer
    /// passengers performs no trips. `origin == destination` is allowed.
    ///
    /// Returns the trips performed, in order.
    ///
    /// # Errors
    ///
    /// - [`FleetError::NoActiveJourney`] during setup
    /// - [`FleetError::InvalidGarage`] for an unknown origin or destination
    /// - [`FleetError::InsufficientVehicles`] if the origin empties first;
    ///   trips already made stay committed
    ///
    /// # Examples
    ///
    /// ```
    /// use garage_fleet::fleet::FleetController;
    ///
    /// let mut fleet = FleetController::new();
    /// let a = fleet.register_garage("A").unwrap();
    /// let b = fleet.register_garage("B").unwrap();
    /// fleet.register_vehicle(5).unwrap();
    /// fleet.register_vehicle(5).unwrap();
    /// fleet.start_journey().unwrap();
    ///
    /// // Vehicle 2 starts in B: send it back to A with 3 passengers.
    /// let trips = fleet.dispatch(b, a, 3).unwrap();
    /// assert_eq!(trips[0].vehicle_id, 2);
    /// assert_eq!(trips[0].passengers, 3);
    /// ```
    pub fn dispatch(
        &mut self,
        origin: GarageId,
        destination: GarageId,
        passenger_count: PassengerCount,
    ) -> FleetResult<Vec<TripRecord>> {
        self.require_active()?;
        let from = self
            .garage_index(origin)
            .ok_or(FleetError::InvalidGarage(origin))?;
        let to = self
            .garage_index(destination)
            .ok_or(FleetError::InvalidGarage(destination))?;

        let mut remaining = passenger_count;
        let mut performed = Vec::new();

        while remaining > 0 {
            let Some(mut vehicle) = self.garages[from].depart() else {
                warn!(
                    origin,
                    destination,
                    unserved = remaining,
                    committed = performed.len(),
                    "origin garage ran out of vehicles"
                );
                return Err(FleetError::InsufficientVehicles {
                    garage_id: origin,
                    unserved: remaining,
                    committed: performed,
                });
            };

            let carried = vehicle.board(remaining);
            remaining -= carried;

            let trip = TripRecord {
                origin,
                destination,
                vehicle_id: vehicle.id(),
                passengers: carried,
            };
            debug!(
                origin,
                destination,
                vehicle_id = trip.vehicle_id,
                passengers = carried,
                "trip"
            );
            self.trips.push(trip);
            performed.push(trip);
            self.garages[to].park(vehicle);
        }

        Ok(performed)
    }

    /// Dispatches a registered route.
    ///
    /// # Errors
    ///
    /// [`FleetError::RouteNotFound`] for an unknown id, otherwise as
    /// [`dispatch`](Self::dispatch).
    pub fn dispatch_route(&mut self, route_id: RouteId) -> FleetResult<Vec<TripRecord>> {
        let route = *self.route(route_id).ok_or(FleetError::RouteNotFound(route_id))?;
        self.dispatch(route.origin(), route.destination(), route.passenger_count())
    }

    /// Sends exactly one vehicle, the top of `origin`, to `destination`.
    ///
    /// Unlike [`dispatch`](Self::dispatch) the load is not split: if the
    /// top vehicle cannot seat `passengers`, nothing moves. Negative
    /// requests count as zero passengers but still move the vehicle.
    ///
    /// # Errors
    ///
    /// - [`FleetError::NoActiveJourney`] during setup
    /// - [`FleetError::InvalidGarage`] for an unknown origin or destination
    /// - [`FleetError::InsufficientVehicles`] if the origin is empty
    /// - [`FleetError::CapacityExceeded`] if the top vehicle is too small
    pub fn release_vehicle(
        &mut self,
        origin: GarageId,
        destination: GarageId,
        passengers: PassengerCount,
    ) -> FleetResult<TripRecord> {
        self.require_active()?;
        let from = self
            .garage_index(origin)
            .ok_or(FleetError::InvalidGarage(origin))?;
        let to = self
            .garage_index(destination)
            .ok_or(FleetError::InvalidGarage(destination))?;

        let passengers = passengers.max(0);
        let mut vehicle =
            self.garages[from]
                .depart()
                .ok_or(FleetError::InsufficientVehicles {
                    garage_id: origin,
                    unserved: passengers,
                    committed: Vec::new(),
                })?;
        if passengers > vehicle.capacity() {
            let err = FleetError::CapacityExceeded {
                vehicle_id: vehicle.id(),
                capacity: vehicle.capacity(),
                passengers,
            };
            // Back on top, untouched.
            self.garages[from].park(vehicle);
            return Err(err);
        }

        let carried = vehicle.board(passengers);
        let trip = TripRecord {
            origin,
            destination,
            vehicle_id: vehicle.id(),
            passengers: carried,
        };
        debug!(
            origin,
            destination,
            vehicle_id = trip.vehicle_id,
            passengers = carried,
            "single vehicle released"
        );
        self.trips.push(trip);
        self.garages[to].park(vehicle);
        Ok(trip)
    }
}
