//! Read-only lookups over registries and the trip log. Valid in any phase.

use super::FleetController;
use crate::error::{FleetError, FleetResult};
use crate::models::{
    Garage, GarageId, PassengerCount, PassengerTotal, Route, RouteId, TripRecord, Vehicle,
    VehicleId,
};

impl FleetController {
    /// All garages in id order.
    pub fn garages(&self) -> &[Garage] {
        &self.garages
    }

    /// Garage by id.
    pub fn garage(&self, id: GarageId) -> Option<&Garage> {
        self.garage_index(id).map(|i| &self.garages[i])
    }

    /// First garage registered under `name`.
    pub fn garage_by_name(&self, name: &str) -> Option<&Garage> {
        self.garages.iter().find(|g| g.name() == name)
    }

    /// Registered routes in id order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route by id.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        id.checked_sub(1).and_then(|i| self.routes.get(i))
    }

    /// Vehicle by id, wherever it is currently parked.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.registry
            .iter()
            .chain(self.garages.iter().flat_map(|g| g.vehicles()))
            .find(|v| v.id() == id)
    }

    /// Number of registered vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// `(vehicle_id, capacity)` of every vehicle in a garage, top first.
    ///
    /// # Errors
    ///
    /// [`FleetError::GarageNotFound`] for an unknown id.
    pub fn list_vehicles_in_garage(
        &self,
        garage_id: GarageId,
    ) -> FleetResult<Vec<(VehicleId, PassengerCount)>> {
        let garage = self
            .garage(garage_id)
            .ok_or(FleetError::GarageNotFound(garage_id))?;
        Ok(garage.vehicles().map(|v| (v.id(), v.capacity())).collect())
    }

    /// The full trip log in chronological order.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    fn trips_between(
        &self,
        origin: GarageId,
        destination: GarageId,
    ) -> impl Iterator<Item = &TripRecord> {
        self.trips
            .iter()
            .filter(move |t| t.connects(origin, destination))
    }

    /// Number of trips from `origin` to `destination`.
    pub fn count_trips(&self, origin: GarageId, destination: GarageId) -> usize {
        self.trips_between(origin, destination).count()
    }

    /// `(vehicle_id, passengers)` of each trip from `origin` to
    /// `destination`, oldest first.
    pub fn list_trips(
        &self,
        origin: GarageId,
        destination: GarageId,
    ) -> Vec<(VehicleId, PassengerCount)> {
        self.trips_between(origin, destination)
            .map(|t| (t.vehicle_id, t.passengers))
            .collect()
    }

    /// Passengers carried from `origin` to `destination`; 0 if no trip matches.
    pub fn total_passengers(&self, origin: GarageId, destination: GarageId) -> PassengerTotal {
        self.trips_between(origin, destination)
            .map(|t| PassengerTotal::from(t.passengers))
            .sum()
    }
}
