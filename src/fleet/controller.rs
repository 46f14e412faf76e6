//! Registries and the setup/journey phase machine.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::FleetConfig;
use crate::error::{FleetError, FleetResult};
use crate::models::{
    Garage, GarageId, JourneyReport, PassengerCount, Route, RouteId, TripRecord, Vehicle,
    VehicleId, VehicleReport,
};

/// Lifecycle phase of a [`FleetController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Vehicles, garages and routes may be registered.
    Setup,
    /// Vehicles are parked in garages and may be dispatched.
    JourneyActive,
}

/// Owns the whole fleet and enforces the journey lifecycle.
///
/// During setup, vehicles sit in a flat registry. Starting a journey
/// parks them round-robin in the garages; ending it pulls them back out.
///
/// # Examples
///
/// ```
/// use garage_fleet::fleet::FleetController;
///
/// let mut fleet = FleetController::new();
/// let a = fleet.register_garage("A").unwrap();
/// let b = fleet.register_garage("B").unwrap();
/// fleet.register_vehicle(4).unwrap();
/// fleet.register_vehicle(3).unwrap();
/// fleet.start_journey().unwrap();
///
/// let trips = fleet.dispatch(a, b, 4).unwrap();
/// assert_eq!(trips.len(), 1);
/// assert_eq!(fleet.total_passengers(a, b), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FleetController {
    pub(super) config: FleetConfig,
    pub(super) phase: Phase,
    pub(super) registry: Vec<Vehicle>,
    pub(super) vehicle_count: usize,
    pub(super) garages: Vec<Garage>,
    pub(super) routes: Vec<Route>,
    pub(super) trips: Vec<TripRecord>,
}

impl FleetController {
    /// Creates an empty controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FleetConfig::default())
    }

    /// Creates an empty controller.
    pub fn with_config(config: FleetConfig) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            registry: Vec::new(),
            vehicle_count: 0,
            garages: Vec::new(),
            routes: Vec::new(),
            trips: Vec::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` between `start_journey` and `end_journey`.
    pub fn is_journey_active(&self) -> bool {
        self.phase == Phase::JourneyActive
    }

    /// Registers a vehicle and returns its id.
    ///
    /// # Errors
    ///
    /// [`FleetError::JourneyInProgress`] during a journey,
    /// [`FleetError::InvalidCapacity`] if `capacity <= 0`.
    pub fn register_vehicle(&mut self, capacity: PassengerCount) -> FleetResult<VehicleId> {
        self.require_setup()?;
        if capacity <= 0 {
            return Err(FleetError::InvalidCapacity(capacity));
        }
        self.vehicle_count += 1;
        let id = self.vehicle_count;
        self.registry.push(Vehicle::new(id, capacity));
        info!(vehicle_id = id, capacity, "vehicle registered");
        Ok(id)
    }

    /// Registers a garage and returns its id.
    ///
    /// # Errors
    ///
    /// [`FleetError::JourneyInProgress`] during a journey.
    pub fn register_garage(&mut self, name: impl Into<String>) -> FleetResult<GarageId> {
        self.require_setup()?;
        let id = self.garages.len() + 1;
        let garage = Garage::new(id, name);
        info!(garage_id = id, name = garage.name(), "garage registered");
        self.garages.push(garage);
        Ok(id)
    }

    /// Registers a route template and returns its id.
    ///
    /// Garage ids are validated when the route is dispatched.
    ///
    /// # Errors
    ///
    /// [`FleetError::JourneyInProgress`] during a journey.
    pub fn register_route(
        &mut self,
        origin: GarageId,
        destination: GarageId,
        passenger_count: PassengerCount,
    ) -> FleetResult<RouteId> {
        self.require_setup()?;
        let id = self.routes.len() + 1;
        self.routes
            .push(Route::new(id, origin, destination, passenger_count));
        info!(route_id = id, origin, destination, passenger_count, "route registered");
        Ok(id)
    }

    /// Starts a journey, parking vehicle `i` (registration order) in
    /// garage `i mod garage_count`.
    ///
    /// # Errors
    ///
    /// [`FleetError::JourneyAlreadyActive`] if a journey is running,
    /// [`FleetError::InsufficientGarages`] if fewer than
    /// [`FleetConfig::min_garages`] garages exist. Nothing changes on error.
    pub fn start_journey(&mut self) -> FleetResult<()> {
        if self.is_journey_active() {
            return Err(FleetError::JourneyAlreadyActive);
        }
        let required = self.config.min_garages();
        let found = self.garages.len();
        if found < required {
            return Err(FleetError::InsufficientGarages { required, found });
        }

        let vehicles = std::mem::take(&mut self.registry);
        for (i, vehicle) in vehicles.into_iter().enumerate() {
            self.garages[i % found].park(vehicle);
        }

        self.phase = Phase::JourneyActive;
        info!(
            vehicles = self.vehicle_count,
            garages = found,
            "journey started"
        );
        Ok(())
    }

    /// Ends the journey and returns every vehicle's cumulative counters.
    ///
    /// Afterwards counters are zero, the trip log is empty and all vehicles
    /// are back in the registry in id order.
    ///
    /// # Errors
    ///
    /// [`FleetError::NoActiveJourney`] during setup.
    pub fn end_journey(&mut self) -> FleetResult<JourneyReport> {
        self.require_active()?;

        let mut vehicles: Vec<Vehicle> = self
            .garages
            .iter_mut()
            .flat_map(|g| g.drain().collect::<Vec<_>>())
            .collect();
        vehicles.sort_by_key(|v| v.id());

        let report = JourneyReport::new(vehicles.iter().map(VehicleReport::from).collect());
        for v in &mut vehicles {
            v.reset_counters();
        }
        self.registry = vehicles;
        self.trips.clear();
        self.phase = Phase::Setup;

        info!(
            passengers = report.total_passengers(),
            trips = report.total_trips(),
            "journey ended"
        );
        Ok(report)
    }

    pub(super) fn require_setup(&self) -> FleetResult<()> {
        match self.phase {
            Phase::Setup => Ok(()),
            Phase::JourneyActive => Err(FleetError::JourneyInProgress),
        }
    }

    pub(super) fn require_active(&self) -> FleetResult<()> {
        match self.phase {
            Phase::JourneyActive => Ok(()),
            Phase::Setup => Err(FleetError::NoActiveJourney),
        }
    }

    /// Position of a garage in the registry. Ids are 1-based and dense.
    pub(super) fn garage_index(&self, id: GarageId) -> Option<usize> {
        id.checked_sub(1).filter(|&i| i < self.garages.len())
    }
}

impl Default for FleetController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_garages() -> FleetController {
        let mut f = FleetController::new();
        f.register_garage("A").expect("setup");
        f.register_garage("B").expect("setup");
        f
    }

    #[test]
    fn test_ids_sequential_per_type() {
        let mut f = FleetController::new();
        assert_eq!(f.register_garage("A"), Ok(1));
        assert_eq!(f.register_vehicle(5), Ok(1));
        assert_eq!(f.register_garage("B"), Ok(2));
        assert_eq!(f.register_vehicle(7), Ok(2));
        assert_eq!(f.register_route(1, 2, 3), Ok(1));
        assert_eq!(f.register_route(2, 1, 3), Ok(2));
    }

    #[test]
    fn test_register_rejects_non_positive_capacity() {
        let mut f = FleetController::new();
        assert_eq!(f.register_vehicle(0), Err(FleetError::InvalidCapacity(0)));
        assert_eq!(f.register_vehicle(-3), Err(FleetError::InvalidCapacity(-3)));
        assert_eq!(f.register_vehicle(1), Ok(1));
    }

    #[test]
    fn test_start_requires_two_garages() {
        let mut f = FleetController::new();
        f.register_garage("A").expect("setup");
        f.register_vehicle(3).expect("setup");
        assert_eq!(
            f.start_journey(),
            Err(FleetError::InsufficientGarages {
                required: 2,
                found: 1
            })
        );
        assert_eq!(f.phase(), Phase::Setup);
        assert_eq!(f.garages().len(), 1);
        assert!(f.garage(1).expect("exists").is_empty());
        assert!(f.vehicle(1).is_some());
    }

    #[test]
    fn test_min_garages_from_config() {
        let mut f = FleetController::with_config(FleetConfig::default().with_min_garages(3));
        f.register_garage("A").expect("setup");
        f.register_garage("B").expect("setup");
        assert!(matches!(
            f.start_journey(),
            Err(FleetError::InsufficientGarages { required: 3, .. })
        ));
        f.register_garage("C").expect("setup");
        assert!(f.start_journey().is_ok());
    }

    #[test]
    fn test_registration_blocked_during_journey() {
        let mut f = two_garages();
        f.start_journey().expect("start");
        assert_eq!(f.register_vehicle(3), Err(FleetError::JourneyInProgress));
        assert_eq!(f.register_garage("C"), Err(FleetError::JourneyInProgress));
        assert_eq!(f.register_route(1, 2, 3), Err(FleetError::JourneyInProgress));
    }

    #[test]
    fn test_double_start_rejected() {
        let mut f = two_garages();
        f.register_vehicle(3).expect("setup");
        f.start_journey().expect("start");
        assert_eq!(f.start_journey(), Err(FleetError::JourneyAlreadyActive));
        let total: usize = f.garages().iter().map(|g| g.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_end_without_journey() {
        let mut f = two_garages();
        assert_eq!(f.end_journey(), Err(FleetError::NoActiveJourney));
    }

    #[test]
    fn test_round_robin_distribution() {
        let mut f = FleetController::new();
        for name in ["A", "B", "C"] {
            f.register_garage(name).expect("setup");
        }
        for cap in 1..=7 {
            f.register_vehicle(cap).expect("setup");
        }
        f.start_journey().expect("start");

        let ids = |f: &FleetController, g| -> Vec<VehicleId> {
            f.list_vehicles_in_garage(g)
                .expect("exists")
                .into_iter()
                .map(|(id, _)| id)
                .collect()
        };
        assert_eq!(ids(&f, 1), vec![7, 4, 1]);
        assert_eq!(ids(&f, 2), vec![5, 2]);
        assert_eq!(ids(&f, 3), vec![6, 3]);
    }

    #[test]
    fn test_end_journey_reports_and_resets() {
        let mut f = two_garages();
        f.register_vehicle(5).expect("setup");
        f.register_vehicle(5).expect("setup");
        f.start_journey().expect("start");
        f.dispatch(1, 2, 4).expect("dispatch");
        f.dispatch(2, 1, 9).expect("dispatch");

        let report = f.end_journey().expect("end");
        assert_eq!(f.phase(), Phase::Setup);
        assert_eq!(
            report.vehicles(),
            &[
                VehicleReport {
                    vehicle_id: 1,
                    passengers_carried: 9,
                    trip_count: 2,
                },
                VehicleReport {
                    vehicle_id: 2,
                    passengers_carried: 4,
                    trip_count: 1,
                },
            ]
        );
        assert_eq!(report.total_passengers(), 13);
        assert_eq!(report.total_trips(), 3);

        assert!(f.trips().is_empty());
        for id in 1..=2 {
            let v = f.vehicle(id).expect("registered");
            assert_eq!(v.passengers_carried(), 0);
            assert_eq!(v.trip_count(), 0);
        }
        assert!(f.garages().iter().all(|g| g.is_empty()));
    }

    #[test]
    fn test_restart_parks_each_vehicle_once() {
        let mut f = two_garages();
        f.register_vehicle(2).expect("setup");
        f.register_vehicle(3).expect("setup");
        f.register_vehicle(4).expect("setup");
        f.start_journey().expect("start");
        f.dispatch(1, 2, 6).expect("dispatch");
        f.end_journey().expect("end");
        f.start_journey().expect("restart");

        let total: usize = f.garages().iter().map(|g| g.len()).sum();
        assert_eq!(total, 3);
        let a: Vec<_> = f.list_vehicles_in_garage(1).expect("exists");
        assert_eq!(a, vec![(3, 4), (1, 2)]);
    }
}
