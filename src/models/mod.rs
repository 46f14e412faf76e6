//! Domain model types for the fleet simulation.
//!
//! Vehicles with fixed capacities, garages that park them as LIFO stacks,
//! reusable routes between garages, and the trip records produced by
//! dispatching vehicles along them.

mod garage;
mod report;
mod route;
mod trip;
mod vehicle;

pub use garage::Garage;
pub use report::{JourneyReport, VehicleReport};
pub use route::Route;
pub use trip::TripRecord;
pub use vehicle::Vehicle;

/// Vehicle identifier, assigned sequentially from 1.
pub type VehicleId = usize;
/// Garage identifier, assigned sequentially from 1.
pub type GarageId = usize;
/// Route identifier, assigned sequentially from 1.
pub type RouteId = usize;
/// Passenger counts and capacities.
///
/// Signed because dispatch requests are not validated: a negative request
/// performs no trips.
pub type PassengerCount = i32;
/// Passenger totals accumulated over many trips.
///
/// Wider than [`PassengerCount`] so repeated full-capacity trips cannot overflow.
pub type PassengerTotal = i64;
