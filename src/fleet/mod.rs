//! Fleet controller: registries, journey phases, dispatch and trip queries.
//!
//! - [`FleetController`] — owns every vehicle, garage, route and trip record
//! - [`Phase`] — setup vs. active journey
//!
//! Dispatch pops vehicles from the origin garage, fills each up to its
//! capacity and parks it at the destination until every passenger is
//! served. Work done before the origin runs out of vehicles is kept.

mod controller;
mod dispatch;
mod queries;

pub use controller::{FleetController, Phase};
