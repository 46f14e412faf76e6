//! Garage type: a named LIFO stack of parked vehicles.

use serde::{Deserialize, Serialize};

use super::{GarageId, Vehicle};

/// A garage that parks vehicles as a stack.
///
/// The most recently parked vehicle is always the next one to leave.
///
/// # Examples
///
/// ```
/// use garage_fleet::models::{Garage, Vehicle};
///
/// let mut g = Garage::new(1, "North");
/// g.park(Vehicle::new(1, 10));
/// g.park(Vehicle::new(2, 20));
/// assert_eq!(g.top().map(|v| v.id()), Some(2));
/// assert_eq!(g.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garage {
    id: GarageId,
    name: String,
    stack: Vec<Vehicle>,
}

impl Garage {
    /// Creates an empty garage.
    pub fn new(id: GarageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stack: Vec::new(),
        }
    }

    /// Garage ID.
    pub fn id(&self) -> GarageId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parks a vehicle on top of the stack.
    pub fn park(&mut self, vehicle: Vehicle) {
        self.stack.push(vehicle);
    }

    /// Removes and returns the top vehicle, if any.
    pub fn depart(&mut self) -> Option<Vehicle> {
        self.stack.pop()
    }

    /// The vehicle that would depart next.
    pub fn top(&self) -> Option<&Vehicle> {
        self.stack.last()
    }

    /// Parked vehicles from top to bottom.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.stack.iter().rev()
    }

    /// Number of parked vehicles.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no vehicle is parked here.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Empties the stack, yielding vehicles bottom to top.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Vehicle> {
        self.stack.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garage_empty() {
        let g = Garage::new(2, "Depot");
        assert_eq!(g.id(), 2);
        assert_eq!(g.name(), "Depot");
        assert!(g.is_empty());
        assert!(g.top().is_none());
    }

    #[test]
    fn test_garage_lifo() {
        let mut g = Garage::new(1, "A");
        g.park(Vehicle::new(1, 4));
        g.park(Vehicle::new(2, 3));
        g.park(Vehicle::new(3, 8));

        let order: Vec<usize> = g.vehicles().map(|v| v.id()).collect();
        assert_eq!(order, vec![3, 2, 1]);

        assert_eq!(g.depart().map(|v| v.id()), Some(3));
        assert_eq!(g.depart().map(|v| v.id()), Some(2));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_garage_depart_empty() {
        let mut g = Garage::new(1, "A");
        assert!(g.depart().is_none());
    }

    #[test]
    fn test_garage_drain() {
        let mut g = Garage::new(1, "A");
        g.park(Vehicle::new(1, 4));
        g.park(Vehicle::new(2, 3));
        let drained: Vec<usize> = g.drain().map(|v| v.id()).collect();
        assert_eq!(drained, vec![1, 2]);
        assert!(g.is_empty());
    }
}
