//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Settings for a [`FleetController`](crate::fleet::FleetController).
///
/// # Examples
///
/// ```
/// use garage_fleet::config::FleetConfig;
///
/// let config = FleetConfig::default().with_min_garages(3);
/// assert_eq!(config.min_garages(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    min_garages: usize,
}

impl FleetConfig {
    /// Sets how many garages must exist before a journey can start.
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_min_garages(mut self, n: usize) -> Self {
        self.min_garages = n.max(1);
        self
    }

    /// Minimum garages required by `start_journey`.
    pub fn min_garages(&self) -> usize {
        self.min_garages.max(1)
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> crate::error::FleetResult<Self> {
        serde_json::from_str(s).map_err(|e| crate::error::FleetError::Config(e.to_string()))
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self { min_garages: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        assert_eq!(FleetConfig::default().min_garages(), 2);
    }

    #[test]
    fn test_config_clamps_zero() {
        assert_eq!(FleetConfig::default().with_min_garages(0).min_garages(), 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_config_from_json() {
        let c = FleetConfig::from_json_str(r#"{"min_garages": 4}"#).expect("valid");
        assert_eq!(c.min_garages(), 4);
        let d = FleetConfig::from_json_str("{}").expect("valid");
        assert_eq!(d, FleetConfig::default());
        assert!(matches!(
            FleetConfig::from_json_str("not json"),
            Err(crate::error::FleetError::Config(_))
        ));
    }
}
