//! Routing settings for the journey planner.

use serde::{Deserialize, Serialize};

use super::graph::GraphError;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Network-wide routing parameters.
///
/// Set once before the graph is built; every edge weight derives from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting for any bus at any stop (minutes).
    pub bus_wait_time: f64,

    /// Bus speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that every derived edge weight will be finite and non-negative.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(GraphError::InvalidSettings(
                "bus wait time must be a non-negative number of minutes",
            ));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(GraphError::InvalidSettings(
                "bus velocity must be a positive number of km/h",
            ));
        }
        Ok(())
    }

    /// Returns the wait time in minutes.
    pub fn wait_time_mins(&self) -> f64 {
        self.bus_wait_time
    }

    /// Returns the riding time in minutes for a road distance in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::planner::RoutingSettings;
    ///
    /// let settings = RoutingSettings::new(5.0, 6.0);
    /// assert_eq!(settings.travel_time_mins(1000.0), 10.0);
    /// ```
    pub fn travel_time_mins(&self, meters: f64) -> f64 {
        meters * MINUTES_PER_HOUR / (self.bus_velocity * METERS_PER_KM)
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}
