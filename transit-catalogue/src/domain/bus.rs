//! Bus line types.
//!
//! A `Bus` is a named, ordered sequence of stops. Round-trip lines are
//! ridden once around the loop; all other lines are ridden forward and
//! then back along the same stops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::StopId;

/// Index of a bus line within the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BusId(pub usize);

/// A bus line.
///
/// # Invariants
///
/// - Every stop id refers to a stop registered in the owning catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    /// Unique line name
    pub name: String,
    /// Stops in the order they were declared
    pub stops: Vec<StopId>,
    /// True for a one-way loop, false for a there-and-back line
    pub is_roundtrip: bool,
}

impl Bus {
    /// Creates a bus line.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// Number of stops a passenger passes riding the whole line.
    ///
    /// Equal to the declared stop count for round trips, `2n - 1` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::domain::{Bus, StopId};
    ///
    /// let stops = vec![StopId(0), StopId(1), StopId(2)];
    /// assert_eq!(Bus::new("loop", stops.clone(), true).stop_count(), 3);
    /// assert_eq!(Bus::new("line", stops, false).stop_count(), 5);
    /// ```
    pub fn stop_count(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }

    /// Number of distinct stops on the line.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Stops in riding order for the forward direction.
    ///
    /// For a round trip whose last stop is not its first, the closing hop
    /// back to the first stop is appended.
    pub fn forward_stops(&self) -> Vec<StopId> {
        let mut stops = self.stops.clone();
        if self.is_roundtrip
            && let (Some(&first), Some(&last)) = (stops.first(), stops.last())
            && first != last
        {
            stops.push(first);
        }
        stops
    }

    /// Whether the line is also ridden in reverse.
    pub fn has_return_trip(&self) -> bool {
        !self.is_roundtrip
    }
}

/// Statistics reported for a bus line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops passed riding the whole line
    pub stop_count: usize,
    /// Distinct stops on the line
    pub unique_stop_count: usize,
    /// Real (road) route length in meters
    pub route_length: f64,
    /// Real route length divided by geographic route length
    pub curvature: f64,
}
