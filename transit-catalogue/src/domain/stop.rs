//! Stop types.
//!
//! A `Stop` is a named location with coordinates. A `StopId` is its stable
//! insertion index in the catalogue and doubles as its graph vertex id.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Index of a stop within the catalogue.
///
/// Assigned in insertion order and never reused, so it is stable for the
/// lifetime of the catalogue. The routing graph uses it as the vertex id.
///
/// # Examples
///
/// ```
/// use transit_catalogue::domain::StopId;
///
/// let id = StopId(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(usize::from(id), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the index as a `usize`, for indexing vertex-keyed tables.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StopId {
    fn from(value: usize) -> Self {
        StopId(value)
    }
}

impl From<StopId> for usize {
    fn from(value: StopId) -> Self {
        value.0
    }
}

/// A named stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Geographic position
    pub coordinates: Coordinates,
}

impl Stop {
    /// Creates a stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
