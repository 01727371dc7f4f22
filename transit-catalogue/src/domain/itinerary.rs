//! Itinerary types.
//!
//! An `Itinerary` is the answer to a route query: a flat list of legs that
//! alternate between waiting at a stop and riding a bus.

/// Waiting for a bus at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    /// Stop where the passenger waits
    pub stop_name: String,
    /// Waiting time in minutes
    pub time: f64,
}

/// Riding a bus without getting off.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    /// Bus line name
    pub bus: String,
    /// Number of stop-to-stop hops ridden
    pub span_count: usize,
    /// Riding time in minutes
    pub time: f64,
}

/// A segment of an itinerary: either a wait or a ride.
#[derive(Debug, Clone, PartialEq)]
pub enum Leg {
    /// Waiting at a stop
    Wait(Wait),
    /// Riding a bus
    Ride(Ride),
}

impl Leg {
    /// Returns the duration of this leg in minutes.
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait(wait) => wait.time,
            Leg::Ride(ride) => ride.time,
        }
    }

    /// Returns true if this is a wait leg.
    pub fn is_wait(&self) -> bool {
        matches!(self, Leg::Wait(_))
    }

    /// Returns true if this is a ride leg.
    pub fn is_ride(&self) -> bool {
        matches!(self, Leg::Ride(_))
    }

    /// Returns the ride if this is a ride leg.
    pub fn as_ride(&self) -> Option<&Ride> {
        match self {
            Leg::Ride(ride) => Some(ride),
            Leg::Wait(_) => None,
        }
    }

    /// Returns the wait if this is a wait leg.
    pub fn as_wait(&self) -> Option<&Wait> {
        match self {
            Leg::Wait(wait) => Some(wait),
            Leg::Ride(_) => None,
        }
    }
}

/// The fastest way between two stops.
///
/// # Invariants
///
/// - Legs alternate wait, ride, wait, ride, ...
/// - `total_time` is the routed path weight; it equals the sum of leg times
///   up to floating point rounding
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    total_time: f64,
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from decoded legs.
    pub fn new(total_time: f64, legs: Vec<Leg>) -> Self {
        Self { total_time, legs }
    }

    /// Itinerary for a trip that starts where it ends.
    pub fn empty() -> Self {
        Self::new(0.0, Vec::new())
    }

    /// Total travel time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_ride()).count()
    }

    /// Returns true when no travel is needed.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}
