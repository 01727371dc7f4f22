//! Domain types for the transit catalogue.
//!
//! This module contains the core domain model: stops, bus lines and the
//! itineraries produced by route queries. Types that carry invariants
//! enforce them at construction time.

mod bus;
mod error;
mod geo;
mod itinerary;
mod stop;

pub use bus::{Bus, BusId, BusStats};
pub use error::CatalogueError;
pub use geo::{Coordinates, EARTH_RADIUS_M};
pub use itinerary::{Itinerary, Leg, Ride, Wait};
pub use stop::{Stop, StopId};
