//! Transport catalogue: stops, bus lines and road distances.
//!
//! The catalogue is filled during a bulk load and is read-only afterwards.
//! Stops get stable indices in insertion order; every name lookup goes
//! through a name → index map populated on insertion.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{Bus, BusId, BusStats, CatalogueError, Coordinates, Stop, StopId};

/// Stops, bus lines and pairwise road distances.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_ids: HashMap<String, StopId>,
    bus_ids: HashMap<String, BusId>,
    /// Buses serving each stop, indexed by `StopId`.
    stop_buses: Vec<BTreeSet<String>>,
    /// Road distances keyed by the ordered pair they were supplied for.
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop and return its index.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStop` if a stop with this name already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::catalogue::TransportCatalogue;
    /// use transit_catalogue::domain::{Coordinates, StopId};
    ///
    /// let mut catalogue = TransportCatalogue::new();
    /// let a = catalogue.add_stop("A", Coordinates::new(55.6, 37.2)).unwrap();
    /// let b = catalogue.add_stop("B", Coordinates::new(55.5, 37.2)).unwrap();
    /// assert_eq!((a, b), (StopId(0), StopId(1)));
    /// assert!(catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).is_err());
    /// ```
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_ids.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_ids.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.stop_buses.push(BTreeSet::new());
        Ok(id)
    }

    /// Register a bus line.
    ///
    /// Stop names that are not registered are dropped from the line rather
    /// than failing it, so a line may end up with fewer stops than declared.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateBus` if a bus with this name already exists.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.bus_ids.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }

        let mut stops = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            match self.stop_id(stop_name.as_ref()) {
                Some(id) => stops.push(id),
                None => warn!(
                    bus = %name,
                    stop = stop_name.as_ref(),
                    "dropping unknown stop from bus line"
                ),
            }
        }

        for stop in &stops {
            self.stop_buses[stop.index()].insert(name.clone());
        }

        let id = BusId(self.buses.len());
        debug!(bus = %name, stops = stops.len(), is_roundtrip, "added bus");
        self.bus_ids.insert(name.clone(), id);
        self.buses.push(Bus::new(name, stops, is_roundtrip));
        Ok(id)
    }

    /// Record the road distance from `from` to `to` in meters.
    ///
    /// A later call for the same ordered pair overwrites the earlier value.
    ///
    /// # Errors
    ///
    /// Returns `StopNotFound` for unknown names and `InvalidDistance` for
    /// negative or non-finite distances.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.add_distance_by_id(from_id, to_id, meters)
    }

    /// Record a road distance between two registered stops.
    pub fn add_distance_by_id(
        &mut self,
        from: StopId,
        to: StopId,
        meters: f64,
    ) -> Result<(), CatalogueError> {
        for id in [from, to] {
            if self.stop(id).is_none() {
                return Err(CatalogueError::StopNotFound(format!("#{id}")));
            }
        }
        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: self.stop_name(from).to_string(),
                to: self.stop_name(to).to_string(),
                distance: meters,
            });
        }
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Road distance in meters between two stops, by name.
    ///
    /// # Errors
    ///
    /// Returns `StopNotFound` for unknown names and `DistanceNotFound` when
    /// no distance was supplied in either direction.
    pub fn real_distance(&self, from: &str, to: &str) -> Result<f64, CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.real_distance_by_id(from_id, to_id)
    }

    /// Road distance in meters between two stops.
    ///
    /// The distance from a stop to itself is always 0, even if one was
    /// supplied. Otherwise tries `(from, to)` first and falls back to
    /// `(to, from)`.
    pub fn real_distance_by_id(&self, from: StopId, to: StopId) -> Result<f64, CatalogueError> {
        if from == to {
            return Ok(0.0);
        }
        if let Some(&meters) = self
            .distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
        {
            return Ok(meters);
        }
        Err(CatalogueError::DistanceNotFound {
            from: self.stop_name(from).to_string(),
            to: self.stop_name(to).to_string(),
        })
    }

    /// Great-circle distance in meters between two stops, by name.
    pub fn geo_distance(&self, from: &str, to: &str) -> Result<f64, CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.geo_distance_by_id(from_id, to_id)
    }

    /// Great-circle distance in meters between two stops.
    ///
    /// # Errors
    ///
    /// Returns `StopNotFound` if either id is not registered.
    pub fn geo_distance_by_id(&self, from: StopId, to: StopId) -> Result<f64, CatalogueError> {
        let from_stop = self
            .stop(from)
            .ok_or_else(|| CatalogueError::StopNotFound(format!("#{from}")))?;
        let to_stop = self
            .stop(to)
            .ok_or_else(|| CatalogueError::StopNotFound(format!("#{to}")))?;
        if from == to {
            return Ok(0.0);
        }
        Ok(from_stop.coordinates.distance_to(&to_stop.coordinates))
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.index()])
    }

    /// Look up a bus by name.
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_ids.get(name).map(|id| &self.buses[id.0])
    }

    /// Index of the stop with this name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    /// Stop at an index.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    /// Bus at an index.
    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.0)
    }

    /// Names of the buses serving a stop, sorted.
    ///
    /// Returns `None` for an unknown stop and an empty set for a stop no
    /// bus calls at.
    pub fn stop_buses(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.stop_id(name).map(|id| &self.stop_buses[id.index()])
    }

    /// Statistics for a bus line.
    ///
    /// Route length sums road distances along the forward trip and, for
    /// there-and-back lines, the return trip. Curvature divides it by the
    /// geographic length of the same trips, and is 0 for lines with zero
    /// geographic length.
    ///
    /// # Errors
    ///
    /// Returns `BusNotFound` for an unknown bus and `DistanceNotFound` when
    /// two consecutive stops have no road distance.
    pub fn bus_stats(&self, name: &str) -> Result<BusStats, CatalogueError> {
        let bus = self
            .find_bus(name)
            .ok_or_else(|| CatalogueError::BusNotFound(name.to_string()))?;

        let forward = bus.forward_stops();
        let mut route_length = 0.0;
        let mut geo_length = 0.0;
        for hop in forward.windows(2) {
            route_length += self.real_distance_by_id(hop[0], hop[1])?;
            geo_length += self.geo_distance_by_id(hop[0], hop[1])?;
        }

        if bus.has_return_trip() {
            for hop in forward.windows(2) {
                route_length += self.real_distance_by_id(hop[1], hop[0])?;
            }
            geo_length *= 2.0;
        }

        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };

        Ok(BusStats {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }

    /// All stops in index order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// All supplied distances as `(from, to, meters)`, in no particular order.
    pub fn distances(&self) -> impl Iterator<Item = (StopId, StopId, f64)> + '_ {
        self.distances
            .iter()
            .map(|(&(from, to), &meters)| (from, to, meters))
    }

    /// Number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of registered buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::StopNotFound(name.to_string()))
    }

    fn stop_name(&self, id: StopId) -> &str {
        self.stops
            .get(id.index())
            .map(|stop| stop.name.as_str())
            .unwrap_or("<unknown>")
    }
}
