//! A loaded catalogue together with its routing graph.
//!
//! `TransitNetwork` is the only query surface. It can only be obtained with
//! a built (or restored) graph, so there is no way to ask for a route
//! before the graph exists.

use std::collections::BTreeSet;

use tracing::debug;

use super::config::RoutingSettings;
use super::graph::{GraphError, TransitGraph};
use super::itinerary;
use super::search::{RouteError, Router};
use crate::catalogue::TransportCatalogue;
use crate::domain::{BusStats, CatalogueError, Itinerary};

/// Catalogue, routing settings and the graph built from them.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    catalogue: TransportCatalogue,
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl TransitNetwork {
    /// Build the routing graph for a fully loaded catalogue.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::catalogue::TransportCatalogue;
    /// use transit_catalogue::domain::Coordinates;
    /// use transit_catalogue::planner::{RoutingSettings, TransitNetwork};
    ///
    /// let mut catalogue = TransportCatalogue::new();
    /// catalogue.add_stop("X", Coordinates::new(0.0, 0.0)).unwrap();
    /// catalogue.add_stop("Y", Coordinates::new(0.0, 1.0)).unwrap();
    /// catalogue.add_distance("X", "Y", 1000.0).unwrap();
    /// catalogue.add_bus("1", &["X", "Y"], false).unwrap();
    ///
    /// let network = TransitNetwork::build(catalogue, RoutingSettings::new(5.0, 6.0)).unwrap();
    /// let itinerary = network.find_route("X", "Y").unwrap();
    /// assert_eq!(itinerary.total_time(), 15.0);
    /// ```
    pub fn build(
        catalogue: TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, GraphError> {
        let graph = TransitGraph::build(&catalogue, &settings)?;
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    /// Assemble a network from a graph built earlier for this catalogue.
    ///
    /// # Errors
    ///
    /// Returns `VertexCountMismatch` if the graph was built for a different
    /// number of stops, `UnknownBus` if an edge names a bus the catalogue
    /// lacks, and `InvalidSettings` for unusable settings.
    pub fn from_parts(
        catalogue: TransportCatalogue,
        settings: RoutingSettings,
        graph: TransitGraph,
    ) -> Result<Self, GraphError> {
        settings.validate()?;

        if graph.vertex_count() != catalogue.stop_count() {
            return Err(GraphError::VertexCountMismatch {
                graph: graph.vertex_count(),
                stops: catalogue.stop_count(),
            });
        }
        if let Some((index, edge)) = graph
            .edges()
            .iter()
            .enumerate()
            .find(|(_, edge)| catalogue.bus(edge.bus).is_none())
        {
            return Err(GraphError::UnknownBus {
                edge: index,
                bus: edge.bus.0,
            });
        }

        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    /// Fastest itinerary between two stops, by name.
    ///
    /// # Errors
    ///
    /// Returns `StopNotFound` if either name is unknown and `Unreachable`
    /// if no sequence of rides connects the stops.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let from_id = self
            .catalogue
            .stop_id(from)
            .ok_or_else(|| RouteError::StopNotFound(from.to_string()))?;
        let to_id = self
            .catalogue
            .stop_id(to)
            .ok_or_else(|| RouteError::StopNotFound(to.to_string()))?;

        let route = Router::new(&self.graph)
            .route(from_id, to_id)
            .ok_or_else(|| RouteError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        debug!(
            from,
            to,
            total_time = route.total_time,
            edges = route.edges.len(),
            "found route"
        );

        Ok(itinerary::decode(
            &route,
            &self.graph,
            &self.catalogue,
            self.settings.wait_time_mins(),
        ))
    }

    /// Statistics for a bus line.
    pub fn bus_stats(&self, name: &str) -> Result<BusStats, CatalogueError> {
        self.catalogue.bus_stats(name)
    }

    /// Sorted names of buses serving a stop; `None` for an unknown stop.
    pub fn stop_buses(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.catalogue.stop_buses(name)
    }

    /// The underlying catalogue.
    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// The routing settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// The routing graph.
    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }
}
