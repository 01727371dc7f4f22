//! Directed weighted graph over the stops of a catalogue.
//!
//! There is one vertex per stop, keyed by `StopId`. For every bus line the
//! graph holds an edge between every ordered pair of stops the bus visits,
//! not just neighbouring ones: riding through several stops is a single
//! edge charged one wait plus the travel time over the whole span. A plain
//! shortest-path search then prefers staying on the bus over getting off
//! and waiting again, without tracking which bus the passenger is on.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::RoutingSettings;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, BusId, CatalogueError, StopId};

/// Errors from building or restoring a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Routing settings would produce negative or non-finite weights
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// Base data needed for a weight is missing
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// An edge refers to a vertex the graph does not have
    #[error("edge {edge} refers to vertex {vertex}, graph has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// An edge refers to a bus the catalogue does not have
    #[error("edge {edge} refers to unknown bus {bus}")]
    UnknownBus { edge: usize, bus: usize },

    /// An edge weight is negative or non-finite
    #[error("edge {edge} has invalid weight {weight}")]
    InvalidWeight { edge: usize, weight: f64 },

    /// The graph was built for a different set of stops
    #[error("graph has {graph} vertices but the catalogue has {stops} stops")]
    VertexCountMismatch { graph: usize, stops: usize },
}

/// Index of an edge within the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// A ride on one bus from one stop to a later stop without getting off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Boarding stop
    pub from: StopId,
    /// Alighting stop
    pub to: StopId,
    /// Number of stop-to-stop hops ridden
    pub span_count: usize,
    /// Bus ridden
    pub bus: BusId,
    /// Wait time plus riding time, in minutes
    pub weight: f64,
}

/// Immutable routing graph.
///
/// Any change to stops, buses, distances or settings requires building a
/// new graph; there is no way to edit one in place.
///
/// # Invariants
///
/// - Every edge endpoint is below `vertex_count()`
/// - Every edge weight is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct TransitGraph {
    edges: Vec<Edge>,
    /// Outgoing edges per vertex, in insertion order.
    incidence: Vec<Vec<EdgeId>>,
}

impl TransitGraph {
    /// Build the graph for a fully loaded catalogue.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if the settings would produce invalid
    /// weights, and `Catalogue(DistanceNotFound)` if two consecutive stops
    /// of a line have no road distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::catalogue::TransportCatalogue;
    /// use transit_catalogue::domain::Coordinates;
    /// use transit_catalogue::planner::{RoutingSettings, TransitGraph};
    ///
    /// let mut catalogue = TransportCatalogue::new();
    /// catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
    /// catalogue.add_stop("B", Coordinates::new(0.0, 0.01)).unwrap();
    /// catalogue.add_stop("C", Coordinates::new(0.0, 0.02)).unwrap();
    /// catalogue.add_distance("A", "B", 1000.0).unwrap();
    /// catalogue.add_distance("B", "C", 1000.0).unwrap();
    /// catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();
    ///
    /// let graph = TransitGraph::build(&catalogue, &RoutingSettings::new(5.0, 6.0)).unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// // A-B, A-C and B-C, each in both directions
    /// assert_eq!(graph.edge_count(), 6);
    /// ```
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<Self, GraphError> {
        settings.validate()?;

        let mut graph = Self::with_vertices(catalogue.stop_count());
        for (index, bus) in catalogue.buses().iter().enumerate() {
            graph.add_bus_edges(BusId(index), bus, catalogue, settings)?;
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            buses = catalogue.bus_count(),
            "built transit graph"
        );

        Ok(graph)
    }

    /// Restore a graph from a previously built edge list.
    ///
    /// Edge ids are the positions in `edges`.
    ///
    /// # Errors
    ///
    /// Returns `VertexOutOfRange` or `InvalidWeight` for edges that break
    /// the graph invariants.
    pub fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut graph = Self::with_vertices(vertex_count);
        for (index, edge) in edges.into_iter().enumerate() {
            for vertex in [edge.from, edge.to] {
                if vertex.index() >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge: index,
                        vertex: vertex.index(),
                        vertex_count,
                    });
                }
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(GraphError::InvalidWeight {
                    edge: index,
                    weight: edge.weight,
                });
            }
            graph.push_edge(edge);
        }
        Ok(graph)
    }

    /// Number of vertices (equal to the catalogue's stop count).
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving a vertex, in insertion order.
    pub fn outgoing(&self, vertex: StopId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.incidence
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| (id, &self.edges[id.0]))
    }

    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.incidence[edge.from.index()].push(id);
        self.edges.push(edge);
        id
    }

    /// Add an edge for every ordered pair of stops on the bus.
    fn add_bus_edges(
        &mut self,
        bus_id: BusId,
        bus: &Bus,
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<(), GraphError> {
        let stops = bus.forward_stops();
        if stops.len() < 2 {
            debug!(bus = %bus.name, "bus has fewer than two stops, no edges");
            return Ok(());
        }

        // Road distance of each hop, riding forward and riding back
        let mut forward_hops = Vec::with_capacity(stops.len() - 1);
        let mut backward_hops = Vec::with_capacity(stops.len() - 1);
        for hop in stops.windows(2) {
            forward_hops.push(catalogue.real_distance_by_id(hop[0], hop[1])?);
            if bus.has_return_trip() {
                backward_hops.push(catalogue.real_distance_by_id(hop[1], hop[0])?);
            }
        }

        let wait = settings.wait_time_mins();
        let edges_before = self.edge_count();

        for i in 0..stops.len() {
            let mut forward = 0.0;
            let mut backward = 0.0;
            for j in (i + 1)..stops.len() {
                forward += forward_hops[j - 1];
                self.push_edge(Edge {
                    from: stops[i],
                    to: stops[j],
                    span_count: j - i,
                    bus: bus_id,
                    weight: wait + settings.travel_time_mins(forward),
                });

                if bus.has_return_trip() {
                    backward += backward_hops[j - 1];
                    self.push_edge(Edge {
                        from: stops[j],
                        to: stops[i],
                        span_count: j - i,
                        bus: bus_id,
                        weight: wait + settings.travel_time_mins(backward),
                    });
                }
            }
        }

        debug!(
            bus = %bus.name,
            stops = stops.len(),
            edges = self.edge_count() - edges_before,
            "added bus edges"
        );
        Ok(())
    }
}
