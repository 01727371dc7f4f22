//! Shortest-path search over the transit graph.
//!
//! Dijkstra's algorithm from a single source, stopping as soon as the
//! destination is settled. All weights are non-negative by construction
//! of `TransitGraph`.
//!
//! Ties are broken deterministically: the queue pops equal costs by lowest
//! vertex id, edges are relaxed in insertion order, and a vertex's
//! predecessor only changes on a strict improvement.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::trace;

use super::graph::{EdgeId, TransitGraph};
use crate::domain::StopId;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A stop name in the query is not registered
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

/// Result of a successful search: total weight and the edges taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Sum of edge weights, in minutes.
    pub total_time: f64,

    /// Edges in travel order.
    pub edges: Vec<EdgeId>,
}

impl Route {
    /// The route from a stop to itself.
    pub fn trivial() -> Self {
        Self {
            total_time: 0.0,
            edges: Vec::new(),
        }
    }

    /// Returns true if source and destination are the same stop.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Priority queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<f64>,
    vertex: StopId,
}

// BinaryHeap is a max-heap: flip the cost comparison so the cheapest state
// pops first, then prefer the lowest vertex id among equal costs.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path router over an immutable graph.
///
/// Borrowing the graph keeps the router free to create: a graph restored
/// from a snapshot can be queried straight away.
#[derive(Debug, Clone, Copy)]
pub struct Router<'g> {
    graph: &'g TransitGraph,
}

impl<'g> Router<'g> {
    /// Create a router for a graph.
    pub fn new(graph: &'g TransitGraph) -> Self {
        Self { graph }
    }

    /// Fastest route between two vertices.
    ///
    /// Returns `None` when `to` cannot be reached from `from`, or when
    /// either vertex is not in the graph.
    pub fn route(&self, from: StopId, to: StopId) -> Option<Route> {
        let vertex_count = self.graph.vertex_count();
        if from.index() >= vertex_count || to.index() >= vertex_count {
            return None;
        }
        if from == to {
            return Some(Route::trivial());
        }

        let mut dist = vec![f64::INFINITY; vertex_count];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut heap = BinaryHeap::new();
        let mut settled = 0usize;

        dist[from.index()] = 0.0;
        heap.push(State {
            cost: OrderedFloat(0.0),
            vertex: from,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            let cost = cost.into_inner();
            // Stale entry, a cheaper path was already found
            if cost > dist[vertex.index()] {
                continue;
            }
            settled += 1;
            if vertex == to {
                break;
            }

            for (edge_id, edge) in self.graph.outgoing(vertex) {
                let candidate = cost + edge.weight;
                if candidate < dist[edge.to.index()] {
                    dist[edge.to.index()] = candidate;
                    prev_edge[edge.to.index()] = Some(edge_id);
                    heap.push(State {
                        cost: OrderedFloat(candidate),
                        vertex: edge.to,
                    });
                }
            }
        }

        trace!(%from, %to, settled, "dijkstra finished");

        let total_time = dist[to.index()];
        if total_time.is_infinite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = to;
        while let Some(edge_id) = prev_edge[current.index()] {
            edges.push(edge_id);
            current = self.graph.edges()[edge_id.0].from;
        }
        edges.reverse();

        Some(Route { total_time, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusId;
    use crate::planner::graph::Edge;

    fn edge(from: usize, to: usize, weight: f64) -> Edge {
        Edge {
            from: StopId(from),
            to: StopId(to),
            span_count: 1,
            bus: BusId(0),
            weight,
        }
    }

    fn graph(vertex_count: usize, edges: Vec<Edge>) -> TransitGraph {
        TransitGraph::from_edges(vertex_count, edges).unwrap()
    }

    #[test]
    fn same_vertex_is_trivial() {
        let g = graph(2, vec![edge(0, 1, 3.0)]);
        let route = Router::new(&g).route(StopId(1), StopId(1)).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total_time, 0.0);
    }

    #[test]
    fn single_edge() {
        let g = graph(2, vec![edge(0, 1, 3.0)]);
        let route = Router::new(&g).route(StopId(0), StopId(1)).unwrap();
        assert_eq!(route.total_time, 3.0);
        assert_eq!(route.edges, vec![EdgeId(0)]);
    }

    #[test]
    fn prefers_cheaper_two_hop_path() {
        // 0 -> 2 directly costs 10, via 1 costs 4 + 4
        let g = graph(
            3,
            vec![edge(0, 2, 10.0), edge(0, 1, 4.0), edge(1, 2, 4.0)],
        );
        let route = Router::new(&g).route(StopId(0), StopId(2)).unwrap();
        assert_eq!(route.total_time, 8.0);
        assert_eq!(route.edges, vec![EdgeId(1), EdgeId(2)]);
    }

    #[test]
    fn unreachable_is_none() {
        let g = graph(3, vec![edge(0, 1, 1.0)]);
        assert!(Router::new(&g).route(StopId(0), StopId(2)).is_none());
        // Edges are directed
        assert!(Router::new(&g).route(StopId(1), StopId(0)).is_none());
    }

    #[test]
    fn out_of_range_vertex_is_none() {
        let g = graph(2, vec![edge(0, 1, 1.0)]);
        assert!(Router::new(&g).route(StopId(0), StopId(5)).is_none());
        assert!(Router::new(&g).route(StopId(5), StopId(5)).is_none());
    }

    #[test]
    fn tie_keeps_first_inserted_edge() {
        // Two parallel edges with equal weight
        let g = graph(2, vec![edge(0, 1, 2.0), edge(0, 1, 2.0)]);
        let route = Router::new(&g).route(StopId(0), StopId(1)).unwrap();
        assert_eq!(route.edges, vec![EdgeId(0)]);
    }

    #[test]
    fn tie_between_paths_prefers_lower_vertex() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 2; vertex 1 settles first
        let g = graph(
            4,
            vec![
                edge(0, 2, 1.0),
                edge(0, 1, 1.0),
                edge(2, 3, 1.0),
                edge(1, 3, 1.0),
            ],
        );
        let route = Router::new(&g).route(StopId(0), StopId(3)).unwrap();
        assert_eq!(route.total_time, 2.0);
        assert_eq!(route.edges, vec![EdgeId(1), EdgeId(3)]);
    }

    #[test]
    fn zero_weight_cycle_terminates() {
        let g = graph(
            3,
            vec![edge(0, 1, 0.0), edge(1, 0, 0.0), edge(1, 2, 1.0)],
        );
        let route = Router::new(&g).route(StopId(0), StopId(2)).unwrap();
        assert_eq!(route.total_time, 1.0);
        assert_eq!(route.edges, vec![EdgeId(0), EdgeId(2)]);
    }

    #[test]
    fn self_loop_edges_ignored() {
        let g = graph(2, vec![edge(0, 0, 5.0), edge(0, 1, 1.0)]);
        let route = Router::new(&g).route(StopId(0), StopId(1)).unwrap();
        assert_eq!(route.edges, vec![EdgeId(1)]);
    }

    #[test]
    fn state_ordering_is_min_heap() {
        let mut heap = BinaryHeap::new();
        heap.push(State {
            cost: OrderedFloat(5.0),
            vertex: StopId(0),
        });
        heap.push(State {
            cost: OrderedFloat(1.0),
            vertex: StopId(2),
        });
        heap.push(State {
            cost: OrderedFloat(1.0),
            vertex: StopId(1),
        });

        assert_eq!(heap.pop().map(|s| s.vertex), Some(StopId(1)));
        assert_eq!(heap.pop().map(|s| s.vertex), Some(StopId(2)));
        assert_eq!(heap.pop().map(|s| s.vertex), Some(StopId(0)));
    }

    #[test]
    fn state_equality_agrees_with_ordering() {
        let zero = State {
            cost: OrderedFloat(0.0),
            vertex: StopId(1),
        };
        let negative_zero = State {
            cost: OrderedFloat(-0.0),
            vertex: StopId(1),
        };
        assert_eq!(zero, negative_zero);
        assert_eq!(zero.cmp(&negative_zero), Ordering::Equal);

        let other_vertex = State {
            cost: OrderedFloat(0.0),
            vertex: StopId(2),
        };
        assert_ne!(zero, other_vertex);
        assert_ne!(zero.cmp(&other_vertex), Ordering::Equal);
    }

    #[test]
    fn error_display() {
        let err = RouteError::StopNotFound("Nowhere".into());
        assert_eq!(err.to_string(), "stop not found: Nowhere");

        let err = RouteError::Unreachable {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "no route from A to B");
    }
}
