//! Journey planner over the transit graph.
//!
//! This module turns a loaded catalogue into a directed weighted graph and
//! answers "fastest route from A to B" queries over it:
//!
//! - [`TransitGraph`] holds one vertex per stop and one edge per ordered
//!   pair of stops on each bus line
//! - [`Router`] runs Dijkstra's algorithm over the graph
//! - `itinerary::decode` turns the edges found into wait and ride legs
//! - [`TransitNetwork`] ties them together behind name-based queries

mod config;
mod graph;
mod itinerary;
mod network;
mod search;

#[cfg(test)]
mod search_tests;

pub use config::RoutingSettings;
pub use graph::{Edge, EdgeId, GraphError, TransitGraph};
pub use network::TransitNetwork;
pub use search::{Route, RouteError, Router};
