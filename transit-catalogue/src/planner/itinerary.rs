//! Decoding routed edges into wait and ride legs.

use super::graph::TransitGraph;
use super::search::Route;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Itinerary, Leg, Ride, Wait};

/// Turn a route into legs: for every edge, a wait at its boarding stop
/// followed by a ride on its bus.
///
/// The ride time is the edge weight minus the wait time. Edge endpoints and
/// buses must belong to `catalogue`, which `TransitNetwork` checks when it
/// is assembled.
pub(crate) fn decode(
    route: &Route,
    graph: &TransitGraph,
    catalogue: &TransportCatalogue,
    wait_time: f64,
) -> Itinerary {
    let mut legs = Vec::with_capacity(route.edges.len() * 2);

    // Safe: routes come from this graph, and TransitNetwork checks that edge
    // endpoints and buses exist in the catalogue
    for &edge_id in &route.edges {
        let edge = &graph.edges()[edge_id.0];

        legs.push(Leg::Wait(Wait {
            stop_name: catalogue.stops()[edge.from.index()].name.clone(),
            time: wait_time,
        }));
        legs.push(Leg::Ride(Ride {
            bus: catalogue.buses()[edge.bus.0].name.clone(),
            span_count: edge.span_count,
            time: edge.weight - wait_time,
        }));
    }

    Itinerary::new(route.total_time, legs)
}
