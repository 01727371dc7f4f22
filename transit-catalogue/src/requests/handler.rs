//! Loading base requests and answering stat requests.

use tracing::{debug, info, warn};

use super::dto::{
    BaseRequest, BusResponse, RequestDocument, RouteResponse, StatRequest, StatResponse,
    StopResponse,
};
use super::error::RequestError;
use crate::catalogue::TransportCatalogue;
use crate::domain::{CatalogueError, Coordinates};
use crate::persistence;
use crate::planner::{RouteError, TransitNetwork};

/// Load base requests into a fresh catalogue.
///
/// Stops are added first, then road distances, then buses, so distances and
/// lines may name stops declared later in the list. Distances naming an
/// unknown stop are skipped.
pub fn load_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                stop.name.clone(),
                Coordinates::new(stop.latitude, stop.longitude),
            )?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, &meters) in &stop.road_distances {
                if catalogue.stop_id(to).is_none() {
                    warn!(from = %stop.name, to = %to, "skipping distance to unknown stop");
                    continue;
                }
                catalogue.add_distance(&stop.name, to, meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(bus.name.clone(), bus.stops.as_slice(), bus.is_roundtrip)?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "loaded catalogue"
    );
    Ok(catalogue)
}

/// Load the base requests and build the routing graph.
///
/// Uses default routing settings when the document has none.
pub fn build_network(document: &RequestDocument) -> Result<TransitNetwork, RequestError> {
    let catalogue = load_catalogue(&document.base_requests)?;
    let settings = document.routing_settings.unwrap_or_default();
    Ok(TransitNetwork::build(catalogue, settings)?)
}

/// Build the network and write its snapshot to the configured file.
pub fn make_base(document: &RequestDocument) -> Result<TransitNetwork, RequestError> {
    let serialization = document
        .serialization_settings
        .as_ref()
        .ok_or(RequestError::MissingSection("serialization_settings"))?;

    let network = build_network(document)?;
    persistence::save(&serialization.file, &network)?;
    Ok(network)
}

/// Load the snapshot from the configured file and answer every stat request.
pub fn process_requests(document: &RequestDocument) -> Result<Vec<StatResponse>, RequestError> {
    let serialization = document
        .serialization_settings
        .as_ref()
        .ok_or(RequestError::MissingSection("serialization_settings"))?;

    let network = persistence::load(&serialization.file)?;
    Ok(answer_all(&network, &document.stat_requests))
}

/// Answer requests in order.
pub fn answer_all(network: &TransitNetwork, requests: &[StatRequest]) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| answer(network, request))
        .collect()
}

/// Answer one request. Anything that cannot be answered is "not found".
pub fn answer(network: &TransitNetwork, request: &StatRequest) -> StatResponse {
    let id = request.id();

    match request {
        StatRequest::Bus { name, .. } => match network.bus_stats(name) {
            Ok(stats) => StatResponse::Bus(BusResponse::new(id, &stats)),
            Err(err) => {
                if !err.is_not_found() {
                    warn!(request_id = id, bus = %name, error = %err, "bus statistics failed");
                }
                StatResponse::not_found(id)
            }
        },
        StatRequest::Stop { name, .. } => match network.stop_buses(name) {
            Some(buses) => StatResponse::Stop(StopResponse {
                request_id: id,
                buses: buses.iter().cloned().collect(),
            }),
            None => StatResponse::not_found(id),
        },
        StatRequest::Route { from, to, .. } => match network.find_route(from, to) {
            Ok(itinerary) => StatResponse::Route(RouteResponse::new(id, &itinerary)),
            Err(err @ (RouteError::StopNotFound(_) | RouteError::Unreachable { .. })) => {
                debug!(request_id = id, error = %err, "route not found");
                StatResponse::not_found(id)
            }
        },
    }
}
