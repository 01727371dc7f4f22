//! Data transfer objects for the JSON request document and its responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BusStats, Itinerary, Leg};
use crate::persistence::SerializationSettings;
use crate::planner::RoutingSettings;

/// Error message for any query that cannot be answered.
pub const NOT_FOUND: &str = "not found";

/// A whole input document.
///
/// Every section is optional; which ones are needed depends on the mode.
/// Keys this crate does not use (such as render settings) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDocument {
    /// Where the snapshot is written or read
    #[serde(default)]
    pub serialization_settings: Option<SerializationSettings>,

    /// Wait time and bus speed for the routing graph
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Stops and buses to load
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries to answer
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A stop or bus to add to the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A stop with its outgoing road distances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    /// Unique stop name
    pub name: String,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Road distance in meters from this stop to each named stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// A bus line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    /// Unique bus name
    pub name: String,

    /// Stop names in travel order
    pub stops: Vec<String>,

    /// Looped line if true, there-and-back otherwise
    #[serde(default)]
    pub is_roundtrip: bool,
}

/// A query against the loaded network.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics for a bus line
    Bus { id: i64, name: String },

    /// Buses serving a stop
    Stop { id: i64, name: String },

    /// Fastest route between two stops
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    /// Request id echoed back in the response.
    pub fn id(&self) -> i64 {
        match self {
            Self::Bus { id, .. } | Self::Stop { id, .. } | Self::Route { id, .. } => *id,
        }
    }
}

/// Answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

impl StatResponse {
    /// The "not found" answer for a request.
    pub fn not_found(request_id: i64) -> Self {
        Self::Error(ErrorResponse {
            request_id,
            error_message: NOT_FOUND.to_string(),
        })
    }
}

/// Bus line statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    pub curvature: f64,
}

impl BusResponse {
    pub fn new(request_id: i64, stats: &BusStats) -> Self {
        Self {
            request_id,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            route_length: stats.route_length,
            curvature: stats.curvature,
        }
    }
}

/// Buses serving a stop, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    pub buses: Vec<String>,
}

/// A fastest itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,

    /// Total time in minutes
    pub total_time: f64,

    /// Waits and rides in travel order
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    pub fn new(request_id: i64, itinerary: &Itinerary) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time(),
            items: itinerary.legs().iter().map(RouteItem::from).collect(),
        }
    }
}

/// One item of a route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Leg> for RouteItem {
    fn from(leg: &Leg) -> Self {
        match leg {
            Leg::Wait(wait) => Self::Wait {
                stop_name: wait.stop_name.clone(),
                time: wait.time,
            },
            Leg::Ride(ride) => Self::Bus {
                bus: ride.bus.clone(),
                span_count: ride.span_count,
                time: ride.time,
            },
        }
    }
}

/// A request that could not be answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}
