//! End-to-end routing scenarios: catalogue in, itinerary out.

use super::*;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, Leg, Ride, StopId, Wait};

fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates::new(lat, lng)
}

fn network(catalogue: TransportCatalogue, wait: f64, velocity: f64) -> TransitNetwork {
    TransitNetwork::build(catalogue, RoutingSettings::new(wait, velocity)).unwrap()
}

fn rides(itinerary: &crate::domain::Itinerary) -> Vec<(&str, usize, f64)> {
    itinerary
        .legs()
        .iter()
        .filter_map(Leg::as_ride)
        .map(|r| (r.bus.as_str(), r.span_count, r.time))
        .collect()
}

#[test]
fn single_hop_waits_then_rides() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("X", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("Y", coords(0.0, 1.0)).unwrap();
    catalogue.add_distance("X", "Y", 1000.0).unwrap();
    catalogue.add_bus("1", &["X", "Y"], false).unwrap();

    let network = network(catalogue, 5.0, 6.0);
    let itinerary = network.find_route("X", "Y").unwrap();

    assert_eq!(itinerary.total_time(), 15.0);
    assert_eq!(
        itinerary.legs(),
        &[
            Leg::Wait(Wait {
                stop_name: "X".into(),
                time: 5.0,
            }),
            Leg::Ride(Ride {
                bus: "1".into(),
                span_count: 1,
                time: 10.0,
            }),
        ]
    );

    // Return trip reuses the single recorded distance
    let back = network.find_route("Y", "X").unwrap();
    assert_eq!(back.total_time(), 15.0);
}

#[test]
fn same_stop_is_empty_itinerary() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("X", coords(0.0, 0.0)).unwrap();

    let network = network(catalogue, 6.0, 40.0);
    let itinerary = network.find_route("X", "X").unwrap();

    assert!(itinerary.is_empty());
    assert_eq!(itinerary.total_time(), 0.0);
}

#[test]
fn unknown_stop_is_reported() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("X", coords(0.0, 0.0)).unwrap();

    let network = network(catalogue, 6.0, 40.0);
    assert_eq!(
        network.find_route("X", "Ghost"),
        Err(RouteError::StopNotFound("Ghost".into()))
    );
}

#[test]
fn disjoint_lines_are_unreachable() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
    catalogue.add_stop("C", coords(1.0, 0.0)).unwrap();
    catalogue.add_stop("D", coords(1.0, 0.01)).unwrap();
    catalogue.add_distance("A", "B", 800.0).unwrap();
    catalogue.add_distance("C", "D", 800.0).unwrap();
    catalogue.add_bus("1", &["A", "B"], false).unwrap();
    catalogue.add_bus("2", &["C", "D"], false).unwrap();

    let network = network(catalogue, 6.0, 40.0);
    assert_eq!(
        network.find_route("A", "D"),
        Err(RouteError::Unreachable {
            from: "A".into(),
            to: "D".into(),
        })
    );
}

#[test]
fn isolated_stop_is_unreachable() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("Lonely", coords(5.0, 5.0)).unwrap();

    let network = network(catalogue, 6.0, 40.0);
    assert!(matches!(
        network.find_route("A", "Lonely"),
        Err(RouteError::Unreachable { .. })
    ));
}

#[test]
fn staying_aboard_beats_reboarding() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
    catalogue.add_stop("C", coords(0.0, 0.02)).unwrap();
    catalogue.add_distance("A", "B", 1000.0).unwrap();
    catalogue.add_distance("B", "C", 1000.0).unwrap();
    catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();

    let network = network(catalogue, 6.0, 40.0);
    let itinerary = network.find_route("A", "C").unwrap();

    // One wait of 6 and 2000 m at 40 km/h
    assert_eq!(itinerary.total_time(), 9.0);
    assert_eq!(rides(&itinerary), vec![("1", 2, 3.0)]);
}

#[test]
fn shorter_line_wins_over_longer_one() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.05)).unwrap();
    catalogue.add_stop("C", coords(0.0, 0.1)).unwrap();
    catalogue.add_distance("A", "B", 5000.0).unwrap();
    catalogue.add_distance("B", "C", 5000.0).unwrap();
    catalogue.add_distance("A", "C", 3000.0).unwrap();
    catalogue.add_bus("slow", &["A", "B", "C"], false).unwrap();
    catalogue.add_bus("fast", &["A", "C"], false).unwrap();

    let network = network(catalogue, 6.0, 6.0);
    let itinerary = network.find_route("A", "C").unwrap();

    assert_eq!(itinerary.total_time(), 36.0);
    assert_eq!(rides(&itinerary), vec![("fast", 1, 30.0)]);
}

#[test]
fn transfer_between_lines() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("Hub", coords(0.0, 0.01)).unwrap();
    catalogue.add_stop("Z", coords(0.01, 0.01)).unwrap();
    catalogue.add_distance("A", "Hub", 1000.0).unwrap();
    catalogue.add_distance("Hub", "Z", 2000.0).unwrap();
    catalogue.add_bus("red", &["A", "Hub"], false).unwrap();
    catalogue.add_bus("blue", &["Hub", "Z"], false).unwrap();

    let network = network(catalogue, 2.0, 6.0);
    let itinerary = network.find_route("A", "Z").unwrap();

    assert_eq!(itinerary.total_time(), 34.0);
    assert_eq!(rides(&itinerary), vec![("red", 1, 10.0), ("blue", 1, 20.0)]);
    let waits: Vec<&str> = itinerary
        .legs()
        .iter()
        .filter_map(Leg::as_wait)
        .map(|w| w.stop_name.as_str())
        .collect();
    assert_eq!(waits, vec!["A", "Hub"]);
}

#[test]
fn asymmetric_distances_give_asymmetric_times() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
    catalogue.add_distance("A", "B", 1000.0).unwrap();
    catalogue.add_distance("B", "A", 2000.0).unwrap();
    catalogue.add_bus("1", &["A", "B"], false).unwrap();

    let network = network(catalogue, 2.0, 6.0);

    assert_eq!(network.find_route("A", "B").unwrap().total_time(), 12.0);
    assert_eq!(network.find_route("B", "A").unwrap().total_time(), 22.0);
}

#[test]
fn loop_line_closes_back_to_start() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
    catalogue.add_stop("C", coords(0.01, 0.01)).unwrap();
    catalogue.add_distance("A", "B", 1000.0).unwrap();
    catalogue.add_distance("B", "C", 1000.0).unwrap();
    catalogue.add_distance("C", "A", 1000.0).unwrap();
    catalogue.add_bus("ring", &["A", "B", "C", "A"], true).unwrap();

    let network = network(catalogue, 1.0, 6.0);

    // Loops only run forwards, and the line ends at A: C to B re-boards there
    let itinerary = network.find_route("C", "B").unwrap();
    assert_eq!(itinerary.total_time(), 22.0);
    assert_eq!(
        rides(&itinerary),
        vec![("ring", 1, 10.0), ("ring", 1, 10.0)]
    );

    let itinerary = network.find_route("A", "C").unwrap();
    assert_eq!(rides(&itinerary), vec![("ring", 2, 20.0)]);
}

#[test]
fn repeated_builds_route_identically() {
    let build = || {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
        catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
        catalogue.add_stop("C", coords(0.01, 0.0)).unwrap();
        catalogue.add_stop("D", coords(0.01, 0.01)).unwrap();
        catalogue.add_distance("A", "B", 1000.0).unwrap();
        catalogue.add_distance("A", "C", 1000.0).unwrap();
        catalogue.add_distance("B", "D", 1000.0).unwrap();
        catalogue.add_distance("C", "D", 1000.0).unwrap();
        // Two equally fast ways from A to D
        catalogue.add_bus("north", &["A", "B", "D"], false).unwrap();
        catalogue.add_bus("south", &["A", "C", "D"], false).unwrap();
        network(catalogue, 6.0, 40.0)
    };

    let first = build().find_route("A", "D").unwrap();
    let second = build().find_route("A", "D").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.ride_count(), 1);
}

#[test]
fn total_time_matches_leg_sum() {
    let mut catalogue = TransportCatalogue::new();
    for (i, name) in ["S0", "S1", "S2", "S3", "S4"].iter().enumerate() {
        catalogue
            .add_stop(*name, coords(0.0, i as f64 * 0.01))
            .unwrap();
    }
    for pair in ["S0", "S1", "S2", "S3", "S4"].windows(2) {
        catalogue.add_distance(pair[0], pair[1], 700.0).unwrap();
    }
    catalogue.add_bus("a", &["S0", "S1", "S2"], false).unwrap();
    catalogue.add_bus("b", &["S2", "S3", "S4"], false).unwrap();

    let network = network(catalogue, 3.0, 30.0);
    let itinerary = network.find_route("S0", "S4").unwrap();

    let sum: f64 = itinerary.legs().iter().map(Leg::time).sum();
    assert!((sum - itinerary.total_time()).abs() < 1e-9);
    assert_eq!(itinerary.ride_count(), 2);
}

#[test]
fn repeated_stop_rides_for_free() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", coords(0.0, 0.01)).unwrap();
    catalogue.add_distance("A", "A", 100.0).unwrap();
    catalogue.add_distance("A", "B", 1000.0).unwrap();
    catalogue.add_bus("1", &["A", "A", "B"], false).unwrap();

    let network = network(catalogue, 2.0, 6.0);

    // Boarding at the first A and at the second A cost the same
    let weights: Vec<(usize, f64)> = network
        .graph()
        .edges()
        .iter()
        .filter(|e| e.from == StopId(0) && e.to == StopId(1))
        .map(|e| (e.span_count, e.weight))
        .collect();
    assert_eq!(weights, vec![(2, 12.0), (1, 12.0)]);

    let itinerary = network.find_route("A", "B").unwrap();
    assert_eq!(itinerary.total_time(), 12.0);
    assert_eq!(rides(&itinerary), vec![("1", 2, 10.0)]);
}
