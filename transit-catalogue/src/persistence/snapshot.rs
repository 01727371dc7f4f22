//! Snapshot capture, restore and file I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::SnapshotError;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, Stop, StopId};
use crate::planner::{Edge, RoutingSettings, TransitGraph, TransitNetwork};

/// Where the snapshot lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationSettings {
    /// Path of the snapshot file.
    pub file: PathBuf,
}

impl SerializationSettings {
    /// Create settings for the given snapshot path.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

/// Everything needed to answer queries without rebuilding.
///
/// Stops and buses are kept in id order so that ids stored in buses,
/// distances and edges stay valid after a restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    distances: Vec<(StopId, StopId, f64)>,
    settings: RoutingSettings,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Snapshot {
    /// Capture a built network.
    pub fn capture(network: &TransitNetwork) -> Self {
        let catalogue = network.catalogue();

        let mut distances: Vec<_> = catalogue.distances().collect();
        distances.sort_by_key(|&(from, to, _)| (from, to));

        Self {
            stops: catalogue.stops().to_vec(),
            buses: catalogue.buses().to_vec(),
            distances,
            settings: *network.settings(),
            vertex_count: network.graph().vertex_count(),
            edges: network.graph().edges().to_vec(),
        }
    }

    /// Rebuild the network from the captured parts.
    ///
    /// The graph is restored as stored rather than rebuilt, but every part is
    /// checked against the catalogue it is restored with.
    pub fn restore(self) -> Result<TransitNetwork, SnapshotError> {
        let mut catalogue = TransportCatalogue::new();

        for stop in self.stops {
            catalogue.add_stop(stop.name, stop.coordinates)?;
        }

        for (from, to, meters) in self.distances {
            catalogue.add_distance_by_id(from, to, meters)?;
        }

        for bus in self.buses {
            let names = bus
                .stops
                .iter()
                .map(|&id| {
                    catalogue
                        .stop(id)
                        .map(|stop| stop.name.clone())
                        .ok_or_else(|| SnapshotError::UnknownStop {
                            bus: bus.name.clone(),
                            stop: id.index(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            catalogue.add_bus(bus.name, names.as_slice(), bus.is_roundtrip)?;
        }

        let graph = TransitGraph::from_edges(self.vertex_count, self.edges)?;
        Ok(TransitNetwork::from_parts(catalogue, self.settings, graph)?)
    }

    /// Number of stops captured.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of graph edges captured.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Write a network snapshot to `path`.
///
/// Creates parent directories if they don't exist.
pub fn save(path: &Path, network: &TransitNetwork) -> Result<(), SnapshotError> {
    let snapshot = Snapshot::capture(network);
    let bytes = bincode::serde::encode_to_vec(&snapshot, bincode::config::standard())?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| SnapshotError::io(parent, e))?;
    }

    std::fs::write(path, &bytes).map_err(|e| SnapshotError::io(path, e))?;

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        stops = snapshot.stop_count(),
        edges = snapshot.edge_count(),
        "saved snapshot"
    );
    Ok(())
}

/// Read a network snapshot from `path`.
pub fn load(path: &Path) -> Result<TransitNetwork, SnapshotError> {
    let bytes = std::fs::read(path).map_err(|e| SnapshotError::io(path, e))?;
    let (snapshot, read): (Snapshot, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;

    debug!(
        path = %path.display(),
        read,
        stops = snapshot.stop_count(),
        edges = snapshot.edge_count(),
        "decoded snapshot"
    );

    snapshot.restore()
}
