//! Error types for snapshot persistence.

use std::path::PathBuf;

use crate::domain::CatalogueError;
use crate::planner::GraphError;

/// Error from saving or loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    #[error("snapshot i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The network could not be encoded
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The file is not a valid snapshot
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The snapshot decoded but its catalogue is inconsistent
    #[error("corrupt snapshot: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The snapshot decoded but its graph does not fit its catalogue
    #[error("corrupt snapshot graph: {0}")]
    Graph(#[from] GraphError),

    /// A bus refers to a stop index beyond the stop list
    #[error("bus {bus} refers to unknown stop #{stop}")]
    UnknownStop { bus: String, stop: usize },
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
