//! Error types for request processing.

use crate::domain::CatalogueError;
use crate::persistence::SnapshotError;
use crate::planner::GraphError;

/// Error from processing a request document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The document is not valid JSON or has the wrong shape
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the document or writing the responses failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A base request could not be loaded
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The routing graph could not be built
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The snapshot could not be saved or loaded
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A section the mode depends on is absent
    #[error("missing {0} in request document")]
    MissingSection(&'static str),
}
