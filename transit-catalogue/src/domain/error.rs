//! Domain error types.
//!
//! These errors represent lookup failures and invalid base data in the
//! catalogue. They are distinct from routing and I/O errors.

/// Catalogue-level errors for lookups and data validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// No stop with this name is registered
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// No bus with this name is registered
    #[error("bus not found: {0}")]
    BusNotFound(String),

    /// A stop with this name already exists
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name already exists
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// Distances must be finite and non-negative
    #[error("invalid distance {distance} from {from} to {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// No real distance was supplied in either direction
    #[error("no distance between {from} and {to}")]
    DistanceNotFound { from: String, to: String },
}

impl CatalogueError {
    /// Returns true for lookups of names that are not registered.
    ///
    /// These are expected outcomes reported to users as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogueError::StopNotFound(_) | CatalogueError::BusNotFound(_)
        )
    }
}
