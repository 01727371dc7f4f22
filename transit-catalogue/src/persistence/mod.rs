//! Binary snapshots of a built transit network.
//!
//! `make_base` writes a snapshot once, and `process_requests` answers
//! queries from it later without re-reading the base requests or
//! rebuilding the routing graph.

mod error;
mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{SerializationSettings, Snapshot, load, save};
