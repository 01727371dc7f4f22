//! JSON request documents.
//!
//! A document carries base requests (stops and buses to load), settings,
//! and stat requests (bus, stop and route queries). The handler loads the
//! former into a network and answers the latter in request order.

pub mod dto;
mod error;
mod handler;

pub use dto::{RequestDocument, StatResponse};
pub use error::RequestError;
pub use handler::{answer, answer_all, build_network, load_catalogue, make_base, process_requests};
