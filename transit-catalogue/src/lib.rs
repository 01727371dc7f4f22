//! Transit catalogue and journey planner.
//!
//! Loads bus stops and lines, answers statistics about them, and finds the
//! fastest itinerary between two stops given a fixed boarding wait and a
//! constant bus speed.

pub mod catalogue;
pub mod domain;
pub mod persistence;
pub mod planner;
pub mod requests;
