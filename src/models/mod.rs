//! Data models for the `TripPlanner` application
//!
//! This module contains the core domain models organized by concern:
//! - Query: the (source, destination, travel date) triple for one submission
//! - Recommendation: the opaque text produced by one provider call

pub mod query;
pub mod recommendation;

// Re-export all public types for convenient access
pub use query::TravelQuery;
pub use recommendation::Recommendation;
