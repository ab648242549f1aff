//! `TripPlanner` - AI-powered trip planning with generated travel recommendations
//!
//! This library provides the core functionality for collecting a travel
//! query, turning it into a prompt for a hosted generative-text model, and
//! serving the returned recommendations over a small web surface.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod provider;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::TripPlannerConfig;
pub use error::TripError;
pub use models::{Recommendation, TravelQuery};
pub use planner::TripPlanner;
pub use provider::{ChatMessage, OpenRouterClient, RecommendationProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripError>;
