//! Recommendation provider integration
//!
//! This module provides the seam between the planner and the hosted
//! generative-text service:
//! - Role-tagged chat messages and their constructors
//! - The `RecommendationProvider` trait the planner calls through
//! - The OpenRouter-compatible chat-completions client

pub mod openrouter;

pub use openrouter::OpenRouterClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A role-tagged message in the conversation sent to the provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One synchronous round trip to a hosted generative-text model.
///
/// Implementations receive the full ordered conversation and return the
/// model's text, or a `TripError` describing why no text is available.
/// There is exactly one production implementation; the trait exists so the
/// planner can be exercised against a fake in tests.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Send the ordered messages and return the model's textual response
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Model identifier used for logging
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("You are helpful");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are helpful");

        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }
}
