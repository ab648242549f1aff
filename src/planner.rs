//! Trip planning service
//!
//! Turns one validated query into one provider round trip: a constant
//! system instruction plus the templated user message, sent in order, with
//! the returned text treated as opaque display content.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::models::{Recommendation, TravelQuery};
use crate::prompt::{SYSTEM_PROMPT, build_user_message};
use crate::provider::{ChatMessage, RecommendationProvider};
use crate::{Result, TripError};

/// Placeholder shown when the provider answers without usable content
pub const NO_RESPONSE_PLACEHOLDER: &str = "⚠️ No response from AI.";

/// Marker prefixing any provider failure shown to the user
pub const ERROR_PREFIX: &str = "❌ Error fetching travel options: ";

/// Service that fetches travel recommendations for validated queries
pub struct TripPlanner {
    provider: Arc<dyn RecommendationProvider>,
}

impl TripPlanner {
    /// Create a planner over the given provider
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { provider }
    }

    /// Fetch a recommendation for a query the caller has already validated.
    ///
    /// Returns the typed result so callers can branch on the failure kind;
    /// `recommend_text` is the display-oriented wrapper that absorbs all
    /// failures into strings.
    pub async fn recommend(&self, query: &TravelQuery) -> Result<Recommendation> {
        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_message(query)),
        ];

        info!(
            source = %query.source,
            destination = %query.destination,
            travel_date = %query.format_date(),
            "Fetching travel recommendations"
        );
        let start = Instant::now();

        let text = self.provider.complete(&messages).await?;

        info!(
            model = %self.provider.model(),
            duration_ms = %start.elapsed().as_millis(),
            "Travel recommendations received"
        );

        Ok(Recommendation::new(text, self.provider.model()))
    }

    /// Fetch a recommendation and render every outcome as display text.
    ///
    /// Failures never escape: an empty provider answer becomes the fixed
    /// placeholder and any other failure becomes the error-marker string
    /// carrying the underlying description.
    pub async fn recommend_text(&self, query: &TravelQuery) -> String {
        match self.recommend(query).await {
            Ok(recommendation) => recommendation.text,
            Err(TripError::EmptyResponse) => {
                warn!("Provider returned no usable content");
                NO_RESPONSE_PLACEHOLDER.to_string()
            }
            Err(TripError::Provider { message }) => {
                warn!(error = %message, "Provider call failed");
                format!("{ERROR_PREFIX}{message}")
            }
            Err(e) => {
                warn!(error = %e, "Recommendation request failed");
                format!("{ERROR_PREFIX}{e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider fake that records the conversation and replays a canned outcome
    struct FakeProvider {
        reply: Result<String>,
        calls: AtomicUsize,
        seen_messages: Mutex<Vec<ChatMessage>>,
    }

    impl FakeProvider {
        fn replying(reply: Result<String>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                seen_messages: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecommendationProvider for FakeProvider {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_messages.lock().unwrap() = messages.to_vec();
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(TripError::EmptyResponse) => Err(TripError::EmptyResponse),
                Err(TripError::Provider { message }) => Err(TripError::provider(message.clone())),
                Err(e) => Err(TripError::general(e.to_string())),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    fn query() -> TravelQuery {
        TravelQuery::new("Mumbai", "Pune", "2025-03-01".parse::<NaiveDate>().unwrap())
    }

    fn planner_with(provider: Arc<FakeProvider>) -> TripPlanner {
        TripPlanner::new(provider)
    }

    #[tokio::test]
    async fn test_recommend_returns_text_verbatim() {
        let provider = Arc::new(FakeProvider::replying(Ok(
            "Take the Deccan Express, 4h, ₹300...".to_string(),
        )));
        let planner = planner_with(provider.clone());

        let recommendation = planner.recommend(&query()).await.unwrap();
        assert_eq!(recommendation.text, "Take the Deccan Express, 4h, ₹300...");
        assert_eq!(recommendation.model, "fake-model");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recommend_sends_system_then_user() {
        let provider = Arc::new(FakeProvider::replying(Ok("ok".to_string())));
        let planner = planner_with(provider.clone());

        planner.recommend(&query()).await.unwrap();

        let messages = provider.seen_messages.lock().unwrap().clone();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(
            messages[1].content,
            "I am traveling from Mumbai to Pune on 2025-03-01. Suggest travel options with estimated cost, duration, and important details."
        );
    }

    #[tokio::test]
    async fn test_system_prompt_constant_across_inputs() {
        let provider = Arc::new(FakeProvider::replying(Ok("ok".to_string())));
        let planner = planner_with(provider.clone());

        let other = TravelQuery::new(
            "Berlin",
            "Prague",
            "2026-08-15".parse::<NaiveDate>().unwrap(),
        );
        planner.recommend(&other).await.unwrap();

        let messages = provider.seen_messages.lock().unwrap().clone();
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn test_recommend_text_success_is_verbatim() {
        let provider = Arc::new(FakeProvider::replying(Ok(
            "Take the Deccan Express, 4h, ₹300...".to_string(),
        )));
        let planner = planner_with(provider);

        let text = planner.recommend_text(&query()).await;
        assert_eq!(text, "Take the Deccan Express, 4h, ₹300...");
    }

    #[tokio::test]
    async fn test_recommend_text_empty_response_placeholder() {
        let provider = Arc::new(FakeProvider::replying(Err(TripError::EmptyResponse)));
        let planner = planner_with(provider);

        let text = planner.recommend_text(&query()).await;
        assert_eq!(text, "⚠️ No response from AI.");
    }

    #[tokio::test]
    async fn test_recommend_text_provider_failure_format() {
        let provider = Arc::new(FakeProvider::replying(Err(TripError::provider(
            "connection timed out",
        ))));
        let planner = planner_with(provider);

        let text = planner.recommend_text(&query()).await;
        assert_eq!(text, "❌ Error fetching travel options: connection timed out");
    }
}
