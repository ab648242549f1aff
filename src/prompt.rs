//! Prompt construction for the recommendation request
//!
//! One constant system instruction plus one templated user message per
//! query. The system instruction never interpolates user input.

use crate::models::TravelQuery;

/// System instruction sent with every request, constant across all calls
pub const SYSTEM_PROMPT: &str = "You are an AI-powered travel assistant. \
Provide multiple travel options (cab, train, bus, flight) with estimated costs, duration, \
and relevant travel tips. Consider the travel date for availability and price fluctuations. \
Additionally, suggest the best tourist attractions with helpful tips.";

/// Build the user message for a query, interpolating the three inputs
/// verbatim into the fixed template.
#[must_use]
pub fn build_user_message(query: &TravelQuery) -> String {
    format!(
        "I am traveling from {} to {} on {}. Suggest travel options with estimated cost, duration, and important details.",
        query.source,
        query.destination,
        query.format_date()
    )
}
