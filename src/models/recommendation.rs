//! Recommendation model wrapping one provider response

use serde::{Deserialize, Serialize};

/// Text returned by the provider for one query. The content is opaque,
/// possibly multi-paragraph markdown; it is displayed once and not stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recommendation {
    /// The model's textual response body, verbatim
    pub text: String,
    /// Model identifier that produced the text
    pub model: String,
}

impl Recommendation {
    /// Create a new recommendation
    #[must_use]
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
        }
    }
}
