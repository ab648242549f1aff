//! Travel query model for one trip-planning submission

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::TripError;

/// One (source, destination, travel date) triple entered by the user.
/// Consumed by exactly one provider call and discarded after display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TravelQuery {
    /// Departure point entered by the user
    pub source: String,
    /// Destination entered by the user
    pub destination: String,
    /// Planned travel date; the input widget bounds it to today or later
    pub travel_date: NaiveDate,
}

impl TravelQuery {
    /// Create a new travel query
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>, travel_date: NaiveDate) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            travel_date,
        }
    }

    /// Check that both locations are non-empty after trimming whitespace.
    /// The travel date carries no submit-time rule beyond the widget bound.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.source.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(TripError::validation(
                "Both source and destination locations are required",
            ));
        }
        Ok(())
    }

    /// Travel date rendered the way it is interpolated into the prompt
    #[must_use]
    pub fn format_date(&self) -> String {
        self.travel_date.format("%Y-%m-%d").to_string()
    }
}
