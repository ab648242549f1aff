use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use crate::models::TravelQuery;
use crate::planner::TripPlanner;

/// Warning shown when source or destination is missing
pub const VALIDATION_WARNING: &str = "⚠️ Please enter both source and destination locations.";

/// Banner shown above the recommendations
pub const SUCCESS_BANNER: &str = "✅ Travel Recommendations:";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
}

impl AppState {
    pub fn new(planner: Arc<TripPlanner>) -> Self {
        Self { planner }
    }
}

/// One trip-planning submission from the form
#[derive(Serialize, Deserialize)]
pub struct PlanRequest {
    pub source: String,
    pub destination: String,
    pub travel_date: NaiveDate,
}

/// Outcome of one submission, rendered by the form page
#[derive(Serialize, Deserialize)]
pub struct PlanResponse {
    /// "success" or "warning"
    pub status: String,
    /// Success banner or validation warning
    pub message: String,
    /// Recommendation text; absent on validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

impl PlanResponse {
    fn success(recommendations: String) -> Self {
        Self {
            status: "success".to_string(),
            message: SUCCESS_BANNER.to_string(),
            recommendations: Some(recommendations),
        }
    }

    fn warning(message: &str) -> Self {
        Self {
            status: "warning".to_string(),
            message: message.to_string(),
            recommendations: None,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(plan_trip))
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}

/// Validate the submission and fetch recommendations.
///
/// A missing location short-circuits to the warning payload without
/// touching the provider; every provider outcome (text, empty answer,
/// failure string) travels back under the success status, matching the
/// display contract of the form.
async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Json<PlanResponse> {
    let query = TravelQuery::new(request.source, request.destination, request.travel_date);

    if let Err(e) = query.validate() {
        warn!(error = %e, "Rejected submission");
        return Json(PlanResponse::warning(VALIDATION_WARNING));
    }

    let text = state.planner.recommend_text(&query).await;
    Json(PlanResponse::success(text))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> Json<Value> {
    Json(json!({ "version": crate::VERSION }))
}
