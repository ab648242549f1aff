use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripplanner::api::AppState;
use tripplanner::config::TripPlannerConfig;
use tripplanner::planner::TripPlanner;
use tripplanner::provider::OpenRouterClient;
use tripplanner::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripPlannerConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::info!("Starting TripPlanner v{}", tripplanner::VERSION);

    if config.provider.api_key.is_none() {
        tracing::warn!("Provider API key not set - recommendation requests will fail");
    }

    let provider = Arc::new(OpenRouterClient::new(&config.provider)?);
    let planner = Arc::new(TripPlanner::new(provider));

    web::run(&config.server, AppState::new(planner)).await
}
