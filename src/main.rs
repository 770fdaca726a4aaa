// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::meter_service::MeterService;
use crate::application::readings_service::ReadingsService;
use crate::application::usage_service::UsageService;
use crate::infrastructure::backend_repository::BackendRepository;
use crate::infrastructure::config::{load_backend_config, load_dashboard_settings};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_readings, get_usage_chart, health_check, list_meters};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let backend_config = load_backend_config()?;
    let dashboard_settings = load_dashboard_settings()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(BackendRepository::new(
        backend_config.backend.base_url,
        backend_config.backend.token,
        backend_config.backend.timeout_secs,
    )?);

    // Create services (application layer)
    let meter_service = MeterService::new(repository.clone());
    let readings_service = ReadingsService::new(repository.clone(), dashboard_settings.clone());
    let usage_service = UsageService::new(repository.clone(), dashboard_settings);

    // Create application state
    let state = Arc::new(AppState {
        meter_service,
        readings_service,
        usage_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/meters", get(list_meters))
        .route("/meters/:id/readings", get(get_readings))
        .route("/meters/:id/usage", get(get_usage_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    tracing::info!("Starting water-meter-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
