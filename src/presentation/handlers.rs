// HTTP request handlers
use crate::domain::period::Period;
use crate::presentation::app_state::AppState;
use crate::presentation::json::{
    meter_to_json, readings_page_to_json, usage_chart_to_json, MeterJson,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ReadingsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub period: Option<Period>,
}

#[derive(Deserialize)]
pub struct UsageQuery {
    pub period: Option<Period>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all meters
pub async fn list_meters(State(state): State<Arc<AppState>>) -> Json<Vec<MeterJson>> {
    match state.meter_service.list_meters().await {
        Ok(meters) => Json(meters.into_iter().map(meter_to_json).collect()),
        Err(e) => {
            tracing::error!("Error fetching meters: {}", e);
            // Return empty list on error
            Json(Vec::new())
        }
    }
}

/// One page of a meter's readings table, windowed by period
pub async fn get_readings(
    Path(meter_id): Path<i64>,
    Query(query): Query<ReadingsQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let page = query.page.unwrap_or(1).max(1) as usize;
    let per_page = query.per_page.map(|p| p.max(1) as usize);
    let period = query.period.unwrap_or(Period::Week);
    let now = Local::now().naive_local();

    match state
        .readings_service
        .readings_page(meter_id, period, page, per_page, now)
        .await
    {
        Ok(readings_page) => Json(readings_page_to_json(readings_page)).into_response(),
        Err(e) => {
            tracing::error!("Error building readings page for meter {}: {}", meter_id, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// A meter's usage chart with average reference band, windowed by period
pub async fn get_usage_chart(
    Path(meter_id): Path<i64>,
    Query(query): Query<UsageQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let period = query.period.unwrap_or(Period::Month);
    let now = Local::now().naive_local();

    match state.usage_service.usage_chart(meter_id, period, now).await {
        Ok(chart) => Json(usage_chart_to_json(chart)).into_response(),
        Err(e) => {
            tracing::error!("Error building usage chart for meter {}: {}", meter_id, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
