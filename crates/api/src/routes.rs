use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pathpilot_core::domain::metrics::{DailyLog, WeeklyMetrics};
use pathpilot_core::domain::report::{AdviceResult, WeeklyReport};

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/analyze", post(analyze))
        .route("/analyze/weekly", post(analyze_weekly))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "PathPilot advice service running" }))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn analyze(Json(metrics): Json<WeeklyMetrics>) -> Json<AdviceResult> {
    let result = pathpilot_core::advice::evaluate(&metrics);
    tracing::debug!(advice_len = result.advice.len(), "evaluated weekly metrics");
    Json(result)
}

#[derive(Debug, Deserialize)]
struct WeeklyRequest {
    /// Defaults to today's UTC date.
    as_of_date: Option<NaiveDate>,
    logs: Vec<DailyLog>,
}

async fn analyze_weekly(Json(req): Json<WeeklyRequest>) -> Json<WeeklyReport> {
    let as_of_date = req.as_of_date.unwrap_or_else(|| Utc::now().date_naive());
    let report = pathpilot_core::summary::analyze_week(&req.logs, as_of_date);
    tracing::debug!(
        %as_of_date,
        submitted = req.logs.len(),
        count = report.summary.count,
        advice_len = report.advice.len(),
        "evaluated weekly logs"
    );
    Json(report)
}
