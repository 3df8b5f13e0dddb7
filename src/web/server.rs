use std::sync::Arc;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::engine::ScoreEngine;
use crate::gauge::GaugeGeometry;
use crate::report::CreditReport;

/// Dashboard API - プレゼンテーション層向けのJSON
/// 認証・リトライ・キャッシュはここでは扱わない
pub struct WebServer {
    engine: Arc<ScoreEngine>,
    config: Arc<Config>,
}

#[derive(Clone)]
struct AppState {
    engine: Arc<ScoreEngine>,
}

#[derive(Deserialize)]
struct GaugeQuery {
    score: i32,
    min: Option<i32>,
    max: Option<i32>,
}

impl WebServer {
    pub fn new(engine: Arc<ScoreEngine>, config: Arc<Config>) -> Self {
        Self { engine, config }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        if !self.config.web.enabled {
            info!("Web API disabled");
            return Ok(());
        }

        let addr = format!("{}:{}", self.config.web.address, self.config.web.port);
        let listener = TcpListener::bind(&addr).await?;
        info!("🌐 Dashboard API listening on http://{}", addr);
        serve(listener, self.engine.clone()).await
    }
}

pub fn router(engine: Arc<ScoreEngine>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/dashboard", get(api_dashboard))
        .route("/api/gauge", get(api_gauge))
        .route("/api/live", get(api_live))
        .route("/api/report", get(api_report).post(api_load_report))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already-bound listener
pub async fn serve(listener: TcpListener, engine: Arc<ScoreEngine>) -> anyhow::Result<()> {
    axum::serve(listener, router(engine)).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Full dashboard view
async fn api_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, StatusCode> {
    state.engine.dashboard().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Gauge geometry for arbitrary inputs
async fn api_gauge(
    State(state): State<AppState>,
    Query(params): Query<GaugeQuery>,
) -> Json<GaugeGeometry> {
    Json(state.engine.gauge(params.score, params.min, params.max))
}

/// Current animated strings per slot
async fn api_live(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "slots": state.engine.live(),
    }))
}

/// Currently loaded report, as received
async fn api_report(State(state): State<AppState>) -> Result<Json<CreditReport>, StatusCode> {
    state.engine.report().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Replace the report; restarts every live slot
async fn api_load_report(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode, (StatusCode, String)> {
    let report = CreditReport::from_json(&body).map_err(|e| {
        warn!("Rejected report upload: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;
    state.engine.load_report(report);
    Ok(StatusCode::NO_CONTENT)
}
