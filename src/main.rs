use std::sync::Arc;
use tracing::{info, warn};

use score_lens::config::{Config, LogFormat};
use score_lens::engine::ScoreEngine;
use score_lens::report::CreditReport;
use score_lens::web::server::WebServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config first: it picks the log format
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "score-lens.toml".to_string());
    let config = Config::load(&config_path)?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "score_lens=info".into());
    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }

    info!("📈 score-lens v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("Config loaded from {}", config_path);

    let config = Arc::new(config);
    let engine = Arc::new(ScoreEngine::new(config.clone()));

    // Initial report, if one is configured
    match config.report.path.as_deref() {
        Some(path) => {
            let report = CreditReport::load(path)?;
            engine.load_report(report);
            if let Some(view) = engine.dashboard() {
                info!(
                    "Score {} → {} ({} metrics, {} findings, {} history points{})",
                    view.score,
                    view.category,
                    view.metrics.len(),
                    view.explanations.len(),
                    view.history.points.len(),
                    if view.history.synthetic { ", synthesized" } else { "" }
                );
            }
        }
        None => warn!("No [report] path configured; waiting for POST /api/report"),
    }

    if !config.web.enabled {
        info!("Web API disabled, nothing left to do");
        return Ok(());
    }

    let web = WebServer::new(engine.clone(), config.clone());
    tokio::select! {
        result = web.run() => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }

    engine.slots.cancel_all();
    Ok(())
}
