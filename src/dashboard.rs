use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::classifier::{categorize, ScoreCategory};
use crate::config::{GaugeConfig, HistoryConfig};
use crate::explain::generate_score_explanation;
use crate::format::format_report_timestamp;
use crate::gauge::{gauge_geometry, GaugeGeometry};
use crate::history::{score_history, ScoreHistory};
use crate::metrics::{build_metrics, Metric};
use crate::report::CreditReport;

/// Knobs the dashboard view depends on
#[derive(Debug, Clone, Default)]
pub struct DashboardSettings {
    pub gauge: GaugeConfig,
    pub history: HistoryConfig,
}

/// Everything the dashboard page renders, derived from one report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub score: i32,
    pub clamped_score: i32,
    pub category: ScoreCategory,
    pub color: &'static str,
    pub risk_band: String,
    pub bureau: Option<String>,
    pub last_updated: String,
    pub gauge: GaugeGeometry,
    pub metrics: Vec<Metric>,
    pub explanations: Vec<String>,
    pub history: ScoreHistory,
}

impl Dashboard {
    /// Pure: same report, date and settings always give the same view
    pub fn build(report: &CreditReport, today: NaiveDate, settings: &DashboardSettings) -> Self {
        let category = categorize(report.score);

        let range = report.score_range;
        if range.max <= range.min {
            debug!("Report range {}..{} is degenerate, gauge pins to its minimum", range.min, range.max);
        }
        let gauge = gauge_geometry(report.score, range.min, range.max, &settings.gauge.layout);

        Self {
            score: report.score,
            clamped_score: gauge.clamped_score,
            category,
            color: category.color(),
            risk_band: report.risk_band.clone(),
            bureau: report.bureau.clone(),
            last_updated: format_report_timestamp(&report.report_generated_at),
            gauge,
            metrics: build_metrics(&report.risk_factors),
            explanations: generate_score_explanation(&report.risk_factors),
            history: score_history(report, today, settings.history.points),
        }
    }
}
