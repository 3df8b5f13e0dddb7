use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use tracing::info;

use crate::animate::AnimationSlots;
use crate::config::Config;
use crate::dashboard::{Dashboard, DashboardSettings};
use crate::gauge::{gauge_geometry, GaugeGeometry};
use crate::report::CreditReport;

/// Score engine - 読み込んだレポートとライブ表示を束ねる
///
/// Holds the one report handed over by the fetch layer plus the animator.
/// Every view is rebuilt from the report on request, nothing derived is
/// cached.
pub struct ScoreEngine {
    pub config: Arc<Config>,
    pub slots: Arc<AnimationSlots>,
    report: RwLock<Option<CreditReport>>,
    settings: DashboardSettings,
}

impl ScoreEngine {
    pub fn new(config: Arc<Config>) -> Self {
        let settings = DashboardSettings {
            gauge: config.gauge.clone(),
            history: config.history.clone(),
        };
        Self {
            slots: Arc::new(AnimationSlots::new(&config.animation)),
            report: RwLock::new(None),
            settings,
            config,
        }
    }

    /// Swap in a new report and restart every live slot.
    /// Must be called inside a tokio runtime when animation is enabled.
    ///
    /// The report lock is held across the slot restart, so concurrent loads
    /// never leave the live values and the stored report out of step.
    pub fn load_report(&self, report: CreditReport) {
        let mut current = self.report.write();
        info!(
            "📄 Report loaded: score {} ({}), bureau {}",
            report.score,
            report.risk_band,
            report.bureau.as_deref().unwrap_or("unknown")
        );
        self.slots.load_report(&report);
        *current = Some(report);
    }

    pub fn report(&self) -> Option<CreditReport> {
        self.report.read().clone()
    }

    pub fn dashboard_on(&self, today: NaiveDate) -> Option<Dashboard> {
        let report = self.report.read();
        report
            .as_ref()
            .map(|r| Dashboard::build(r, today, &self.settings))
    }

    pub fn dashboard(&self) -> Option<Dashboard> {
        self.dashboard_on(Local::now().date_naive())
    }

    /// Gauge for arbitrary inputs, configured range when not given
    pub fn gauge(&self, score: i32, min: Option<i32>, max: Option<i32>) -> GaugeGeometry {
        gauge_geometry(
            score,
            min.unwrap_or(self.settings.gauge.min),
            max.unwrap_or(self.settings.gauge.max),
            &self.settings.gauge.layout,
        )
    }

    pub fn live(&self) -> BTreeMap<String, String> {
        self.slots.snapshot()
    }
}
