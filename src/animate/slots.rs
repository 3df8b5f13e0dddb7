use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, info};

use super::countup::{spawn_count_up, AnimationHandle, CountUp};
use super::value::{parse, ParsedValue};
use crate::config::AnimationConfig;
use crate::metrics::build_metrics;
use crate::report::CreditReport;

/// Slot name for the headline score
pub const SCORE_SLOT: &str = "score";

/// One displayed value and the task currently driving it
struct Slot {
    parsed: ParsedValue,
    current: Arc<RwLock<f64>>,
    handle: AnimationHandle,
}

impl Slot {
    fn render(&self) -> String {
        self.parsed.render(*self.current.read())
    }
}

/// Live display slots - 表示スロットごとに1タスクだけ
///
/// Starting a slot cancels whatever task that slot had before, so two tasks
/// never write the same output.
pub struct AnimationSlots {
    slots: DashMap<String, Slot>,
    config: AnimationConfig,
}

impl AnimationSlots {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            slots: DashMap::new(),
            config: *config,
        }
    }

    /// (Re)start the count-up for `slot` towards the number inside `formatted`.
    ///
    /// Always eases from the configured start value, even mid-flight.
    pub fn start(&self, slot: &str, formatted: &str) {
        let parsed = parse(formatted);
        let current = Arc::new(RwLock::new(self.config.start_value));

        // the entry holds the shard lock until the new slot is in place
        let entry = self.slots.entry(slot.to_string());
        if let Entry::Occupied(existing) = &entry {
            existing.get().handle.cancel();
            debug!("Cancelled previous count-up for slot '{}'", slot);
        }

        let handle = match parsed.target() {
            Some(target) => spawn_count_up(
                CountUp::new(
                    self.config.start_value,
                    target,
                    Duration::from_millis(self.config.duration_ms),
                ),
                Duration::from_millis(self.config.frame_interval_ms),
                current.clone(),
            ),
            None => {
                debug!("Slot '{}' is not animatable, showing '{}' verbatim", slot, formatted);
                AnimationHandle::idle()
            }
        };

        entry.insert(Slot { parsed, current, handle });
    }

    /// Current formatted string for a slot
    pub fn render(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).map(|s| s.render())
    }

    /// Whether the slot's task is still producing frames
    pub fn is_running(&self, slot: &str) -> bool {
        self.slots
            .get(slot)
            .map(|s| !s.handle.is_finished())
            .unwrap_or(false)
    }

    /// Every slot's current string, ordered by slot name
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.slots
            .iter()
            .map(|s| (s.key().clone(), s.render()))
            .collect()
    }

    pub fn cancel(&self, slot: &str) {
        if let Some(s) = self.slots.get(slot) {
            s.handle.cancel();
        }
    }

    pub fn cancel_all(&self) {
        for s in self.slots.iter() {
            s.handle.cancel();
        }
    }

    /// Restart the headline score and every metric card for a new report
    pub fn load_report(&self, report: &CreditReport) {
        self.start(SCORE_SLOT, &report.clamped_score().to_string());
        for metric in build_metrics(&report.risk_factors) {
            self.start(&metric.label, &metric.formatted_value);
        }
        info!("🎞️ Restarted {} live slots for score {}", self.slots.len(), report.score);
    }
}

impl Drop for AnimationSlots {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
