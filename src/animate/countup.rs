use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Cubic ease-out: fast start, gentle landing
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// One count-up from `start` to `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub target: f64,
    pub duration: Duration,
}

impl CountUp {
    pub fn new(start: f64, target: f64, duration: Duration) -> Self {
        Self { start, target, duration }
    }

    /// Non-finite endpoints pin the value at 0
    fn is_finite(&self) -> bool {
        self.start.is_finite() && self.target.is_finite()
    }

    /// Whether this settles immediately (no frames needed)
    pub fn is_instant(&self) -> bool {
        !self.is_finite() || self.duration.is_zero()
    }

    /// Linear progress clamped to [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if !self.is_finite() {
            return 0.0;
        }
        let eased = ease_out_cubic(self.progress(elapsed));
        self.start + (self.target - self.start) * eased
    }

    pub fn final_value(&self) -> f64 {
        if self.is_finite() { self.target } else { 0.0 }
    }
}

/// Handle to a running count-up task
///
/// `cancel` only stops future frames; whatever value was written last stays.
#[derive(Debug)]
pub struct AnimationHandle {
    task: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    /// Handle with nothing behind it (static or literal values)
    pub fn idle() -> Self {
        Self { task: None }
    }

    pub fn cancel(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

/// Spawn the per-frame task writing eased values into `output`.
///
/// Must run inside a tokio runtime. The output is reset to `start` before
/// the first frame.
pub fn spawn_count_up(
    count_up: CountUp,
    frame_interval: Duration,
    output: Arc<RwLock<f64>>,
) -> AnimationHandle {
    if count_up.is_instant() {
        *output.write() = count_up.final_value();
        return AnimationHandle::idle();
    }

    *output.write() = count_up.start;

    let frame = frame_interval.max(Duration::from_millis(1));
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // clock starts at the first frame, like requestAnimationFrame
        let started_at = ticker.tick().await;
        loop {
            let elapsed = Instant::now().duration_since(started_at);
            let progress = count_up.progress(elapsed);
            *output.write() = count_up.value_at(elapsed);

            if progress >= 1.0 {
                debug!("Count-up to {} settled", count_up.target);
                break;
            }
            ticker.tick().await;
        }
    });

    AnimationHandle { task: Some(task) }
}
