//! Animated Value Interpolator
//!
//! - `value`: split a formatted string into decoration + numeric target
//! - `countup`: cubic ease-out and the cancellable per-frame task
//! - `slots`: one live task per displayed value

pub mod countup;
pub mod slots;
pub mod value;

pub use countup::{ease_out_cubic, spawn_count_up, AnimationHandle, CountUp};
pub use slots::{AnimationSlots, SCORE_SLOT};
pub use value::{parse, DisplayValue, ParsedValue};
