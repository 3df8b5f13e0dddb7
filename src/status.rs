use serde::Serialize;
use std::fmt;

/// Risk Status Evaluator - 指標ごとの3段階判定
///
/// Each evaluator looks at exactly one number. Thresholds are inclusive on
/// the "better" side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusLevel {
    Good,
    Moderate,
    Risky,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Good => "Good",
            StatusLevel::Moderate => "Moderate",
            StatusLevel::Risky => "Risky",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn utilization_status(percent: f64) -> StatusLevel {
    match percent {
        p if p <= 30.0 => StatusLevel::Good,
        p if p <= 50.0 => StatusLevel::Moderate,
        _ => StatusLevel::Risky,
    }
}

pub fn inquiry_status(count: u32) -> StatusLevel {
    match count {
        0..=1 => StatusLevel::Good,
        2 => StatusLevel::Moderate,
        _ => StatusLevel::Risky,
    }
}

pub fn late_payment_status(count: u32) -> StatusLevel {
    match count {
        0 => StatusLevel::Good,
        1..=2 => StatusLevel::Moderate,
        _ => StatusLevel::Risky,
    }
}

/// Higher is better here
pub fn credit_age_status(years: f64) -> StatusLevel {
    match years {
        y if y >= 5.0 => StatusLevel::Good,
        y if y >= 3.0 => StatusLevel::Moderate,
        _ => StatusLevel::Risky,
    }
}

pub fn debt_status(debt: f64) -> StatusLevel {
    match debt {
        d if d <= 150_000.0 => StatusLevel::Good,
        d if d <= 350_000.0 => StatusLevel::Moderate,
        _ => StatusLevel::Risky,
    }
}
