use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::report::{CreditReport, MonthlySnapshot};

/// History Synthesizer - 履歴がないときの推移を作る
///
/// Not a fit to real history. Same (score, points, today) always gives the
/// same trend.
pub const DEFAULT_HISTORY_POINTS: usize = 6;

pub const SCORE_FLOOR: i32 = 300;
pub const SCORE_CEILING: i32 = 900;

/// Monthly step of the synthetic trend
const MONTHLY_GROWTH: i64 = 8;
/// Alternating wobble so the line is not perfectly straight
const VARIANCE: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPoint {
    pub month: String,
    pub score: i32,
}

/// History series plus where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreHistory {
    pub points: Vec<HistoryPoint>,
    pub synthetic: bool,
}

fn clamp_score(score: i64) -> i32 {
    score.clamp(SCORE_FLOOR as i64, SCORE_CEILING as i64) as i32
}

fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// First of the month `back` months before `today`
fn months_before(today: NaiveDate, back: usize) -> Option<NaiveDate> {
    let first = today.with_day(1)?;
    first.checked_sub_months(Months::new(u32::try_from(back).ok()?))
}

/// Synthetic trend of `points` months ending at the month of `today`
pub fn generate_score_history(current_score: i32, points: usize, today: NaiveDate) -> Vec<HistoryPoint> {
    if points == 0 {
        return Vec::new();
    }

    let span = (points as i64 - 1) * MONTHLY_GROWTH;
    let baseline = (current_score as i64 - span).max(SCORE_FLOOR as i64);

    (0..points)
        .map(|index| {
            let growth = index as i64 * MONTHLY_GROWTH;
            let variance = if index % 2 == 0 { VARIANCE } else { -VARIANCE };
            let score = clamp_score(baseline + growth + variance);

            let month = months_before(today, points - 1 - index)
                .map(month_label)
                .unwrap_or_default();

            HistoryPoint { month, score }
        })
        .collect()
}

/// "2025-01" -> "Jan 2025"; anything else passes through
pub fn format_snapshot_month(raw: &str) -> String {
    let mut parts = raw.split('-');
    let year = parts.next().and_then(|y| y.trim().parse::<i32>().ok());
    let month = parts.next().and_then(|m| m.trim().parse::<u32>().ok());

    match (year, month) {
        (Some(y), Some(m)) => NaiveDate::from_ymd_opt(y, m, 1)
            .map(month_label)
            .unwrap_or_else(|| raw.to_string()),
        _ => raw.to_string(),
    }
}

fn from_snapshots(snapshots: &[MonthlySnapshot]) -> Vec<HistoryPoint> {
    snapshots
        .iter()
        .map(|s| HistoryPoint {
            month: format_snapshot_month(&s.month),
            score: clamp_score(s.score as i64),
        })
        .collect()
}

/// Authoritative snapshots when present, synthetic trend otherwise
pub fn score_history(report: &CreditReport, today: NaiveDate, points: usize) -> ScoreHistory {
    match report.snapshots() {
        Some(snapshots) => ScoreHistory {
            points: from_snapshots(snapshots),
            synthetic: false,
        },
        None => {
            debug!("No monthly snapshots, synthesizing {} points from {}", points, report.score);
            ScoreHistory {
                points: generate_score_history(report.score, points, today),
                synthetic: true,
            }
        }
    }
}
