use serde::{Deserialize, Serialize};

/// Bureau credit report - 外部のフェッチ層から受け取る入力データ
///
/// The core never fetches or caches this; it is handed over by value and every
/// derived view is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReport {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub bureau: Option<String>,
    pub score: i32,
    pub risk_band: String,
    pub score_range: ScoreRange,
    #[serde(default)]
    pub score_breakdown: Option<ScoreBreakdown>,
    pub risk_factors: RiskFactors,
    #[serde(default)]
    pub monthly_snapshots: Option<Vec<MonthlySnapshot>>,
    pub report_generated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self { min: 300, max: 900 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBehaviour {
    #[serde(default)]
    pub late_payments_last_3_months: u32,
    pub late_payments_last_6_months: u32,
    #[serde(default)]
    pub max_days_past_due: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditExposure {
    pub credit_utilization_percent: f64,
    pub total_outstanding_debt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditActivity {
    pub hard_inquiries_last_6_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditHistory {
    pub credit_history_length_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub payment_behaviour: PaymentBehaviour,
    pub credit_exposure: CreditExposure,
    pub credit_activity: CreditActivity,
    pub credit_history: CreditHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub payment_behaviour_score: f64,
    pub credit_utilization_score: f64,
    pub credit_history_score: f64,
    pub hard_inquiry_score: f64,
    pub credit_mix_score: f64,
    pub weighted_composite_percent: f64,
}

/// One authoritative month of history; `month` is "YYYY-MM"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    pub month: String,
    pub score: i32,
    #[serde(default)]
    pub weighted_composite_percent: Option<f64>,
    #[serde(default)]
    pub credit_utilization_percent: Option<f64>,
}

impl CreditReport {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let report: CreditReport = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse credit report: {}", e))?;
        Ok(report)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read report file '{}': {}", path, e))?;
        Self::from_json(&content)
    }

    /// Score clamped into the report's own range (display only)
    pub fn clamped_score(&self) -> i32 {
        let ScoreRange { min, max } = self.score_range;
        if max < min {
            return min;
        }
        self.score.clamp(min, max)
    }

    /// Authoritative snapshots, if any were supplied
    pub fn snapshots(&self) -> Option<&[MonthlySnapshot]> {
        match self.monthly_snapshots.as_deref() {
            Some(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_JSON: &str = r#"{
        "requestId": "req-42",
        "pan": "ABCDE1234F",
        "bureau": "CIBIL",
        "score": 742,
        "riskBand": "Low Risk",
        "scoreRange": { "min": 300, "max": 900 },
        "riskFactors": {
            "paymentBehaviour": {
                "latePaymentsLast3Months": 0,
                "latePaymentsLast6Months": 1,
                "maxDaysPastDue": 15
            },
            "creditExposure": {
                "creditUtilizationPercent": 32.5,
                "totalOutstandingDebt": 150000
            },
            "creditActivity": { "hardInquiriesLast6Months": 2 },
            "creditHistory": { "creditHistoryLengthYears": 4 }
        },
        "reportGeneratedAt": "2026-10-19T14:30:00+05:30"
    }"#;

    pub(crate) fn sample_report() -> CreditReport {
        CreditReport::from_json(SAMPLE_JSON).unwrap()
    }

    #[test]
    fn test_decode_camel_case_contract() {
        let report = sample_report();
        assert_eq!(report.score, 742);
        assert_eq!(report.bureau.as_deref(), Some("CIBIL"));
        assert_eq!(report.risk_factors.payment_behaviour.late_payments_last_6_months, 1);
        assert_eq!(report.risk_factors.credit_exposure.credit_utilization_percent, 32.5);
        assert!(report.score_breakdown.is_none());
        assert!(report.snapshots().is_none());
    }

    #[test]
    fn test_empty_snapshots_count_as_absent() {
        let mut report = sample_report();
        report.monthly_snapshots = Some(Vec::new());
        assert!(report.snapshots().is_none());
    }

    #[test]
    fn test_clamped_score() {
        let mut report = sample_report();
        report.score = 950;
        assert_eq!(report.clamped_score(), 900);
        report.score = 120;
        assert_eq!(report.clamped_score(), 300);
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let err = CreditReport::from_json(r#"{"score": 700}"#);
        assert!(err.is_err());
    }
}
