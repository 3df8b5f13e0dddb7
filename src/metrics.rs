use serde::Serialize;

use crate::format::{format_inr, format_plain};
use crate::report::RiskFactors;
use crate::status::{
    credit_age_status, debt_status, inquiry_status, late_payment_status, utilization_status,
    StatusLevel,
};

/// One dashboard metric card (derived, never persisted)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub formatted_value: String,
    pub status: StatusLevel,
}

impl Metric {
    fn new(label: &str, formatted_value: String, status: StatusLevel) -> Self {
        Self {
            label: label.to_string(),
            formatted_value,
            status,
        }
    }
}

/// Five metric cards in display order
pub fn build_metrics(risk_factors: &RiskFactors) -> Vec<Metric> {
    let utilization = risk_factors.credit_exposure.credit_utilization_percent;
    let debt = risk_factors.credit_exposure.total_outstanding_debt;
    let inquiries = risk_factors.credit_activity.hard_inquiries_last_6_months;
    let late = risk_factors.payment_behaviour.late_payments_last_6_months;
    let years = risk_factors.credit_history.credit_history_length_years;

    vec![
        Metric::new(
            "Credit Utilization",
            format!("{}%", format_plain(utilization)),
            utilization_status(utilization),
        ),
        Metric::new("Hard Inquiries (6M)", inquiries.to_string(), inquiry_status(inquiries)),
        Metric::new("Late Payments (6M)", late.to_string(), late_payment_status(late)),
        Metric::new(
            "Credit Age",
            format!("{}y", format_plain(years)),
            credit_age_status(years),
        ),
        Metric::new("Outstanding Debt", format_inr(debt), debt_status(debt)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_metric_order_and_values() {
        let metrics = build_metrics(&sample_report().risk_factors);
        let rendered: Vec<(&str, &str, StatusLevel)> = metrics
            .iter()
            .map(|m| (m.label.as_str(), m.formatted_value.as_str(), m.status))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Credit Utilization", "32.5%", StatusLevel::Moderate),
                ("Hard Inquiries (6M)", "2", StatusLevel::Moderate),
                ("Late Payments (6M)", "1", StatusLevel::Moderate),
                ("Credit Age", "4y", StatusLevel::Moderate),
                ("Outstanding Debt", "₹1,50,000", StatusLevel::Good),
            ]
        );
    }

    #[test]
    fn test_metric_serializes_camel_case() {
        let metrics = build_metrics(&sample_report().risk_factors);
        let json = serde_json::to_value(&metrics[0]).unwrap();
        assert_eq!(json["formattedValue"], "32.5%");
        assert_eq!(json["status"], "Moderate");
    }
}
