use crate::report::RiskFactors;

/// Explanation Generator - スコアの説明文
///
/// Conditions are checked in a fixed order and each contributes one message.
/// The result is never empty.
pub const HIGH_UTILIZATION: &str =
    "Your credit utilization is above the ideal 30% threshold, which may be limiting your score.";
pub const RECENT_LATE_PAYMENTS: &str =
    "Recent late payments are negatively impacting your credit profile.";
pub const MANY_INQUIRIES: &str = "Multiple hard inquiries may signal increased credit dependency.";
pub const SHORT_HISTORY: &str = "A longer credit history can improve score stability over time.";
pub const POSITIVE_OUTLOOK: &str =
    "Your profile shows strong repayment behaviour and low credit risk.";

pub fn generate_score_explanation(risk_factors: &RiskFactors) -> Vec<String> {
    let utilization = risk_factors.credit_exposure.credit_utilization_percent;
    let late_payments = risk_factors.payment_behaviour.late_payments_last_6_months;
    let inquiries = risk_factors.credit_activity.hard_inquiries_last_6_months;
    let history_years = risk_factors.credit_history.credit_history_length_years;

    let mut notes: Vec<String> = Vec::new();

    if utilization > 30.0 { notes.push(HIGH_UTILIZATION.to_string()); }
    if late_payments > 0  { notes.push(RECENT_LATE_PAYMENTS.to_string()); }
    if inquiries > 2      { notes.push(MANY_INQUIRIES.to_string()); }
    if history_years < 3.0 { notes.push(SHORT_HISTORY.to_string()); }

    if notes.is_empty() {
        notes.push(POSITIVE_OUTLOOK.to_string());
    }

    notes
}
