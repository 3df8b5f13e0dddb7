use chrono::{DateTime, Timelike};
use serde::Serialize;

/// Digit grouping style for rendered numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grouping {
    /// 12,34,567 (last three, then pairs)
    Indian,
    /// 1,234,567
    Western,
}

/// Insert separators into a run of ASCII digits
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Fixed-precision number with group separators
pub fn format_grouped(value: f64, decimals: usize, grouping: Grouping) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + 8);
    // no "-0" after rounding
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Rupee amount, whole units, Indian grouping: 150000 -> "₹1,50,000"
pub fn format_inr(value: f64) -> String {
    let body = format_grouped(value, 0, Grouping::Indian);
    match body.strip_prefix('-') {
        Some(rest) => format!("-₹{}", rest),
        None => format!("₹{}", body),
    }
}

/// Shortest form of a metric number: 25.0 -> "25", 32.5 -> "32.5"
pub fn format_plain(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        "0".to_string()
    }
}

/// "2026-10-19T14:30:00+05:30" -> "19 Oct 2026, 2:30 pm"
///
/// Rendered in the timestamp's own offset; anything unparseable comes back verbatim.
pub fn format_report_timestamp(raw: &str) -> String {
    let Ok(ts) = DateTime::parse_from_rfc3339(raw.trim()) else {
        return raw.to_string();
    };

    let (is_pm, hour12) = ts.hour12();
    format!(
        "{} {}, {}:{:02} {}",
        ts.format("%-d"),
        ts.format("%b %Y"),
        hour12,
        ts.minute(),
        if is_pm { "pm" } else { "am" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("150000", Grouping::Indian), "1,50,000");
        assert_eq!(group_digits("12345678", Grouping::Indian), "1,23,45,678");
        assert_eq!(group_digits("1234567", Grouping::Western), "1,234,567");
        assert_eq!(group_digits("999", Grouping::Indian), "999");
        assert_eq!(group_digits("1000", Grouping::Indian), "1,000");
    }

    #[test]
    fn test_format_grouped_precision() {
        assert_eq!(format_grouped(1234.5, 2, Grouping::Western), "1,234.50");
        assert_eq!(format_grouped(-0.001, 1, Grouping::Western), "0.0");
        assert_eq!(format_grouped(-1500.0, 0, Grouping::Indian), "-1,500");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(150000.0), "₹1,50,000");
        assert_eq!(format_inr(999.6), "₹1,000");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(25.0), "25");
        assert_eq!(format_plain(32.5), "32.5");
        assert_eq!(format_plain(f64::NAN), "0");
    }

    #[test]
    fn test_format_report_timestamp() {
        assert_eq!(
            format_report_timestamp("2026-10-19T14:30:00+05:30"),
            "19 Oct 2026, 2:30 pm"
        );
        assert_eq!(format_report_timestamp("2026-01-05T00:05:00Z"), "5 Jan 2026, 12:05 am");
        assert_eq!(format_report_timestamp("yesterday"), "yesterday");
    }
}
