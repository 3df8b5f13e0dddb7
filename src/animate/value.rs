use serde::Serialize;

use crate::format::{format_grouped, Grouping};

/// Formatted metric string split into decoration + number
///
/// Accepted shape: `[prefix][-][digits with ',' separators][.digits][suffix]`
/// where neither prefix nor suffix contains a digit. A '-' directly in front
/// of the first digit is the sign, not part of the prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayValue {
    pub prefix: String,
    pub target: f64,
    /// Digits after the decimal point in the source string
    pub decimals: usize,
    pub suffix: String,
    pub grouping: Grouping,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParsedValue {
    Animatable(DisplayValue),
    /// Shown verbatim, never animated
    Literal { text: String },
}

impl ParsedValue {
    pub fn is_animatable(&self) -> bool {
        matches!(self, ParsedValue::Animatable(_))
    }

    pub fn target(&self) -> Option<f64> {
        match self {
            ParsedValue::Animatable(v) => Some(v.target),
            ParsedValue::Literal { .. } => None,
        }
    }

    /// Render `value` with the source decoration and precision
    pub fn render(&self, value: f64) -> String {
        match self {
            ParsedValue::Animatable(v) => v.render(value),
            ParsedValue::Literal { text } => text.clone(),
        }
    }
}

impl DisplayValue {
    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_grouped(value, self.decimals, self.grouping),
            self.suffix
        )
    }
}

/// Guess the grouping style from the separator positions in the source.
/// Only pairs between the outer groups means Indian; no separators defaults to Indian.
fn detect_grouping(groups: &[usize]) -> Grouping {
    if groups.len() < 3 {
        return Grouping::Indian;
    }
    let middle = &groups[1..groups.len() - 1];
    if middle.iter().all(|&len| len == 2) {
        Grouping::Indian
    } else {
        Grouping::Western
    }
}

pub fn parse(display: &str) -> ParsedValue {
    match tokenize(display) {
        Some(value) => ParsedValue::Animatable(value),
        None => ParsedValue::Literal {
            text: display.to_string(),
        },
    }
}

fn tokenize(display: &str) -> Option<DisplayValue> {
    let bytes = display.as_bytes();
    let first_digit = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut prefix = &display[..first_digit];
    let negative = prefix.ends_with('-');
    if negative {
        prefix = &prefix[..prefix.len() - 1];
    }

    // integer part with separators
    let mut pos = first_digit;
    let mut digits = String::new();
    let mut groups: Vec<usize> = vec![0];
    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_digit() {
            digits.push(b as char);
            if let Some(last) = groups.last_mut() {
                *last += 1;
            }
            pos += 1;
        } else if b == b',' && bytes.get(pos + 1).is_some_and(|n| n.is_ascii_digit()) {
            groups.push(0);
            pos += 1;
        } else {
            break;
        }
    }

    // optional fraction
    let mut decimals = 0;
    if bytes.get(pos) == Some(&b'.') && bytes.get(pos + 1).is_some_and(|n| n.is_ascii_digit()) {
        digits.push('.');
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            digits.push(bytes[pos] as char);
            decimals += 1;
            pos += 1;
        }
    }

    let suffix = &display[pos..];
    if suffix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude: f64 = digits.parse().ok()?;
    if !magnitude.is_finite() {
        return None;
    }
    let target = if negative { -magnitude } else { magnitude };

    Some(DisplayValue {
        prefix: prefix.to_string(),
        target,
        decimals,
        suffix: suffix.to_string(),
        grouping: detect_grouping(&groups),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animatable(s: &str) -> DisplayValue {
        match parse(s) {
            ParsedValue::Animatable(v) => v,
            other => panic!("expected animatable for {:?}, got {:?}", s, other),
        }
    }

    #[test]
    fn test_rupee_amount() {
        let v = animatable("₹1,50,000");
        assert_eq!(v.prefix, "₹");
        assert_eq!(v.target, 150000.0);
        assert_eq!(v.suffix, "");
        assert_eq!(v.decimals, 0);
        assert_eq!(v.grouping, Grouping::Indian);
        assert_eq!(v.render(150000.0), "₹1,50,000");
        assert_eq!(v.render(75000.4), "₹75,000");
    }

    #[test]
    fn test_literal_fallback() {
        let parsed = parse("N/A");
        assert!(!parsed.is_animatable());
        assert_eq!(parsed.render(42.0), "N/A");
        assert_eq!(parsed.target(), None);
    }

    #[test]
    fn test_percent_with_decimals() {
        let v = animatable("32.5%");
        assert_eq!(v.prefix, "");
        assert_eq!(v.target, 32.5);
        assert_eq!(v.decimals, 1);
        assert_eq!(v.suffix, "%");
        assert_eq!(v.render(16.31), "16.3%");
    }

    #[test]
    fn test_negative_and_suffix() {
        let v = animatable("Δ -12.50 pts");
        assert_eq!(v.prefix, "Δ ");
        assert_eq!(v.target, -12.5);
        assert_eq!(v.decimals, 2);
        assert_eq!(v.suffix, " pts");
        assert_eq!(v.render(-12.5), "Δ -12.50 pts");
    }

    #[test]
    fn test_western_grouping_detected() {
        let v = animatable("$1,234,567");
        assert_eq!(v.grouping, Grouping::Western);
        assert_eq!(v.render(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_bare_number_gets_grouped() {
        let v = animatable("742");
        assert_eq!(v.target, 742.0);
        assert_eq!(v.render(742.0), "742");
        assert_eq!(animatable("4500").render(4500.0), "4,500");
    }

    #[test]
    fn test_digits_in_suffix_rejected() {
        assert!(!parse("3 of 5").is_animatable());
        assert!(!parse("2026-10-19").is_animatable());
    }

    #[test]
    fn test_trailing_separator_goes_to_suffix() {
        let v = animatable("12, roughly");
        assert_eq!(v.target, 12.0);
        assert_eq!(v.suffix, ", roughly");
    }

    #[test]
    fn test_dot_without_digits_is_suffix() {
        let v = animatable("4y.");
        assert_eq!(v.target, 4.0);
        assert_eq!(v.decimals, 0);
        assert_eq!(v.suffix, "y.");
    }

    #[test]
    fn test_overflowing_digits_stay_literal() {
        let huge = format!("₹{}", "9".repeat(400));
        let parsed = parse(&huge);
        assert!(!parsed.is_animatable());
        assert_eq!(parsed.render(0.0), huge);
    }
}
