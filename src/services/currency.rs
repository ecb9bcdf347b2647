use serde::{Deserialize, Serialize};

use crate::config::SummaryConfig;

/// Digit grouping convention for the integer part of an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 1,234,567
    #[default]
    Thousands,
    /// 12,34,567
    Lakh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    prefix: String,
    grouping: Grouping,
}

impl CurrencyFormatter {
    pub fn new(prefix: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            prefix: prefix.into(),
            grouping,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(config.currency_prefix.clone(), config.grouping)
    }

    /// Prefix, a space, then the grouped amount, e.g. `Rs. 12,345`.
    pub fn format(&self, value: f64) -> String {
        let amount = format_amount(value, self.grouping);
        if self.prefix.is_empty() {
            amount
        } else {
            format!("{} {}", self.prefix, amount)
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

/// Grouped amount with at most three fraction digits and no trailing zeros.
pub fn format_amount(value: f64, grouping: Grouping) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(whole, grouping));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Thousands => 3,
        Grouping::Lakh => 2,
    };

    let mut groups = Vec::with_capacity(head.len() / step + 2);
    let mut end = head.len();
    while end > step {
        groups.push(&head[end - step..end]);
        end -= step;
    }
    groups.push(&head[..end]);
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
