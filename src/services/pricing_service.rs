use crate::config::{SummaryConfig, MAX_NIGHTS, MIN_NIGHTS};
use crate::models::rates::RateMap;
use crate::models::summary::{BookingSelection, SummaryDisplay};
use crate::services::currency::CurrencyFormatter;

/// Nights value after reading the nights field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightsInput {
    pub nights: u8,
    /// The field text differs from `nights` and should be rewritten.
    pub corrected: bool,
}

pub struct PricingService;

impl PricingService {
    /// Read the nights field text the way a number input is read: blank or
    /// unparseable means the first night, fractions are dropped, and the
    /// result is clamped into `min..=max`. The bounds themselves never leave
    /// `MIN_NIGHTS..=MAX_NIGHTS`.
    pub fn parse_nights(raw: Option<&str>, min: u8, max: u8) -> NightsInput {
        let (min, max) = Self::night_bounds(min, max);
        let text = raw.map(str::trim).unwrap_or("");
        let nights = match parse_number_literal(text) {
            Some(value) if !value.is_nan() => Self::clamp_nights(value, min, max),
            _ => min,
        };

        NightsInput {
            nights,
            corrected: text != nights.to_string(),
        }
    }

    pub fn clamp_nights(value: f64, min: u8, max: u8) -> u8 {
        let (min, max) = Self::night_bounds(min, max);
        let value = value.trunc();
        if value <= f64::from(min) {
            min
        } else if value >= f64::from(max) {
            max
        } else {
            value as u8
        }
    }

    fn night_bounds(min: u8, max: u8) -> (u8, u8) {
        let min = min.clamp(MIN_NIGHTS, MAX_NIGHTS);
        (min, max.clamp(min, MAX_NIGHTS))
    }

    pub fn nights_label(nights: u8) -> String {
        if nights == 1 {
            "1 night".to_string()
        } else {
            format!("{} nights", nights)
        }
    }

    /// Room rent before extras
    pub fn calculate_base_rent(nightly_rate: f64, nights: u8) -> f64 {
        nightly_rate * f64::from(nights)
    }

    pub fn calculate_airport_fee(include_airport_transfer: bool, airport_charge: f64) -> f64 {
        if include_airport_transfer {
            airport_charge
        } else {
            0.0
        }
    }

    /// Derive the whole summary panel from a selection. Pure; nothing is read
    /// from or written to the page here.
    pub fn compute_summary(
        selection: &BookingSelection,
        rates: &RateMap,
        airport_charge: f64,
        config: &SummaryConfig,
    ) -> SummaryDisplay {
        let formatter = CurrencyFormatter::from_config(config);

        let nightly_rate = rates.rate_for(selection.room_type.as_deref());
        let base_rent = Self::calculate_base_rent(nightly_rate, selection.days);
        let airport_fee =
            Self::calculate_airport_fee(selection.include_airport_transfer, airport_charge);
        let total = base_rent + airport_fee;

        SummaryDisplay {
            room_type_label: selection
                .room_type_label
                .clone()
                .unwrap_or_else(|| config.empty_selection.clone()),
            days: selection.days,
            days_label: Self::nights_label(selection.days),
            nightly_rate,
            base_rent,
            airport_fee,
            total,
            room_rent_text: formatter.format(base_rent),
            airport_text: formatter.format(airport_fee),
            total_text: formatter.format(total),
        }
    }
}

/// Numeric value of field text under the browser's string-to-number rules:
/// `0x`/`0o`/`0b` integers, `Infinity`, or a signed decimal with an optional
/// exponent. Anything else is `None`.
fn parse_number_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
        });
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    if let Some(exponent) = exponent {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent.is_empty() || !all_digits(exponent) {
            return None;
        }
    }

    text.parse::<f64>().ok()
}

/// Label next to the transfer checkbox, e.g. `Add Airport Pick & Drop (Rs. 7,000)`.
pub fn airport_toggle_label(airport_charge: f64, config: &SummaryConfig) -> String {
    format!(
        "Add Airport Pick & Drop ({})",
        CurrencyFormatter::from_config(config).format(airport_charge)
    )
}
