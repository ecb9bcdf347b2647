use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Result, SummaryError};
use crate::models::room_type::RoomType;

/// Flat airport pick & drop charge in PKR.
pub const DEFAULT_AIRPORT_CHARGE: f64 = 7000.0;

/// Room-type code to nightly rate. Fixed for the widget's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateMap {
    rates: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCard {
    pub code: &'static str,
    pub label: &'static str,
    pub price: f64,
}

impl RateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hotelease_defaults() -> Self {
        RoomType::ALL
            .into_iter()
            .map(|room_type| (room_type.code(), room_type.default_rate()))
            .collect()
    }

    /// Parse the embedded rate table. Empty text is an empty table.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }

        let rates: BTreeMap<String, f64> = serde_json::from_str(raw)?;
        if let Some((code, rate)) = rates.iter().find(|(_, rate)| !rate.is_finite() || **rate < 0.0) {
            return Err(SummaryError::MalformedRateData(format!(
                "rate for '{}' must be a non-negative number, got {}",
                code, rate
            )));
        }

        Ok(Self { rates })
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), rate.max(0.0));
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Nightly rate for a code; unknown codes cost nothing.
    pub fn rate_for(&self, code: Option<&str>) -> f64 {
        code.and_then(|code| self.get(code)).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Catalogue rows priced from this table.
    pub fn rate_cards(&self) -> Vec<RateCard> {
        RoomType::ALL
            .into_iter()
            .map(|room_type| RateCard {
                code: room_type.code(),
                label: room_type.label(),
                price: self.rate_for(Some(room_type.code())),
            })
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RateMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = RateMap::new();
        for (code, rate) in iter {
            map.insert(code, rate);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embedded_rates() {
        let rates = RateMap::from_json(r#"{"deluxe": 5000, "standard": 3000.5}"#).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates.get("deluxe"), Some(5000.0));
        assert_eq!(rates.get("standard"), Some(3000.5));
    }

    #[test]
    fn test_empty_text_is_empty_map() {
        assert!(RateMap::from_json("").unwrap().is_empty());
        assert!(RateMap::from_json("  \n").unwrap().is_empty());
        assert!(RateMap::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_rates_are_rejected() {
        for raw in ["{", "[1, 2]", r#"{"deluxe": "5000"}"#, r#"{"deluxe": null}"#, "42"] {
            assert!(
                matches!(RateMap::from_json(raw), Err(SummaryError::MalformedRateData(_))),
                "expected {raw} to be rejected"
            );
        }
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let err = RateMap::from_json(r#"{"single": -1}"#).unwrap_err();
        assert!(err.to_string().contains("single"));
    }

    #[test]
    fn test_unknown_code_costs_nothing() {
        let rates = RateMap::hotelease_defaults();
        assert_eq!(rates.rate_for(Some("suite")), 15000.0);
        assert_eq!(rates.rate_for(Some("penthouse")), 0.0);
        assert_eq!(rates.rate_for(None), 0.0);
    }

    #[test]
    fn test_rate_cards_follow_catalogue_order() {
        let rates: RateMap = [("deluxe", 5000.0), ("custom", 1.0)].into_iter().collect();
        let cards = rates.rate_cards();
        assert_eq!(cards.len(), RoomType::ALL.len());
        assert_eq!(cards[0].code, "single");
        assert_eq!(cards[0].price, 0.0);
        assert_eq!(cards[3].label, "Deluxe Room");
        assert_eq!(cards[3].price, 5000.0);
    }
}
