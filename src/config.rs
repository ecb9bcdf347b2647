use serde::Deserialize;

use crate::error::{Result, SummaryError};
use crate::services::currency::Grouping;

const RATES_DATA_ID: &str = "room-rates-data";
const SUMMARY_CONTAINER_ID: &str = "bookingSummary";
const ROOM_TYPE_FIELD_ID: &str = "id_room_type";
const DAYS_FIELD_ID: &str = "id_booking_days";
const AIRPORT_FIELD_ID: &str = "id_airport_pick_drop";
const SUMMARY_ROOM_TYPE_ID: &str = "summaryRoomType";
const SUMMARY_DAYS_ID: &str = "summaryDays";
const SUMMARY_ROOM_RENT_ID: &str = "summaryRoomRent";
const SUMMARY_AIRPORT_ID: &str = "summaryAirport";
const SUMMARY_TOTAL_ID: &str = "summaryTotal";

/// Attribute on the summary container carrying the flat airport charge.
pub const AIRPORT_CHARGE_ATTRIBUTE: &str = "data-airport-charge";
/// Optional attribute on the summary container carrying a `SummaryConfig` override.
pub const CONFIG_ATTRIBUTE: &str = "data-summary-config";

const CURRENCY_PREFIX: &str = "Rs.";
const EMPTY_SELECTION: &str = "\u{2014}";
/// Bookings run for 1 to 7 nights; overrides may only narrow this range.
pub const MIN_NIGHTS: u8 = 1;
pub const MAX_NIGHTS: u8 = 7;

/// Element ids the widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub rates_data: String,
    pub summary_container: String,
    pub room_type_field: String,
    pub days_field: String,
    pub airport_field: String,
    pub summary_room_type: String,
    pub summary_days: String,
    pub summary_room_rent: String,
    pub summary_airport: String,
    pub summary_total: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            rates_data: RATES_DATA_ID.to_string(),
            summary_container: SUMMARY_CONTAINER_ID.to_string(),
            room_type_field: ROOM_TYPE_FIELD_ID.to_string(),
            days_field: DAYS_FIELD_ID.to_string(),
            airport_field: AIRPORT_FIELD_ID.to_string(),
            summary_room_type: SUMMARY_ROOM_TYPE_ID.to_string(),
            summary_days: SUMMARY_DAYS_ID.to_string(),
            summary_room_rent: SUMMARY_ROOM_RENT_ID.to_string(),
            summary_airport: SUMMARY_AIRPORT_ID.to_string(),
            summary_total: SUMMARY_TOTAL_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub ids: ElementIds,
    pub currency_prefix: String,
    pub grouping: Grouping,
    /// Room type label shown when the selector has no selected option.
    pub empty_selection: String,
    pub min_nights: u8,
    pub max_nights: u8,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            currency_prefix: CURRENCY_PREFIX.to_string(),
            grouping: Grouping::default(),
            empty_selection: EMPTY_SELECTION.to_string(),
            min_nights: MIN_NIGHTS,
            max_nights: MAX_NIGHTS,
        }
    }
}

impl SummaryConfig {
    /// Parse an override document. Keys that are left out keep their defaults,
    /// and night bounds are pulled back inside `MIN_NIGHTS..=MAX_NIGHTS`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut config: SummaryConfig =
            serde_json::from_str(raw).map_err(|e| SummaryError::InvalidConfig(e.to_string()))?;
        config.min_nights = config.min_nights.clamp(MIN_NIGHTS, MAX_NIGHTS);
        config.max_nights = config.max_nights.clamp(config.min_nights, MAX_NIGHTS);
        Ok(config)
    }
}
