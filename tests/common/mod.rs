#![allow(dead_code)]

use serde_json::json;
use std::rc::Rc;

use hotelease_summary::config::{AIRPORT_CHARGE_ATTRIBUTE, CONFIG_ATTRIBUTE};
use hotelease_summary::dom::memory::{MemoryDocument, MemoryElement};
use hotelease_summary::{PriceSummaryController, SummaryConfig};

pub const ROOM_TYPE: &str = "id_room_type";
pub const DAYS: &str = "id_booking_days";
pub const AIRPORT: &str = "id_airport_pick_drop";
pub const SUMMARY_ROOM_TYPE: &str = "summaryRoomType";
pub const SUMMARY_DAYS: &str = "summaryDays";
pub const SUMMARY_ROOM_RENT: &str = "summaryRoomRent";
pub const SUMMARY_AIRPORT: &str = "summaryAirport";
pub const SUMMARY_TOTAL: &str = "summaryTotal";

pub const SUMMARY_LABELS: [&str; 5] = [
    SUMMARY_ROOM_TYPE,
    SUMMARY_DAYS,
    SUMMARY_ROOM_RENT,
    SUMMARY_AIRPORT,
    SUMMARY_TOTAL,
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Booking form page with the given rate JSON and airport charge attribute.
pub struct BookingPage {
    pub document: MemoryDocument,
    pub room_type: MemoryElement,
    pub days: MemoryElement,
    pub airport: MemoryElement,
}

impl BookingPage {
    pub fn new(rates_json: &str, airport_charge: Option<&str>) -> Self {
        init_logging();
        let document = MemoryDocument::new();

        document.insert("room-rates-data", MemoryElement::script(rates_json));
        let mut container = MemoryElement::container();
        if let Some(charge) = airport_charge {
            container = container.with_attribute(AIRPORT_CHARGE_ATTRIBUTE, charge);
        }
        document.insert("bookingSummary", container);

        let room_type = document.insert(
            ROOM_TYPE,
            MemoryElement::select(&[
                ("", "---------"),
                ("deluxe", "Deluxe Room"),
                ("standard", "Standard Room"),
                ("penthouse", "Penthouse"),
            ]),
        );
        let days = document.insert(DAYS, MemoryElement::number_input("1"));
        let airport = document.insert(AIRPORT, MemoryElement::checkbox(false));
        for id in SUMMARY_LABELS {
            document.insert(id, MemoryElement::text());
        }

        Self {
            document,
            room_type,
            days,
            airport,
        }
    }

    /// `{"deluxe": 5000, "standard": 3000}` with an 800 airport charge.
    pub fn scenario() -> Self {
        Self::new(
            &json!({"deluxe": 5000, "standard": 3000}).to_string(),
            Some("800"),
        )
    }

    pub fn with_config_attribute(self, raw: &str) -> Self {
        let container = self
            .document
            .remove("bookingSummary")
            .unwrap_or_else(MemoryElement::container)
            .with_attribute(CONFIG_ATTRIBUTE, raw);
        self.document.insert("bookingSummary", container);
        self
    }

    pub fn mount(&self) -> Rc<PriceSummaryController<MemoryElement>> {
        match PriceSummaryController::initialize(&self.document, SummaryConfig::default()) {
            Ok(Some(controller)) => controller,
            Ok(None) => panic!("booking summary did not mount"),
            Err(e) => panic!("booking summary failed to mount: {}", e),
        }
    }

    pub fn text(&self, id: &str) -> String {
        self.document.text_of(id).unwrap_or_default()
    }

    pub fn days_value(&self) -> String {
        use hotelease_summary::dom::Element;
        self.days.value().unwrap_or_default()
    }

    /// The five summary labels in panel order.
    pub fn panel(&self) -> Vec<String> {
        SUMMARY_LABELS.iter().map(|id| self.text(id)).collect()
    }
}
