use serde::Serialize;

/// Current state of the booking form, read fresh on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSelection {
    pub room_type: Option<String>,
    /// Text of the selected room option, as shown to the guest.
    pub room_type_label: Option<String>,
    /// Already clamped into the configured night bounds.
    pub days: u8,
    pub include_airport_transfer: bool,
}

/// Everything the summary panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDisplay {
    pub room_type_label: String,
    pub days: u8,
    pub days_label: String,
    pub nightly_rate: f64,
    pub base_rent: f64,
    pub airport_fee: f64,
    pub total: f64,
    pub room_rent_text: String,
    pub airport_text: String,
    pub total_text: String,
}
