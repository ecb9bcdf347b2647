use serde::{Deserialize, Serialize};

/// Room categories offered at HotelEase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Master,
    Meeting,
    Deluxe,
    Executive,
    Suite,
}

impl RoomType {
    /// Catalogue order, as the booking form lists them.
    pub const ALL: [RoomType; 6] = [
        RoomType::Single,
        RoomType::Master,
        RoomType::Meeting,
        RoomType::Deluxe,
        RoomType::Executive,
        RoomType::Suite,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Master => "master",
            RoomType::Meeting => "meeting",
            RoomType::Deluxe => "deluxe",
            RoomType::Executive => "executive",
            RoomType::Suite => "suite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single Room",
            RoomType::Master => "Master Room",
            RoomType::Meeting => "Meeting Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Executive => "Executive Room",
            RoomType::Suite => "Luxury Suite",
        }
    }

    /// Nightly rate in PKR
    pub fn default_rate(&self) -> f64 {
        match self {
            RoomType::Single => 5000.0,
            RoomType::Master => 9000.0,
            RoomType::Meeting => 10000.0,
            RoomType::Deluxe => 8000.0,
            RoomType::Executive => 12000.0,
            RoomType::Suite => 15000.0,
        }
    }
}
