pub mod rates;
pub mod room_type;
pub mod summary;
