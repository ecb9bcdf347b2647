pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SummaryConfig;
pub use controller::PriceSummaryController;
pub use error::{Result, SummaryError};
pub use models::rates::RateMap;
pub use models::summary::{BookingSelection, SummaryDisplay};
pub use services::pricing_service::PricingService;
