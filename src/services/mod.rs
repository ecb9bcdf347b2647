pub mod currency;
pub mod pricing_service;
