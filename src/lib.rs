//! CityFacts — a small iced desktop client for the city facts backend.

pub mod client;
pub mod common;
pub mod utils;
