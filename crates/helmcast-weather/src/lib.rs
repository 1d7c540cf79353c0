//! Weather lookups for Helmcast
//!
//! Forward geocoding and 3-hourly wind forecasts via the OpenWeather HTTP
//! APIs, plus the pure date filtering the planner builds on.

pub mod error;
pub mod filter;
pub mod forecast;
pub mod geocode;
pub mod types;

pub use error::WeatherError;
pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;
pub use types::{Coordinates, ForecastRecord, WindSample};
