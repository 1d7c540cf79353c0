//! Weather-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Geocoding API error: {0}")]
    GeocodeApi(String),

    #[error("Forecast API error: {0}")]
    ForecastApi(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
