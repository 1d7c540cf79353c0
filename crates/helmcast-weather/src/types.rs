//! Core weather data types.

use serde::{Deserialize, Serialize};

/// Geographic coordinates resolved from a free-text location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One timestamped interval of a multi-day wind forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Interval timestamp as delivered upstream ("YYYY-MM-DD HH:MM:SS", local time).
    pub timestamp: String,
    /// Wind speed in meters per second.
    pub wind_speed: f64,
    /// Wind direction in meteorological degrees.
    pub wind_direction: f64,
}

/// A single wind reading in the shape the advice prompt consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub time: String,
    pub speed: f64,
    pub direction: f64,
}

impl From<&ForecastRecord> for WindSample {
    fn from(record: &ForecastRecord) -> Self {
        Self {
            time: record.timestamp.clone(),
            speed: record.wind_speed,
            direction: record.wind_direction,
        }
    }
}
