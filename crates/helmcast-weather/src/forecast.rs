//! Multi-day wind forecast retrieval.
//!
//! Fetches the OpenWeather 5-day / 3-hour forecast in metric units and keeps
//! only what the planner needs: the interval timestamp and the wind reading.
//! Upstream ordering is preserved.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{Coordinates, ForecastRecord};

const FORECAST_PATH: &str = "/data/2.5/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt_txt: String,
    wind: WindData,
}

#[derive(Debug, Deserialize)]
struct WindData {
    speed: f64,
    deg: f64,
}

/// Client for the 3-hourly wind forecast.
pub struct ForecastClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ForecastClient {
    /// Create a new forecast client.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// Fetch every forecast interval for the given coordinates.
    ///
    /// An empty interval list is a valid response; callers decide whether
    /// that is acceptable for their target date.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coords: Coordinates) -> Result<Vec<ForecastRecord>, WeatherError> {
        let url = format!(
            "{}{}?lat={}&lon={}&units=metric&appid={}",
            self.base_url, FORECAST_PATH, coords.latitude, coords.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::ForecastApi(format!("{}: {}", status, body)));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ForecastApi(format!("Invalid response body: {}", e)))?;

        tracing::info!(intervals = body.list.len(), "Fetched forecast");

        Ok(body
            .list
            .into_iter()
            .map(|entry| ForecastRecord {
                timestamp: entry.dt_txt,
                wind_speed: entry.wind.speed,
                wind_direction: entry.wind.deg,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ForecastClient {
        ForecastClient::new("test-key", base_url).unwrap()
    }

    fn annapolis() -> Coordinates {
        Coordinates {
            latitude: 38.9784,
            longitude: -76.4922,
        }
    }

    #[tokio::test]
    async fn test_fetch_preserves_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("lat", "38.9784"))
            .and(query_param("lon", "-76.4922"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [
                    {"dt_txt": "2026-08-24 09:00:00", "wind": {"speed": 4.2, "deg": 180.0}},
                    {"dt_txt": "2026-08-24 12:00:00", "wind": {"speed": 5.8, "deg": 200.0}},
                    {"dt_txt": "2026-08-24 15:00:00", "wind": {"speed": 3.1, "deg": 170.0}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let records = client.fetch(annapolis()).await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].timestamp, "2026-08-24 09:00:00");
        assert_eq!(records[1].timestamp, "2026-08-24 12:00:00");
        assert_eq!(records[2].timestamp, "2026-08-24 15:00:00");
        assert!((records[1].wind_speed - 5.8).abs() < 1e-9);
        assert!((records[1].wind_direction - 200.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_fetch_empty_list_is_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": []})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let records = client.fetch(annapolis()).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.fetch(annapolis()).await;

        match result {
            Err(WeatherError::ForecastApi(message)) => {
                assert!(message.contains("503"));
                assert!(message.contains("maintenance"));
            }
            other => panic!("Expected ForecastApi, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.fetch(annapolis()).await;

        assert!(matches!(result, Err(WeatherError::ForecastApi(_))));
    }
}
