//! Forward geocoding against the OpenWeather direct geocoding API.
//!
//! Turns a free-text location ("Annapolis, MD, US") into coordinates. Only
//! the best match is requested; an empty candidate list means the location
//! is unknown upstream.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::Coordinates;

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One geocoding candidate from the API. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    lat: f64,
    lon: f64,
}

/// Client for forward geocoding lookups.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocoding client.
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

    /// Resolve a free-text location to coordinates.
    ///
    /// Returns [`WeatherError::LocationNotFound`] when the API yields no
    /// candidates for the query.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, location: &str) -> Result<Coordinates, WeatherError> {
        let url = format!(
            "{}{}?q={}&limit=1&appid={}",
            self.base_url,
            GEOCODE_PATH,
            urlencoding::encode(location),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::GeocodeApi(format!("{}: {}", status, body)));
        }

        let matches: Vec<GeocodeMatch> = response
            .json()
            .await
            .map_err(|e| WeatherError::GeocodeApi(format!("Invalid response body: {}", e)))?;

        let hit = matches
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(location.to_string()))?;

        tracing::info!(lat = hit.lat, lon = hit.lon, "Resolved location");

        Ok(Coordinates {
            latitude: hit.lat,
            longitude: hit.lon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeocodeClient {
        GeocodeClient::new("test-key", base_url).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_returns_first_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Annapolis, MD, US"))
            .and(query_param("limit", "1"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Annapolis", "lat": 38.9784, "lon": -76.4922, "country": "US"},
                {"name": "Annapolis Royal", "lat": 44.7417, "lon": -65.5142, "country": "CA"}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let coords = client.resolve("Annapolis, MD, US").await.unwrap();

        assert!((coords.latitude - 38.9784).abs() < 1e-9);
        assert!((coords.longitude - (-76.4922)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_resolve_empty_result_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.resolve("Atlantis").await;

        match result {
            Err(WeatherError::LocationNotFound(query)) => assert_eq!(query, "Atlantis"),
            other => panic!("Expected LocationNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.resolve("Annapolis").await;

        match result {
            Err(WeatherError::GeocodeApi(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("upstream down"));
            }
            other => panic!("Expected GeocodeApi, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_encodes_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Sainte-Anne-de-Bellevue, QC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": 45.4062, "lon": -73.9496}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let coords = client.resolve("Sainte-Anne-de-Bellevue, QC").await.unwrap();

        assert!((coords.latitude - 45.4062).abs() < 1e-9);
    }
}
