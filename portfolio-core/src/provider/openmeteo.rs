use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherSnapshot},
    provider::truncate_body,
};

use super::WeatherProvider;

/// Variables requested from the forecast endpoint.
const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        debug!(%url, latitude = coords.latitude, longitude = coords.longitude, "fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable(format!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OmResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::UpstreamUnavailable(format!("Failed to parse Open-Meteo JSON: {e}"))
        })?;

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    wind_speed_10m: f64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmCurrentUnits {
    temperature_2m: String,
    wind_speed_10m: String,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
    current_units: OmCurrentUnits,
}

impl From<OmResponse> for WeatherSnapshot {
    fn from(r: OmResponse) -> Self {
        Self {
            temperature_value: r.current.temperature_2m,
            temperature_unit: r.current_units.temperature_2m,
            wind_speed_value: r.current.wind_speed_10m,
            wind_speed_unit: r.current_units.wind_speed_10m,
            observed_at: r.current.time,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch_current(coords).await
    }
}
