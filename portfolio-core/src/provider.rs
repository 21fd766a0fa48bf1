use crate::{
    Config, Coordinates, WeatherError, WeatherSnapshot, cache::CachedProvider,
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the Open-Meteo provider behind a freshness-window cache.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    config.validate()?;
    let upstream = OpenMeteoProvider::new(&config.weather.base_url, config.weather.timeout())?;

    let boxed: Box<dyn WeatherProvider> = Box::new(CachedProvider::new(
        upstream,
        config.weather.freshness(),
        config.weather.failure_backoff(),
    ));

    Ok(boxed)
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
