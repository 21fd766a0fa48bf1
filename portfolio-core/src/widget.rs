//! Weather widget state handed to the page renderer.

use tracing::error;

use crate::{
    error::{WEATHER_FALLBACK_MESSAGE, WeatherError},
    model::{Coordinates, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Fetch current conditions for `coords`.
pub async fn fetch_current_weather(
    provider: &dyn WeatherProvider,
    coords: Coordinates,
) -> Result<WeatherSnapshot, WeatherError> {
    provider.current_weather(coords).await
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherWidget {
    Loaded(WeatherSnapshot),
    Unavailable,
}

impl WeatherWidget {
    /// Never fails: upstream errors are logged and become `Unavailable`.
    pub async fn load(provider: &dyn WeatherProvider, coords: Coordinates) -> Self {
        match fetch_current_weather(provider, coords).await {
            Ok(snapshot) => Self::Loaded(snapshot),
            Err(err) => {
                error!(error = %err, "Error fetching weather data");
                Self::Unavailable
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            Self::Unavailable => None,
        }
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        self.is_failed().then_some(WEATHER_FALLBACK_MESSAGE)
    }
}
