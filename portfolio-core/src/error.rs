//! Weather-specific error type.

use thiserror::Error;

/// Message shown in place of the widget whenever the weather cannot be loaded.
pub const WEATHER_FALLBACK_MESSAGE: &str = "Could not load weather data. Please try again later.";

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Non-success status, transport failure or an unreadable body.
    #[error("Weather upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl WeatherError {
    /// User-friendly message for the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable(_) => WEATHER_FALLBACK_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = WeatherError::UpstreamUnavailable("status 500".into());
        assert_eq!(err.to_string(), "Weather upstream unavailable: status 500");
    }

    #[test]
    fn user_message_is_fallback_notice() {
        let err = WeatherError::UpstreamUnavailable("boom".into());
        assert!(err.user_message().contains("Could not load weather data"));
    }
}
