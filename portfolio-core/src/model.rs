use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Amsterdam, the location the page reports on unless configured otherwise.
pub const DEFAULT_LATITUDE: f64 = 52.3676;
pub const DEFAULT_LONGITUDE: f64 = 4.9041;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

/// Current conditions as reported by the upstream. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_value: f64,
    pub temperature_unit: String,
    pub wind_speed_value: f64,
    pub wind_speed_unit: String,
    /// ISO-8601 timestamp exactly as the upstream sent it.
    pub observed_at: String,
}

impl WeatherSnapshot {
    /// Value immediately followed by its unit, e.g. `18.4°C`.
    pub fn temperature_display(&self) -> String {
        format!("{}{}", self.temperature_value, self.temperature_unit)
    }

    pub fn wind_speed_display(&self) -> String {
        format!("{}{}", self.wind_speed_value, self.wind_speed_unit)
    }

    /// Parse `observed_at`. Open-Meteo sends minute precision without an offset
    /// (`2024-05-01T12:15`), but seconds and RFC 3339 are accepted as well.
    pub fn observed_time(&self) -> Option<NaiveDateTime> {
        let raw = self.observed_at.trim();

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
    }

    /// `HH:MM:SS`, falling back to the raw upstream string.
    pub fn observed_time_display(&self) -> String {
        self.observed_time()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| self.observed_at.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(observed_at: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_value: 18.4,
            temperature_unit: "°C".into(),
            wind_speed_value: 12.0,
            wind_speed_unit: "km/h".into(),
            observed_at: observed_at.into(),
        }
    }

    #[test]
    fn temperature_display_joins_value_and_unit() {
        assert_eq!(snapshot("2024-05-01T12:15").temperature_display(), "18.4°C");
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(snapshot("2024-05-01T12:15").wind_speed_display(), "12km/h");
    }

    #[test]
    fn observed_time_parses_minute_precision() {
        assert_eq!(snapshot("2024-05-01T12:15").observed_time_display(), "12:15:00");
    }

    #[test]
    fn observed_time_parses_rfc3339() {
        assert_eq!(
            snapshot("2024-05-01T08:30:45+02:00").observed_time_display(),
            "08:30:45"
        );
    }

    #[test]
    fn unparseable_time_falls_back_to_raw() {
        let snap = snapshot("yesterday");
        assert!(snap.observed_time().is_none());
        assert_eq!(snap.observed_time_display(), "yesterday");
    }

    #[test]
    fn default_coordinates_are_amsterdam() {
        let coords = Coordinates::default();
        assert_eq!(coords.latitude, 52.3676);
        assert_eq!(coords.longitude, 4.9041);
    }
}
