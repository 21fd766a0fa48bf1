//! Core library for the `portfolio` site.
//!
//! This crate defines:
//! - Configuration handling
//! - The weather widget: Open-Meteo provider, freshness cache, failure flag
//! - Static page content and HTML rendering
//!
//! It is used by `portfolio-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod page;
pub mod provider;
pub mod widget;

pub use cache::CachedProvider;
pub use config::Config;
pub use content::SiteContent;
pub use error::{WEATHER_FALLBACK_MESSAGE, WeatherError};
pub use model::{Coordinates, WeatherSnapshot};
pub use page::render_page;
pub use provider::{WeatherProvider, provider_from_config};
pub use widget::{WeatherWidget, fetch_current_weather};
