//! In-memory freshness-window cache in front of a weather provider.

use async_trait::async_trait;
use std::time::Duration;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherSnapshot},
    provider::WeatherProvider,
};

#[derive(Debug, Clone)]
struct CacheEntry {
    coords: Coordinates,
    snapshot: WeatherSnapshot,
    fetched_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entry: Option<CacheEntry>,
    /// Last failed upstream call; no new call for these coordinates until `failure_backoff` has passed.
    last_failure: Option<(Coordinates, Instant)>,
}

/// Reuses the last successful snapshot for the same coordinates until it is
/// older than `freshness`. Failed calls are remembered for `failure_backoff`,
/// during which callers get the stale snapshot or an error without touching
/// the upstream.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    freshness: Duration,
    failure_backoff: Duration,
    state: Mutex<CacheState>,
}

impl<P: WeatherProvider> CachedProvider<P> {
    pub fn new(inner: P, freshness: Duration, failure_backoff: Duration) -> Self {
        Self {
            inner,
            freshness,
            failure_backoff,
            state: Mutex::new(CacheState::default()),
        }
    }
}

#[async_trait]
impl<P: WeatherProvider> WeatherProvider for CachedProvider<P> {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        // Held across the fetch; waiters see the outcome once they get the lock.
        let mut state = self.state.lock().await;

        let stale = match state.entry.as_ref() {
            Some(entry) if entry.coords == coords => {
                if entry.fetched_at.elapsed() < self.freshness {
                    debug!("weather cache hit");
                    return Ok(entry.snapshot.clone());
                }
                Some(entry.snapshot.clone())
            }
            _ => None,
        };

        let backing_off = state
            .last_failure
            .is_some_and(|(c, at)| c == coords && at.elapsed() < self.failure_backoff);
        if backing_off {
            debug!("weather upstream in backoff after recent failure");
            return stale.ok_or_else(|| {
                WeatherError::UpstreamUnavailable(
                    "upstream failed recently, waiting before retrying".to_string(),
                )
            });
        }

        match self.inner.current_weather(coords).await {
            Ok(snapshot) => {
                state.entry = Some(CacheEntry {
                    coords,
                    snapshot: snapshot.clone(),
                    fetched_at: Instant::now(),
                });
                state.last_failure = None;
                Ok(snapshot)
            }
            Err(err) => {
                state.last_failure = Some((coords, Instant::now()));
                match stale {
                    Some(snapshot) => {
                        warn!(error = %err, "weather revalidation failed, serving stale snapshot");
                        Ok(snapshot)
                    }
                    None => Err(err),
                }
            }
        }
    }
}
