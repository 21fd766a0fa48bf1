use anyhow::{Context, Result};
use portfolio_core::{
    Config, SiteContent, WeatherProvider, WeatherWidget, provider_from_config, render_page,
};
use std::{convert::Infallible, net::SocketAddr, sync::Arc};
use tracing::info;
use warp::Filter;

/// Everything a page render needs.
#[derive(Debug)]
pub struct Site {
    pub config: Config,
    pub content: SiteContent,
    provider: Box<dyn WeatherProvider>,
}

impl Site {
    pub fn from_config(config: Config) -> Result<Self> {
        let provider = provider_from_config(&config)?;
        Ok(Self {
            config,
            content: SiteContent::default(),
            provider,
        })
    }

    pub async fn weather(&self) -> WeatherWidget {
        WeatherWidget::load(self.provider.as_ref(), self.config.location.coordinates()).await
    }

    /// Always produces a page; weather failures only swap the widget.
    pub async fn render(&self) -> String {
        let widget = self.weather().await;
        render_page(&self.content, &self.config.location.name, &widget)
    }
}

fn with_site(site: Arc<Site>) -> impl Filter<Extract = (Arc<Site>,), Error = Infallible> + Clone {
    warp::any().map(move || site.clone())
}

async fn serve_index(site: Arc<Site>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(site.render().await))
}

pub fn routes(
    site: Arc<Site>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let index_route = warp::get()
        .and(warp::path::end())
        .and(with_site(site))
        .and_then(serve_index);
    let health_route = warp::get().and(warp::path!("healthz")).map(|| "ok");

    index_route
        .or(health_route)
        .with(warp::log::custom(|info| {
            info!(
                method = %info.method(),
                path = info.path(),
                status = info.status().as_u16(),
                elapsed_ms = info.elapsed().as_millis() as u64,
                "request"
            );
        }))
}

/// Run until Ctrl-C.
pub async fn start_server(site: Arc<Site>, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {bind}"))?;

    let (addr, server) = warp::serve(routes(site))
        .try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested");
        })
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "serving portfolio");
    server.await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn site_for(base_url: &str) -> Arc<Site> {
        let mut config = Config::default();
        config.weather.base_url = base_url.to_string();
        config.weather.timeout_secs = 2;
        Arc::new(Site::from_config(config).expect("site"))
    }

    #[tokio::test]
    async fn index_renders_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let routes = routes(site_for(&server.uri()));

        // Second request inside the freshness window is served from cache.
        for _ in 0..2 {
            let res = warp::test::request().method("GET").path("/").reply(&routes).await;
            assert_eq!(res.status(), 200);
            let body = String::from_utf8_lossy(res.body());
            assert!(body.contains("Amsterdam Weather"));
            assert!(body.contains("18.4°C"));
        }
    }

    #[tokio::test]
    async fn index_degrades_when_upstream_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let res = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes(site_for(&server.uri())))
            .await;

        assert_eq!(res.status(), 200);
        let body = String::from_utf8_lossy(res.body());
        assert!(body.contains("Could not load weather data. Please try again later."));
        assert!(body.contains("Projects"));
    }

    #[tokio::test]
    async fn index_renders_when_upstream_unreachable() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let site = site_for(&format!("http://127.0.0.1:{port}"));

        let html = site.render().await;

        assert!(html.contains("Could not load weather data"));
        assert!(html.contains("Lucas Jansen"));
    }

    #[tokio::test]
    async fn healthz_and_unknown_paths() {
        let routes = routes(site_for("http://127.0.0.1:1"));

        let res = warp::test::request().path("/healthz").reply(&routes).await;
        assert_eq!(res.status(), 200);
        assert_eq!(res.body().as_ref(), b"ok");

        let res = warp::test::request().path("/nope").reply(&routes).await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn invalid_bind_address_is_rejected() {
        let err = start_server(site_for("http://127.0.0.1:1"), "not-an-addr")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid bind address"));
    }

    fn forecast_body() -> String {
        r#"{
            "current": {"time": "2024-05-01T12:15", "temperature_2m": 18.4, "wind_speed_10m": 9.7},
            "current_units": {"temperature_2m": "°C", "wind_speed_10m": "km/h"}
        }"#
        .to_string()
    }
}
