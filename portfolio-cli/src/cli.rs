use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use portfolio_core::{Config, WeatherWidget};
use std::{fs, path::PathBuf, sync::Arc};

use crate::server::{Site, start_server};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio site with a live weather widget")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the page over HTTP.
    Serve {
        /// Address to listen on, e.g. "0.0.0.0:8080". Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Render the page once.
    Render {
        /// Write HTML here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show current weather for the configured location.
    Weather,

    /// Interactively set the weather location and save the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command {
            Command::Serve { bind } => {
                let bind = bind.unwrap_or_else(|| config.server.bind.clone());
                let site = Arc::new(Site::from_config(config)?);
                start_server(site, &bind).await?;
            }
            Command::Render { output } => {
                let html = Site::from_config(config)?.render().await;
                match output {
                    Some(path) => fs::write(&path, html)
                        .with_context(|| format!("Failed to write page: {}", path.display()))?,
                    None => print!("{html}"),
                }
            }
            Command::Weather => {
                let site = Site::from_config(config)?;
                print_weather(&site.config.location.name, &site.weather().await);
            }
            Command::Configure => {
                let config = prompt_location(config)?;
                let path = match self.config {
                    Some(path) => {
                        config.save_to(&path)?;
                        path
                    }
                    None => config.save()?,
                };
                println!("Configuration saved to {}", path.display());
            }
        }

        Ok(())
    }
}

fn print_weather(location: &str, widget: &WeatherWidget) {
    match widget.snapshot() {
        Some(snap) => println!(
            "{location}: {}, wind {} (last updated {})",
            snap.temperature_display(),
            snap.wind_speed_display(),
            snap.observed_time_display()
        ),
        None => println!("{}", widget.fallback_message().unwrap_or_default()),
    }
}

fn prompt_location(mut config: Config) -> Result<Config> {
    let name = Text::new("Location name:")
        .with_default(&config.location.name)
        .prompt()?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.location.latitude)
        .with_error_message("Please enter a decimal number")
        .prompt()?;
    ensure!((-90.0..=90.0).contains(&latitude), "Latitude must be between -90 and 90");

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.location.longitude)
        .with_error_message("Please enter a decimal number")
        .prompt()?;
    ensure!((-180.0..=180.0).contains(&longitude), "Longitude must be between -180 and 180");

    config.location.name = name;
    config.location.latitude = latitude;
    config.location.longitude = longitude;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_with_bind_and_global_config() {
        let cli = Cli::try_parse_from([
            "portfolio",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--config",
            "/tmp/site.toml",
        ])
        .expect("parse");

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/site.toml")));
        assert!(matches!(cli.command, Command::Serve { bind: Some(ref b) } if b == "0.0.0.0:8080"));
    }

    #[test]
    fn parses_render_output() {
        let cli = Cli::try_parse_from(["portfolio", "render", "-o", "index.html"]).expect("parse");
        assert!(
            matches!(cli.command, Command::Render { output: Some(ref p) } if p == &PathBuf::from("index.html"))
        );
    }
}
