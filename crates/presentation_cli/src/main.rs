//! Signage weather CLI
//!
//! Fetches (or serves from cache) a DarkSky forecast and prints it the way a
//! display would show it.

#![allow(clippy::print_stdout)]

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use application::ForecastService;
use clap::{Parser, Subcommand};
use domain::{ForecastRequest, GeoLocation, UnitSystem};
use infrastructure::{
    AppConfig, CachedForecastAdapter, DarkSkyAdapter, MokaCache, WeatherAppConfig, init_logging,
};
use tracing::debug;

/// Signage weather CLI
#[derive(Parser)]
#[command(name = "signage-weather")]
#[command(author, version, about = "Cached DarkSky forecasts for digital signage", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "SIGNAGE_WEATHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current conditions and the daily forecast
    ///
    /// Example: signage-weather forecast --lat 40.7128 --lon -74.006 --units us
    Forecast {
        /// Latitude (uses the configured default location when omitted)
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Unit system: auto, ca, si, uk2 or us
        #[arg(short, long)]
        units: Option<UnitSystem>,

        /// Summary language code, e.g. `de` or `zh-tw`
        #[arg(short, long)]
        lang: Option<String>,

        /// Print the parsed report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported unit systems
    Units,

    /// List supported summary languages
    Languages,
}

/// Determine log filter level from verbosity count
///
/// `None` keeps the configured filter.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Pick the location from the arguments or the configured default
fn resolve_location(
    lat: Option<f64>,
    lon: Option<f64>,
    weather: &WeatherAppConfig,
) -> anyhow::Result<GeoLocation> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(GeoLocation::new(lat, lon)?),
        _ => match &weather.default_location {
            Some(location) => Ok(location.to_geo_location()?),
            None => bail!("no location given: pass --lat/--lon or set weather.default_location"),
        },
    }
}

/// Apply command-line overrides and build the request
fn build_request(
    weather: &WeatherAppConfig,
    location: GeoLocation,
    units: Option<UnitSystem>,
    lang: Option<String>,
) -> anyhow::Result<ForecastRequest> {
    let mut weather = weather.clone();
    if let Some(units) = units {
        weather.units = units;
    }
    if let Some(lang) = lang {
        weather.language = lang;
    }
    Ok(weather.forecast_request(location)?)
}

fn forecast_service(config: &AppConfig) -> anyhow::Result<ForecastService> {
    let source = DarkSkyAdapter::new(config.weather.to_darksky_config())
        .context("failed to create forecast client")?;
    let cache = Arc::new(MokaCache::with_config(config.cache.to_moka_config()));
    Ok(ForecastService::new(Arc::new(CachedForecastAdapter::new(
        source, cache,
    ))))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.log_filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Forecast {
            lat,
            lon,
            units,
            lang,
            json,
        } => {
            if !config.weather.has_api_key() {
                bail!("no API key configured: set weather.api_key or SIGNAGE_WEATHER__WEATHER__API_KEY");
            }

            let location = resolve_location(lat, lon, &config.weather)?;
            let request = build_request(&config.weather, location, units, lang)?;
            debug!(?request, "Forecast request");

            let service = forecast_service(&config)?;
            let mut session = service.session(request);
            let report = session.ensure_loaded().await?;

            if json {
                let output = serde_json::json!({
                    "report": report,
                    "attribution": service.attribution(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", render::current(report));
                println!("{}", render::daily(report));
                println!("{}", service.attribution());
            }
        },

        Commands::Units => {
            print!("{}", render::units_table(&infrastructure::units_available()));
        },

        Commands::Languages => {
            print!("{}", render::languages_table(infrastructure::supported_languages()));
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use infrastructure::GeoLocationConfig;

    use super::*;

    fn weather_with_default() -> WeatherAppConfig {
        WeatherAppConfig {
            default_location: Some(GeoLocationConfig {
                latitude: 52.52,
                longitude: 13.405,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn explicit_coordinates_win_over_default() {
        let location = resolve_location(Some(40.0), Some(-74.0), &weather_with_default()).unwrap();
        assert!((location.latitude() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_location_is_used_without_coordinates() {
        let location = resolve_location(None, None, &weather_with_default()).unwrap();
        assert!((location.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_location_is_an_error() {
        assert!(resolve_location(None, None, &WeatherAppConfig::default()).is_err());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(resolve_location(Some(91.0), Some(0.0), &WeatherAppConfig::default()).is_err());
    }

    #[test]
    fn overrides_replace_configured_preferences() {
        let weather = weather_with_default();
        let location = resolve_location(None, None, &weather).unwrap();

        let request =
            build_request(&weather, location, Some(UnitSystem::Si), Some("de".into())).unwrap();

        assert_eq!(request.units(), UnitSystem::Si);
        assert_eq!(request.language().code(), "de");
        assert_eq!(request.cache_ttl(), Duration::from_secs(14_400));
    }

    #[test]
    fn unknown_language_override_is_rejected() {
        let weather = weather_with_default();
        let location = resolve_location(None, None, &weather).unwrap();
        assert!(build_request(&weather, location, None, Some("xx".into())).is_err());
    }
}
