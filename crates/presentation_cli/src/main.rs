//! Delivery locator CLI
//!
//! Resolves a delivery location from device coordinates or an Indian PIN
//! code and prints the resulting state.

#![allow(clippy::print_stdout)]

mod interactive;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use domain::ResolutionState;
use infrastructure::{AppConfig, CoordinateSourceConfig, build_resolver, init_telemetry};

use crate::render::render_state;

/// Delivery locator CLI
#[derive(Parser)]
#[command(name = "locator-cli")]
#[command(author, version, about = "Resolve a delivery location by GPS or PIN code", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: optional ./locator.toml)
    #[arg(short, long, env = "LOCATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Print states as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve from coordinates
    ///
    /// Uses the configured coordinate source unless a point or --ip is given.
    /// Example: locator-cli gps --lat 12.9716 --lon 77.5946
    Gps {
        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Approximate the position from this host's public IP address
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        ip: bool,
    },

    /// Resolve from a 6-digit PIN code
    ///
    /// Example: locator-cli pin 411001
    Pin {
        /// PIN code (spaces and dashes are ignored)
        code: String,
    },

    /// Read commands from stdin; later commands supersede earlier ones
    Interactive,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Coordinate source override requested on the command line
fn coordinate_override(
    lat: Option<f64>,
    lon: Option<f64>,
    ip: bool,
) -> Option<CoordinateSourceConfig> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(CoordinateSourceConfig::Static {
            latitude,
            longitude,
        }),
        _ if ip => Some(CoordinateSourceConfig::Ip),
        _ => None,
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    if let Commands::Gps { lat, lon, ip } = &cli.command {
        if let Some(source) = coordinate_override(*lat, *lon, *ip) {
            config.coordinates = source;
        }
    }

    let resolver = Arc::new(build_resolver(&config)?);

    let state = match cli.command {
        Commands::Gps { .. } => resolver.start_gps_resolution().await,
        Commands::Pin { code } => resolver.start_pin_resolution(&code).await,
        Commands::Interactive => {
            interactive::run(resolver, cli.json).await?;
            return Ok(());
        },
    };

    println!("{}", render_state(&state, cli.json));
    if matches!(state, ResolutionState::Failed(_)) {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn parses_pin_command() {
        let cli = parse_args(&["locator-cli", "--json", "pin", "411 001"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Pin { ref code } if code == "411 001"));
    }

    #[test]
    fn parses_gps_with_negative_coordinates() {
        let cli =
            parse_args(&["locator-cli", "gps", "--lat", "-33.86", "--lon", "151.21"]).unwrap();
        let Commands::Gps { lat, lon, ip } = cli.command else {
            panic!("expected gps command");
        };
        assert_eq!(lat, Some(-33.86));
        assert_eq!(lon, Some(151.21));
        assert!(!ip);
    }

    #[test]
    fn gps_requires_both_coordinates() {
        assert!(parse_args(&["locator-cli", "gps", "--lat", "12.9"]).is_err());
        assert!(parse_args(&["locator-cli", "gps", "--ip", "--lat", "1", "--lon", "2"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse_args(&["locator-cli", "-vv", "interactive"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Interactive));
    }

    #[test]
    fn coordinate_override_selection() {
        assert_eq!(
            coordinate_override(Some(1.0), Some(2.0), false),
            Some(CoordinateSourceConfig::Static {
                latitude: 1.0,
                longitude: 2.0
            })
        );
        assert_eq!(
            coordinate_override(None, None, true),
            Some(CoordinateSourceConfig::Ip)
        );
        assert_eq!(coordinate_override(None, None, false), None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/locator.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
