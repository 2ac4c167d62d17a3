//! Command-line front end for the exoplanet characterization engine.
//!
//! Subcommands:
//! - `habitability`: Score a planet's habitability
//! - `classify`: Classify a planet's type
//! - `transit`: Simulate and analyse a transit light curve
//! - `analyze`: Habitability and planet type together
//! - `info`: Engine name, version and operations
//!
//! Results are printed to stdout as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use engine::{AnalysisRequest, Engine, EngineConfig, TransitParameters, TransitResult};

#[derive(Parser, Debug)]
#[command(name = "exoplanet")]
#[command(about = "Exoplanet habitability, planet-type and transit analysis")]
#[command(version)]
struct Cli {
    /// Config TOML file (defaults to exoplanet.toml or config/exoplanet.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a planet's habitability
    Habitability {
        /// Planet radius in Earth radii
        #[arg(long)]
        radius: f64,

        /// Orbital distance in AU
        #[arg(long)]
        orbit: f64,

        /// Host star spectral class (O, B, A, F, G, K, M)
        #[arg(long, default_value = "G")]
        star_type: String,

        /// Host star mass in solar masses
        #[arg(long)]
        star_mass: Option<f64>,

        /// Host star temperature in Kelvin
        #[arg(long)]
        star_temp: Option<f64>,
    },

    /// Classify a planet as Rocky, Gas Giant, Ice Giant or Super-Earth
    Classify {
        /// Planet radius in Earth radii
        #[arg(long)]
        radius: f64,

        /// Planet mass in Earth masses
        #[arg(long)]
        mass: f64,

        /// Orbital distance in AU
        #[arg(long)]
        orbit: f64,
    },

    /// Simulate a transit light curve and detect its transits
    Transit {
        /// Planet name used in the plot title
        #[arg(long)]
        name: Option<String>,

        /// Seed for the photometric noise
        #[arg(long)]
        seed: Option<u64>,

        /// Planet radius in stellar radii (demo system when omitted)
        #[arg(long)]
        planet_radius: Option<f64>,

        /// Orbital period in days
        #[arg(long)]
        period: Option<f64>,

        /// First transit centre in days
        #[arg(long)]
        t0: Option<f64>,

        /// Semi-major axis in stellar radii
        #[arg(long)]
        semi_major_axis: Option<f64>,

        /// Omit the plot series and print only the summary
        #[arg(long)]
        summary: bool,
    },

    /// Habitability and planet type for one planet
    Analyze {
        /// Planet radius in Earth radii
        #[arg(long)]
        radius: f64,

        /// Orbital distance in AU
        #[arg(long)]
        orbit: f64,

        /// Planet mass in Earth masses
        #[arg(long)]
        mass: Option<f64>,

        /// Host star spectral class
        #[arg(long)]
        star_type: Option<String>,

        /// Host star mass in solar masses
        #[arg(long)]
        star_mass: Option<f64>,

        /// Host star temperature in Kelvin
        #[arg(long)]
        star_temp: Option<f64>,

        /// Planet name echoed in the report
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the engine name, version and operations
    Info,
}

/// Short form of a transit result without the plot series
#[derive(Serialize)]
struct TransitSummary<'a> {
    title: &'a str,
    depth: f64,
    transits_detected: usize,
    transit_times: &'a [f64],
}

impl<'a> From<&'a TransitResult> for TransitSummary<'a> {
    fn from(result: &'a TransitResult) -> Self {
        Self {
            title: &result.image.title,
            depth: result.depth,
            transits_detected: result.transits_detected,
            transit_times: &result.image.transit_markers,
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, engine::EngineError> {
    match path {
        Some(path) => EngineConfig::from_file(path),
        None => EngineConfig::from_default_location(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    if let Command::Transit {
        seed: Some(seed), ..
    } = &cli.command
    {
        config.transit.noise_seed = Some(*seed);
    }
    let engine = Engine::new(config);

    match cli.command {
        Command::Habitability {
            radius,
            orbit,
            star_type,
            star_mass,
            star_temp,
        } => {
            let result = engine.habitability(radius, orbit, &star_type, star_mass, star_temp)?;
            print_json(&result, cli.compact)?;
        }

        Command::Classify {
            radius,
            mass,
            orbit,
        } => {
            let result = engine.classify(radius, mass, orbit)?;
            print_json(&result, cli.compact)?;
        }

        Command::Transit {
            name,
            planet_radius,
            period,
            t0,
            semi_major_axis,
            summary,
            ..
        } => {
            let custom = planet_radius.is_some()
                || period.is_some()
                || t0.is_some()
                || semi_major_axis.is_some();

            let result = if custom {
                let defaults = TransitParameters::default();
                let params = TransitParameters {
                    planet_radius: planet_radius.unwrap_or(defaults.planet_radius),
                    period: period.unwrap_or(defaults.period),
                    t0: t0.unwrap_or(defaults.t0),
                    semi_major_axis: semi_major_axis.unwrap_or(defaults.semi_major_axis),
                    ..defaults
                };
                engine.simulate_transit(&params, name.as_deref())?
            } else {
                engine.transit_sample(name.as_deref())?
            };

            if summary {
                print_json(&TransitSummary::from(&result), cli.compact)?;
            } else {
                print_json(&result, cli.compact)?;
            }
        }

        Command::Analyze {
            radius,
            orbit,
            mass,
            star_type,
            star_mass,
            star_temp,
            name,
        } => {
            let request = AnalysisRequest {
                radius,
                orbit,
                mass,
                star_type,
                star_mass,
                star_temp,
                planet_name: name,
            };
            let report = engine.analyze(&request)?;
            print_json(&report, cli.compact)?;
        }

        Command::Info => print_json(&engine.info(), cli.compact)?,
    }

    Ok(())
}
