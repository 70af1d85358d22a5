use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use walksafe::assessment;
use walksafe::best_times::calculate_best_times;
use walksafe::breed::Breed;
use walksafe::config::BestTimesConfig;
use walksafe::forecast;
use walksafe::models::{OptimalWalkTime, WeatherReading};
use walksafe::report;

#[derive(Parser)]
#[command(name = "walksafe")]
#[command(about = "Breed-aware weather safety advice for dog walks", long_about = None)]
struct Cli {
    /// Log engine decisions at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Conditions {
    /// Air temperature in °F
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,
    /// Relative humidity, 0-100
    #[arg(long)]
    humidity: f64,
    /// Wind speed in mph
    #[arg(long, default_value_t = 0.0)]
    wind: f64,
}

impl Conditions {
    fn reading(&self) -> WeatherReading {
        WeatherReading::new(self.temperature, self.humidity, self.wind)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List supported breeds and their thresholds
    Breeds {
        #[arg(long)]
        json: bool,
    },
    /// Assess current conditions for a breed
    Assess {
        #[arg(long, value_enum)]
        breed: Breed,
        #[command(flatten)]
        conditions: Conditions,
        #[arg(long)]
        json: bool,
    },
    /// Rank today's walking windows
    BestTimes {
        #[arg(long, value_enum)]
        breed: Breed,
        #[arg(long, allow_negative_numbers = true, requires = "humidity")]
        temperature: Option<f64>,
        #[arg(long, requires = "temperature")]
        humidity: Option<f64>,
        #[arg(long, default_value_t = 0.0)]
        wind: f64,
        /// Hourly forecast CSV (observed_at,temperature,humidity,wind_speed)
        #[arg(long)]
        forecast: Option<PathBuf>,
        #[arg(long)]
        max_windows: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown walk report
    Report {
        #[arg(long, value_enum)]
        breed: Breed,
        #[command(flatten)]
        conditions: Conditions,
        #[arg(long)]
        forecast: Option<PathBuf>,
        #[arg(long, default_value = "walk-report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = BestTimesConfig::from_env().context("invalid best-times configuration")?;
    info!(
        max_time_windows = config.max_time_windows,
        uv_weight = config.uv_weight,
        "configuration loaded"
    );

    match cli.command {
        Commands::Breeds { json } => {
            if json {
                let profiles: Vec<_> = Breed::ALL.iter().map(|b| b.profile()).collect();
                println!("{}", serde_json::to_string_pretty(&profiles)?);
                return Ok(());
            }

            for breed in Breed::ALL {
                let profile = breed.profile();
                println!(
                    "- {}: safe {}-{}°F, caution {}-{}°F, humidity <= {}%, wind <= {} mph, {} heat sensitivity",
                    profile.name,
                    profile.safe_temperature_range.start(),
                    profile.safe_temperature_range.end(),
                    profile.caution_temperature_range.start(),
                    profile.caution_temperature_range.end(),
                    profile.max_humidity,
                    profile.max_wind_speed,
                    profile.heat_sensitivity.display_name()
                );
            }
        }
        Commands::Assess {
            breed,
            conditions,
            json,
        } => {
            let reading = conditions.reading();
            let result = assessment::assess(&reading, breed.profile());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!(
                "{} at {}: {}",
                breed.name(),
                reading.formatted_temperature(),
                result.safety_level.label()
            );
            println!("{}", result.recommendation);
            println!("Walk length: {}", result.walk_duration.display_name());
            for warning in result.active_warnings.iter() {
                println!("- {}", warning.display_name());
            }
            for range in &result.best_time_recommendations {
                println!("Try {}", range.display_text());
            }
        }
        Commands::BestTimes {
            breed,
            temperature,
            humidity,
            wind,
            forecast,
            max_windows,
            json,
        } => {
            let config = config.with_max_time_windows(max_windows);
            let current = temperature
                .zip(humidity)
                .map(|(temperature, humidity)| WeatherReading::new(temperature, humidity, wind));
            let hourly = load_forecast(forecast.as_deref())?;

            let times = calculate_best_times(
                breed.profile(),
                current.as_ref(),
                hourly.as_deref(),
                &config,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&times)?);
                return Ok(());
            }

            println!("Today's best times for {}:", breed.name());
            print_times(&times);
        }
        Commands::Report {
            breed,
            conditions,
            forecast,
            out,
        } => {
            let reading = conditions.reading();
            let hourly = load_forecast(forecast.as_deref())?;
            let profile = breed.profile();

            let result = assessment::assess(&reading, profile);
            let times = calculate_best_times(profile, Some(&reading), hourly.as_deref(), &config);
            let report = report::build_report(profile, &reading, &result, &times);

            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_forecast(path: Option<&std::path::Path>) -> anyhow::Result<Option<Vec<WeatherReading>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let readings = forecast::import_csv(path)?;
    info!(entries = readings.len(), path = %path.display(), "loaded hourly forecast");
    Ok(Some(readings))
}

fn print_times(times: &[OptimalWalkTime]) {
    for time in times {
        println!(
            "- {} {} ({}, {}) score {:.2}",
            time.time_range,
            time.safety_level.label(),
            time.temperature,
            time.uv_index,
            time.score
        );
        println!("  {}", time.reasoning);
        println!("  {}", time.recommendation);
    }
}
