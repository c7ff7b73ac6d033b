use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pilotage_core::chart::{SpeedRange, sweep_wind_force_curve, write_curve_csv};
use pilotage_core::config::Calibration;
use pilotage_core::scenario::Scenario;
use pilotage_core::{Calculator, TextView, View};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pilotage decision support: wind, drift, tugs and docking margin")]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Calibration file; overrides the scenario's [calibration] table
    #[arg(long)]
    calibration: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the tug force vs surface speed curve to this CSV file
    #[arg(long)]
    tug_curve: Option<PathBuf>,

    /// Write the wind force vs mean wind curve to this CSV file
    #[arg(long)]
    wind_curve: Option<PathBuf>,

    /// Upper end of the surface speed sweep (kn)
    #[arg(long, default_value_t = 10.0)]
    max_speed: f64,

    /// Upper end of the mean wind sweep (kn)
    #[arg(long, default_value_t = 60.0)]
    max_wind: f64,

    /// Sweep step (kn)
    #[arg(long, default_value_t = 0.5)]
    step: f64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scenario = Scenario::from_file(&cli.scenario)
        .with_context(|| format!("failed to load scenario {}", cli.scenario.display()))?;

    let calibration = match &cli.calibration {
        Some(path) => Calibration::from_file(path)
            .with_context(|| format!("failed to load calibration {}", path.display()))?,
        None => {
            let calibration = scenario.calibration.unwrap_or_default();
            calibration.validate().context("invalid [calibration] table")?;
            calibration
        }
    };

    let inputs = scenario.to_inputs().context("failed to resolve scenario inputs")?;
    let calculator = Calculator::new(calibration);
    let report = calculator.evaluate(&inputs).context("scenario rejected")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        TextView::new(io::stdout().lock()).render(&report)?;
    }

    if let Some(path) = &cli.tug_curve {
        let speeds = SpeedRange::knots(0.0, cli.max_speed, cli.step)?;
        let curve = calculator.tug_force_curve(&inputs, speeds)?;
        write_curve_csv(File::create(path)?, "speed_kn", curve)?;
        info!(path = %path.display(), "wrote tug force curve");
    }

    if let Some(path) = &cli.wind_curve {
        let winds = SpeedRange::knots(0.0, cli.max_wind, cli.step)?;
        let curve = sweep_wind_force_curve(&inputs.vessel, &inputs.environment, winds);
        write_curve_csv(File::create(path)?, "wind_kn", curve)?;
        info!(path = %path.display(), "wrote wind force curve");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
