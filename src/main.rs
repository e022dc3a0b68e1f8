//! Wave spectrum estimation command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wave_spectrum::{
    characterize_rao_from_files, estimate_wave_spectrum_from_file, EstimationConfig,
    UniformSampler,
};

#[derive(Parser)]
#[command(name = "wave-spectrum-estimation")]
#[command(
    about = "Estimate an ocean wave energy spectrum from vessel heave acceleration",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Heave displacement test measurements (RAO calibration)
    #[arg(short = 'd', long, value_name = "FILE", default_value = "testingHeave.csv")]
    heave_displacement: PathBuf,

    /// Heave displacement measurement uncertainty
    #[arg(short = 'D', long, default_value_t = 0.1)]
    heave_uncertainty: f32,

    /// Wave elevation test measurements (RAO calibration)
    #[arg(short = 'e', long, value_name = "FILE", default_value = "testingWaveElevation.csv")]
    wave_elevation: PathBuf,

    /// Wave elevation measurement uncertainty
    #[arg(short = 'E', long, default_value_t = 0.1)]
    wave_uncertainty: f32,

    /// Heave acceleration measurements taken at sea
    #[arg(short = 'a', long, value_name = "FILE", default_value = "oceanHeaveAcceleration.csv")]
    heave_acceleration: PathBuf,

    /// Accelerometer resolution
    #[arg(short = 'A', long, default_value_t = 0.1)]
    accelerometer_resolution: f32,

    /// Time between successive measurements in seconds
    #[arg(short = 't', long, default_value_t = 0.1)]
    timestep: f32,

    /// Seed for measurement uncertainty sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full spectrum as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = EstimationConfig {
        heave_measurement_uncertainty: cli.heave_uncertainty,
        wave_elevation_uncertainty: cli.wave_uncertainty,
        accelerometer_resolution: cli.accelerometer_resolution,
        timestep: cli.timestep,
        seed: cli.seed,
        ..Default::default()
    };
    config.validate()?;

    let mut sampler = UniformSampler::from_seed_option(config.seed);

    let rao = characterize_rao_from_files(
        &cli.heave_displacement,
        &cli.wave_elevation,
        &config,
        &mut sampler,
    )
    .with_context(|| {
        format!(
            "Failed to characterize RAO from {} and {}",
            cli.heave_displacement.display(),
            cli.wave_elevation.display()
        )
    })?;

    let result =
        estimate_wave_spectrum_from_file(&cli.heave_acceleration, &rao, &config, &mut sampler)
            .with_context(|| {
                format!(
                    "Failed to estimate wave spectrum from {}",
                    cli.heave_acceleration.display()
                )
            })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Wave spectrum: (frequency, wave energy spectral density)");
    for bin in result.summary(config.max_summary_lines) {
        println!("{:.6} Hz, {:.6}", bin.frequency_hz, bin.density);
    }

    if cli.verbose {
        println!(
            "{} samples, {} bins, {:.2} ms",
            result.metadata.input_samples,
            result.metadata.spectrum_len,
            result.metadata.processing_time_ms
        );
    }

    Ok(())
}
