use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use camera_pipeline_rs::image_pipeline::{
    CameraPipeline, OutputConfig, PipelineConfig, SensorConfig, SimulatedSensor,
    StandardTiffWriter, TiffCompression, TiffWriter, load_scene_file,
};
use camera_pipeline_rs::logger;

#[derive(Parser)]
#[command(name = "camera_pipeline")]
#[command(version, about = "Simulated camera capture: calibrate, focus, expose and develop one frame", long_about = None)]
struct Cli {
    /// Scene to photograph (TIFF, or any camera RAW rawloader can decode)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output TIFF file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Focus position the autofocus search starts from
    #[arg(long, value_name = "INT", default_value_t = 650, allow_negative_numbers = true)]
    focus: i32,

    /// Amount of sensor measurement noise
    #[arg(long, value_name = "0-4", default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    noise_level: u8,

    /// Turn on low-quality sensor mode
    #[arg(long)]
    very_bad_sensor: bool,

    /// Seed for the simulated sensor's randomness
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Sharpest lens position of the simulated sensor (random when omitted)
    #[arg(long, value_name = "INT")]
    optimal_focus: Option<i32>,

    /// TIFF compression: none, lzw, deflate-fast, deflate, deflate-best
    #[arg(long, value_name = "KIND", default_value = "none")]
    compression: TiffCompression,

    /// Print a per-stage timing summary
    #[arg(long)]
    timings: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init("info");
    let cli = Cli::parse();

    info!("Starting camera pipeline...");

    let scene = load_scene_file(&cli.input)
        .with_context(|| format!("loading scene {}", cli.input.display()))?;

    let mut sensor_config = SensorConfig::builder()
        .noise_level(cli.noise_level)
        .bad_sensor(cli.very_bad_sensor)
        .optimal_focus(cli.optimal_focus);
    if let Some(seed) = cli.seed {
        sensor_config = sensor_config.seed(seed);
    }
    let mut sensor = SimulatedSensor::new(scene, sensor_config.build())?;

    let config = PipelineConfig::builder().initial_focus(cli.focus).build();
    let mut pipeline = CameraPipeline::new(&mut sensor, config);

    let (image, timings) = pipeline.capture_with_timings().context("capture failed")?;
    if let Some(report) = pipeline.last_focus() {
        info!(
            focus = report.focus,
            score = report.score,
            evaluations = report.evaluations,
            "Lens focused"
        );
    }

    let output_config = OutputConfig::builder().compression(cli.compression).build();
    StandardTiffWriter
        .write_file(&image, &cli.output, &output_config)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        output = %cli.output.display(),
        exposures = sensor.exposure_count(),
        "Capture saved"
    );

    if cli.timings {
        println!("{}", timings);
    }

    Ok(())
}
