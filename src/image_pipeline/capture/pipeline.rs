use tracing::{info, instrument, warn};

use crate::image_pipeline::autofocus::{AutoFocus, FocusReport, SensorSharpness};
use crate::image_pipeline::calibration::CalibrationState;
use crate::image_pipeline::capture::timing::{PipelineTimings, Timer};
use crate::image_pipeline::capture::types::PipelineConfig;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::{CpuDebayer, RgbImage};
use crate::image_pipeline::sensor::{CameraSensor, CropWindow};
use crate::image_pipeline::stripes::correct_stripes;

/// Still-capture pipeline: calibrate, focus, expose, correct, demosaic.
///
/// The pipeline owns its calibration maps for its whole lifetime. It only
/// borrows the camera when built from a `&mut` sensor.
pub struct CameraPipeline<S: CameraSensor> {
    sensor: S,
    config: PipelineConfig,
    calibration: CalibrationState,
    autofocus: AutoFocus,
    debayer: CpuDebayer,
    last_focus: Option<FocusReport>,
}

impl<S: CameraSensor> CameraPipeline<S> {
    pub fn new(sensor: S, config: PipelineConfig) -> Self {
        let autofocus = AutoFocus::new(config.focus);
        Self {
            sensor,
            config,
            calibration: CalibrationState::default(),
            autofocus,
            debayer: CpuDebayer::new(),
            last_focus: None,
        }
    }

    /// Pipeline with default configuration seeded at `initial_focus`.
    pub fn with_initial_focus(sensor: S, initial_focus: i32) -> Self {
        Self::new(
            sensor,
            PipelineConfig::builder().initial_focus(initial_focus).build(),
        )
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Sensor dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Takes one picture.
    pub fn capture(&mut self) -> Result<RgbImage> {
        self.capture_with_timings().map(|(image, _)| image)
    }

    /// Takes one picture and reports how long each stage took.
    #[instrument(skip(self))]
    pub fn capture_with_timings(&mut self) -> Result<(RgbImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let width = self.sensor.image_width();
        let height = self.sensor.image_height();
        self.validate_dimensions(width, height)?;
        info!(width, height, "Starting capture");

        let mut image = RgbImage::new(width, height)?;

        let timer = Timer::start("calibrate");
        let maps = self.calibration.calibrate(
            &mut self.sensor,
            width,
            height,
            &self.config.calibration,
        )?;
        timings.record(timer.stop());

        let mut mosaic = vec![0u8; width * height];

        let timer = Timer::start("autofocus");
        if self.config.autofocus {
            let mut oracle = SensorSharpness::new(&mut self.sensor);
            let report = self.autofocus.run(&mut oracle, self.config.initial_focus)?;
            self.last_focus = Some(report);
        } else {
            let focus = self.config.focus.clamp(self.config.initial_focus);
            info!(focus, "Autofocus disabled, parking lens");
            self.sensor.set_focus(focus);
        }
        timings.record(timer.stop());

        let timer = Timer::start("expose");
        self.sensor
            .read_sensor_data(&mut mosaic, CropWindow::full_frame(width, height))?;
        timings.record(timer.stop());

        let timer = Timer::start("correct_stripes");
        correct_stripes(&mut mosaic, width, height)?;
        timings.record(timer.stop());

        let timer = Timer::start("demosaic");
        self.debayer.process_into(&mosaic, maps, &mut image)?;
        timings.record(timer.stop());

        info!(
            width,
            height,
            total_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Capture complete"
        );
        Ok((image, timings))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    /// Result of the most recent focus search, if one ran.
    pub fn last_focus(&self) -> Option<&FocusReport> {
        self.last_focus.as_ref()
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn into_sensor(self) -> S {
        self.sensor
    }
}
