use tracing::{info, warn};

use crate::image_pipeline::calibration::maps::CalibrationMaps;
use crate::image_pipeline::calibration::types::CalibrationConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::sensor::{CameraSensor, CropWindow};

/// Calibration lifecycle of one pipeline instance. There is no way back to
/// `Uncalibrated`.
#[derive(Debug, Clone, Default)]
pub enum CalibrationState {
    #[default]
    Uncalibrated,
    Calibrated(CalibrationMaps),
}

impl CalibrationState {
    pub fn is_calibrated(&self) -> bool {
        matches!(self, CalibrationState::Calibrated(_))
    }

    pub fn maps(&self) -> Option<&CalibrationMaps> {
        match self {
            CalibrationState::Calibrated(maps) => Some(maps),
            CalibrationState::Uncalibrated => None,
        }
    }

    /// Reads one full frame and builds the defect and vignette maps.
    ///
    /// Only the first call touches the sensor; later calls return the maps
    /// already built, whatever dimensions they are given.
    pub fn calibrate<S: CameraSensor>(
        &mut self,
        sensor: &mut S,
        width: usize,
        height: usize,
        config: &CalibrationConfig,
    ) -> Result<&CalibrationMaps> {
        match self {
            CalibrationState::Calibrated(maps) => {
                if maps.dimensions() != (width, height) {
                    warn!(
                        calibrated = ?maps.dimensions(),
                        requested = ?(width, height),
                        "Keeping maps from first calibration"
                    );
                }
                Ok(maps)
            }
            CalibrationState::Uncalibrated => {
                let mut frame = vec![0u8; width * height];
                sensor.read_sensor_data(&mut frame, CropWindow::full_frame(width, height))?;
                let maps = CalibrationMaps::build(&frame, width, height, config)?;
                info!(
                    width,
                    height,
                    defects = maps.defects.defect_count(),
                    "Calibration complete"
                );
                *self = CalibrationState::Calibrated(maps);
                self.calibrate(sensor, width, height, config)
            }
        }
    }
}
