//! Capture pipeline configuration types

use crate::image_pipeline::autofocus::FocusConfig;
use crate::image_pipeline::calibration::CalibrationConfig;

/// Configuration for a camera pipeline instance
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Focus position the autofocus search starts from
    pub initial_focus: i32,
    /// Run the focus search before capturing; when off the lens is parked at `initial_focus`
    pub autofocus: bool,
    /// Focus search bounds and schedule
    pub focus: FocusConfig,
    /// Defect thresholds and vignette model
    pub calibration: CalibrationConfig,
    /// Largest accepted sensor side, if any
    pub max_dimension: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            initial_focus: 650,
            autofocus: true,
            focus: FocusConfig::default(),
            calibration: CalibrationConfig::default(),
            max_dimension: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    initial_focus: Option<i32>,
    autofocus: Option<bool>,
    focus: Option<FocusConfig>,
    calibration: Option<CalibrationConfig>,
    max_dimension: Option<Option<usize>>,
}

impl PipelineConfigBuilder {
    pub fn initial_focus(mut self, focus: i32) -> Self {
        self.initial_focus = Some(focus);
        self
    }

    pub fn autofocus(mut self, enable: bool) -> Self {
        self.autofocus = Some(enable);
        self
    }

    pub fn focus(mut self, focus: FocusConfig) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = Some(calibration);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            initial_focus: self.initial_focus.unwrap_or(default.initial_focus),
            autofocus: self.autofocus.unwrap_or(default.autofocus),
            focus: self.focus.unwrap_or(default.focus),
            calibration: self.calibration.unwrap_or(default.calibration),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
