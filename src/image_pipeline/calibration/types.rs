//! Calibration configuration

/// Thresholds and lens model used when building the calibration maps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConfig {
    /// Samples strictly below this value mark a dead site
    pub defect_low: u8,
    /// Samples strictly above this value mark a hot site
    pub defect_high: u8,
    /// Extra gain applied at the farthest corner relative to the centre
    pub vignette_strength: f32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            defect_low: 10,
            defect_high: 245,
            vignette_strength: 0.35,
        }
    }
}

impl CalibrationConfig {
    #[inline]
    pub fn is_defective(&self, sample: u8) -> bool {
        sample < self.defect_low || sample > self.defect_high
    }
}
