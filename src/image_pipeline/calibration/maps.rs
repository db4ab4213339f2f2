use crate::image_pipeline::calibration::types::CalibrationConfig;
use crate::image_pipeline::common::error::{PipelineError, Result};

/// Gain compensating the radial falloff at `(x, y)`.
///
/// Distances are measured from the pixel index to `(width/2, height/2)` and
/// normalised by the squared distance to the farthest corner, so the gain is
/// exactly 1.0 at the centre and `1.0 + strength` at the corner.
#[inline]
pub fn vignette_gain(x: usize, y: usize, width: usize, height: usize, strength: f32) -> f32 {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let max_distance_squared = cx * cx + cy * cy;
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    let distance_squared_norm = (dx * dx + dy * dy) / max_distance_squared;
    1.0 + distance_squared_norm * strength
}

/// Sites whose readings are never trusted
#[derive(Debug, Clone, PartialEq)]
pub struct DefectMap {
    width: usize,
    height: usize,
    flags: Vec<bool>,
}

impl DefectMap {
    pub fn from_frame(frame: &[u8], width: usize, height: usize, config: &CalibrationConfig) -> Self {
        Self {
            width,
            height,
            flags: frame.iter().map(|&v| config.is_defective(v)).collect(),
        }
    }

    #[inline]
    pub fn is_defective(&self, x: usize, y: usize) -> bool {
        self.flags[y * self.width + x]
    }

    pub fn defect_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Per-pixel multiplicative gain undoing lens vignetting
#[derive(Debug, Clone, PartialEq)]
pub struct VignetteMap {
    width: usize,
    gains: Vec<f32>,
}

impl VignetteMap {
    pub fn new(width: usize, height: usize, strength: f32) -> Self {
        let mut gains = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                gains.push(vignette_gain(x, y, width, height, strength));
            }
        }
        Self { width, gains }
    }

    #[inline]
    pub fn gain(&self, x: usize, y: usize) -> f32 {
        self.gains[y * self.width + x]
    }

    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }
}

/// Everything calibration produces. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationMaps {
    pub defects: DefectMap,
    pub vignette: VignetteMap,
}

impl CalibrationMaps {
    pub fn build(frame: &[u8], width: usize, height: usize, config: &CalibrationConfig) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        if frame.len() != width * height {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width * height,
                actual: frame.len(),
            });
        }

        Ok(Self {
            defects: DefectMap::from_frame(frame, width, height, config),
            vignette: VignetteMap::new(width, height, config.vignette_strength),
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.defects.dimensions()
    }
}
