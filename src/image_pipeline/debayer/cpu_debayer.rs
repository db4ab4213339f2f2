use tracing::info;

use crate::image_pipeline::calibration::CalibrationMaps;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::pixel_reader::MosaicView;
use crate::image_pipeline::debayer::types::RgbImage;

/// Demosaics a corrected mosaic and applies the vignette gain, one pixel at a time.
pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(
        &self,
        mosaic: &[u8],
        width: usize,
        height: usize,
        maps: &CalibrationMaps,
    ) -> Result<RgbImage> {
        let mut image = RgbImage::new(width, height)?;
        self.process_into(mosaic, maps, &mut image)?;
        Ok(image)
    }

    /// Fills `image`, whose dimensions define the mosaic layout.
    pub fn process_into(
        &self,
        mosaic: &[u8],
        maps: &CalibrationMaps,
        image: &mut RgbImage,
    ) -> Result<()> {
        let (width, height) = (image.width, image.height);
        if maps.dimensions() != (width, height) {
            return Err(PipelineError::CalibrationMismatch {
                calibrated: maps.dimensions(),
                frame: (width, height),
            });
        }
        if mosaic.len() != width * height {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width * height,
                actual: mosaic.len(),
            });
        }

        info!("Starting CPU debayering for image {}x{}", width, height);

        let view = MosaicView::new(mosaic, width, height, &maps.defects);
        for y in 0..height {
            for x in 0..width {
                let gain = maps.vignette.gain(x, y);
                let rgb = view
                    .interpolate_rgb(x as isize, y as isize)
                    .map(|v| apply_gain(v, gain));
                image.set_pixel(x, y, rgb);
            }
        }

        Ok(())
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scales a sample, rounds half up and clamps into a byte.
#[inline]
fn apply_gain(value: u8, gain: f32) -> u8 {
    ((f32::from(value) * gain + 0.5) as i32).clamp(0, 255) as u8
}
