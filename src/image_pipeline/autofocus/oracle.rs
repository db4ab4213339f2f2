use crate::image_pipeline::bayer::{BayerColor, color_at};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::sensor::{CameraSensor, CropWindow};

/// Something the focus search can ask "how sharp is it at this position".
pub trait FocusOracle {
    /// Moves the lens to `focus` and measures sharpness there.
    fn score(&mut self, focus: i32) -> Result<f64>;

    /// Leaves the lens at `focus` once the search is over.
    fn settle(&mut self, _focus: i32) -> Result<()> {
        Ok(())
    }
}

impl<F: FnMut(i32) -> f64> FocusOracle for F {
    fn score(&mut self, focus: i32) -> Result<f64> {
        Ok(self(focus))
    }
}

/// Centred window used for sharpness, 1/8 of the frame clamped to 32..=128
/// per axis and never larger than the frame.
pub fn sharpness_crop(width: usize, height: usize) -> CropWindow {
    let crop_width = (width / 8).clamp(32, 128).min(width);
    let crop_height = (height / 8).clamp(32, 128).min(height);
    CropWindow::new(
        (width - crop_width) / 2,
        (height - crop_height) / 2,
        crop_width,
        crop_height,
    )
}

/// Mean absolute Laplacian over the green sites of `patch`, skipping the
/// one-pixel border. Colours are taken at sensor coordinates, not patch ones.
pub fn laplacian_sharpness(patch: &[u8], crop: CropWindow) -> f64 {
    let (w, h) = (crop.width, crop.height);
    if w < 3 || h < 3 {
        return 0.0;
    }

    let at = |x: usize, y: usize| i32::from(patch[y * w + x]);
    let mut total = 0.0;
    let mut count = 0usize;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if color_at((crop.x + x) as isize, (crop.y + y) as isize) != BayerColor::Green {
                continue;
            }
            let laplacian =
                4 * at(x, y) - at(x, y - 1) - at(x, y + 1) - at(x - 1, y) - at(x + 1, y);
            total += f64::from(laplacian.abs());
            count += 1;
        }
    }

    if count > 0 { total / count as f64 } else { 0.0 }
}

/// Production oracle: every score is a fresh exposure of the centre crop.
pub struct SensorSharpness<S: CameraSensor> {
    sensor: S,
    crop: CropWindow,
    patch: Vec<u8>,
}

impl<S: CameraSensor> SensorSharpness<S> {
    pub fn new(sensor: S) -> Self {
        let crop = sharpness_crop(sensor.image_width(), sensor.image_height());
        Self {
            sensor,
            crop,
            patch: vec![0; crop.len()],
        }
    }

    pub fn crop(&self) -> CropWindow {
        self.crop
    }
}

impl<S: CameraSensor> FocusOracle for SensorSharpness<S> {
    fn score(&mut self, focus: i32) -> Result<f64> {
        self.sensor.set_focus(focus);
        self.sensor.read_sensor_data(&mut self.patch, self.crop)?;
        Ok(laplacian_sharpness(&self.patch, self.crop))
    }

    fn settle(&mut self, focus: i32) -> Result<()> {
        self.sensor.set_focus(focus);
        Ok(())
    }
}
