use crate::image_pipeline::common::error::{PipelineError, Result};

/// Region of the sensor read by a single exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CropWindow {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    pub fn full_frame(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks the window fits the frame and `out` can hold exactly one exposure.
    pub fn validate(&self, frame_width: usize, frame_height: usize, out: &[u8]) -> Result<()> {
        if self.x + self.width > frame_width || self.y + self.height > frame_height {
            return Err(PipelineError::CropOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                frame_width,
                frame_height,
            });
        }
        if out.len() != self.len() {
            return Err(PipelineError::BufferSizeMismatch {
                expected: self.len(),
                actual: out.len(),
            });
        }
        Ok(())
    }
}

/// The camera the pipeline drives: a mosaic source plus a focus actuator.
///
/// Every `read_sensor_data` call is a fresh exposure taken at the current
/// focus position. Nothing is cached between calls.
pub trait CameraSensor {
    fn image_width(&self) -> usize;
    fn image_height(&self) -> usize;
    fn set_focus(&mut self, value: i32);
    fn read_sensor_data(&mut self, out: &mut [u8], crop: CropWindow) -> Result<()>;
}

impl<S: CameraSensor + ?Sized> CameraSensor for &mut S {
    fn image_width(&self) -> usize {
        (**self).image_width()
    }

    fn image_height(&self) -> usize {
        (**self).image_height()
    }

    fn set_focus(&mut self, value: i32) {
        (**self).set_focus(value)
    }

    fn read_sensor_data(&mut self, out: &mut [u8], crop: CropWindow) -> Result<()> {
        (**self).read_sensor_data(out, crop)
    }
}
