//! Test doubles shared by the module tests.

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::sensor::{CameraSensor, CropWindow};

type Pattern = Box<dyn FnMut(i32, usize, usize) -> u8>;

/// Sensor whose exposures come from a closure of `(focus, x, y)`.
///
/// Records every crop it is asked for and every focus it is driven to.
pub struct ScriptedSensor {
    width: usize,
    height: usize,
    focus: i32,
    pattern: Pattern,
    pub reads: Vec<CropWindow>,
    pub focus_history: Vec<i32>,
}

impl ScriptedSensor {
    pub fn from_fn<F>(width: usize, height: usize, pattern: F) -> Self
    where
        F: FnMut(i32, usize, usize) -> u8 + 'static,
    {
        Self {
            width,
            height,
            focus: 0,
            pattern: Box::new(pattern),
            reads: Vec::new(),
            focus_history: Vec::new(),
        }
    }

    /// Returns the same frame on every exposure, whatever the focus.
    pub fn from_frame(width: usize, height: usize, frame: Vec<u8>) -> Self {
        assert_eq!(frame.len(), width * height);
        Self::from_fn(width, height, move |_, x, y| frame[y * width + x])
    }

    pub fn uniform(width: usize, height: usize, value: u8) -> Self {
        Self::from_fn(width, height, move |_, _, _| value)
    }

    pub fn focus(&self) -> i32 {
        self.focus
    }
}

impl CameraSensor for ScriptedSensor {
    fn image_width(&self) -> usize {
        self.width
    }

    fn image_height(&self) -> usize {
        self.height
    }

    fn set_focus(&mut self, value: i32) {
        self.focus = value;
        self.focus_history.push(value);
    }

    fn read_sensor_data(&mut self, out: &mut [u8], crop: CropWindow) -> Result<()> {
        crop.validate(self.width, self.height, out)?;
        self.reads.push(crop);
        for y in 0..crop.height {
            for x in 0..crop.width {
                out[y * crop.width + x] = (self.pattern)(self.focus, crop.x + x, crop.y + y);
            }
        }
        Ok(())
    }
}
