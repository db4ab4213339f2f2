//! Scene data types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Ground-truth radiance the simulated sensor exposes
#[derive(Debug, Clone)]
pub struct Scene {
    /// Width of the scene in pixels
    pub width: usize,
    /// Height of the scene in pixels
    pub height: usize,
    /// RGB values interleaved [R, G, B, R, G, B, ...], each in 0.0..=255.0
    pub data: Vec<f32>,
}

impl Scene {
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        if data.len() != width * height * 3 {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width * height * 3,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Builds a scene by evaluating `f` at every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> [f32; 3],
    {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn uniform(width: usize, height: usize, rgb: [f32; 3]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| rgb)
    }

    #[inline]
    pub fn channel(&self, x: usize, y: usize, channel: usize) -> f32 {
        self.data[(y * self.width + x) * 3 + channel]
    }
}
