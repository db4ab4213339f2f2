//! Simulated camera sensor.
//!
//! Exposes a [`Scene`] through a GRBG mosaic with a thin-lens defocus model,
//! radial vignetting, fixed row banding, stuck sites and per-exposure noise.
//! Everything random is drawn from a seeded generator, so two sensors built
//! from the same scene and configuration produce identical exposures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::image_pipeline::bayer::color_at;
use crate::image_pipeline::calibration::vignette_gain;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::scene::Scene;
use crate::image_pipeline::sensor::camera_sensor::{CameraSensor, CropWindow};
use crate::image_pipeline::sensor::types::SensorConfig;

/// Summed-area table of one scene channel, for O(1) box means.
#[derive(Debug, Clone)]
struct SummedArea {
    stride: usize,
    sums: Vec<f64>,
}

impl SummedArea {
    fn new(scene: &Scene, channel: usize) -> Self {
        let stride = scene.width + 1;
        let mut sums = vec![0.0; stride * (scene.height + 1)];
        for y in 0..scene.height {
            let mut row_sum = 0.0;
            for x in 0..scene.width {
                row_sum += f64::from(scene.channel(x, y, channel));
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_sum;
            }
        }
        Self { stride, sums }
    }

    /// Mean over the inclusive rectangle `[x0, x1] x [y0, y1]`.
    fn mean(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> f32 {
        let s = self.stride;
        let total = self.sums[(y1 + 1) * s + x1 + 1] - self.sums[y0 * s + x1 + 1]
            - self.sums[(y1 + 1) * s + x0]
            + self.sums[y0 * s + x0];
        let area = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f64;
        (total / area) as f32
    }
}

pub struct SimulatedSensor {
    width: usize,
    height: usize,
    channels: [SummedArea; 3],
    falloff: Vec<f32>,
    row_bias: Vec<f32>,
    stuck: Vec<Option<u8>>,
    optimal_focus: i32,
    focus: i32,
    config: SensorConfig,
    rng: StdRng,
    exposures: usize,
}

impl SimulatedSensor {
    pub fn new(scene: Scene, config: SensorConfig) -> Result<Self> {
        let (width, height) = (scene.width, scene.height);
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let optimal_focus = config
            .optimal_focus
            .unwrap_or_else(|| rng.random_range(20_000..=400_000));

        let row_amplitude = config.row_bias_amplitude();
        let row_bias = (0..height)
            .map(|_| {
                if row_amplitude > 0.0 {
                    rng.random_range(-row_amplitude..=row_amplitude)
                } else {
                    0.0
                }
            })
            .collect();

        let stuck_rate = config.stuck_pixel_rate();
        let stuck: Vec<Option<u8>> = (0..width * height)
            .map(|_| {
                if stuck_rate > 0.0 && rng.random_bool(stuck_rate) {
                    Some(if rng.random_bool(0.5) { 255 } else { 0 })
                } else {
                    None
                }
            })
            .collect();

        let mut falloff = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                falloff.push(1.0 / vignette_gain(x, y, width, height, config.lens_falloff));
            }
        }

        let channels = [0, 1, 2].map(|c| SummedArea::new(&scene, c));

        info!(
            width,
            height,
            optimal_focus,
            stuck = stuck.iter().filter(|s| s.is_some()).count(),
            noise_level = config.noise_level,
            bad_sensor = config.bad_sensor,
            "Simulated sensor ready"
        );

        Ok(Self {
            width,
            height,
            channels,
            falloff,
            row_bias,
            stuck,
            optimal_focus,
            focus: 0,
            config,
            rng,
            exposures: 0,
        })
    }

    pub fn focus(&self) -> i32 {
        self.focus
    }

    pub fn optimal_focus(&self) -> i32 {
        self.optimal_focus
    }

    /// Number of `read_sensor_data` calls served so far.
    pub fn exposure_count(&self) -> usize {
        self.exposures
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Blur radius in pixels at the current focus position.
    pub fn defocus_radius(&self) -> f32 {
        let error = self.focus.abs_diff(self.optimal_focus) as f32;
        (error * self.config.blur_per_focus_unit).min(self.config.max_blur_radius)
    }

    fn box_mean(&self, channel: usize, x: usize, y: usize, radius: usize) -> f32 {
        self.channels[channel].mean(
            x.saturating_sub(radius),
            y.saturating_sub(radius),
            (x + radius).min(self.width - 1),
            (y + radius).min(self.height - 1),
        )
    }

    /// Box blur with a fractional radius, interpolated between the two
    /// neighbouring integer radii so sharpness varies smoothly with focus.
    fn defocused(&self, channel: usize, x: usize, y: usize, radius: f32) -> f32 {
        let whole = radius.floor();
        let fraction = radius - whole;
        let inner = self.box_mean(channel, x, y, whole as usize);
        if fraction <= 0.0 {
            inner
        } else {
            let outer = self.box_mean(channel, x, y, whole as usize + 1);
            inner + (outer - inner) * fraction
        }
    }

    fn expose(&mut self, x: usize, y: usize, radius: f32) -> u8 {
        let idx = y * self.width + x;
        if let Some(value) = self.stuck[idx] {
            return value;
        }

        let channel = color_at(x as isize, y as isize).channel();
        let signal = self.defocused(channel, x, y, radius) * self.falloff[idx];

        let amplitude = self.config.noise_amplitude();
        let noise = if amplitude > 0.0 {
            // Triangular distribution centred on zero
            (self.rng.random::<f32>() + self.rng.random::<f32>() - 1.0) * amplitude
        } else {
            0.0
        };

        (signal + self.row_bias[y] + noise).round().clamp(0.0, 255.0) as u8
    }
}

impl CameraSensor for SimulatedSensor {
    fn image_width(&self) -> usize {
        self.width
    }

    fn image_height(&self) -> usize {
        self.height
    }

    fn set_focus(&mut self, value: i32) {
        self.focus = value;
    }

    fn read_sensor_data(&mut self, out: &mut [u8], crop: CropWindow) -> Result<()> {
        crop.validate(self.width, self.height, out)?;

        let radius = self.defocus_radius();
        for cy in 0..crop.height {
            for cx in 0..crop.width {
                out[cy * crop.width + cx] = self.expose(crop.x + cx, crop.y + cy, radius);
            }
        }
        self.exposures += 1;

        debug!(
            x = crop.x,
            y = crop.y,
            width = crop.width,
            height = crop.height,
            focus = self.focus,
            radius,
            "Exposure"
        );
        Ok(())
    }
}
