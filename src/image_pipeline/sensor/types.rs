//! Simulated sensor configuration types

/// Configuration of the simulated sensor
#[derive(Debug, Clone, PartialEq)]
pub struct SensorConfig {
    /// Measurement noise, 0 (none) to 4
    pub noise_level: u8,
    /// Low-quality sensor: strong row banding and many stuck sites
    pub bad_sensor: bool,
    /// Sharpest lens position; drawn from the seed when unset
    pub optimal_focus: Option<i32>,
    /// Blur radius in pixels gained per unit of focus error
    pub blur_per_focus_unit: f32,
    /// Largest defocus blur radius in pixels
    pub max_blur_radius: f32,
    /// Relative light loss at the farthest corner, matching the calibration lens model
    pub lens_falloff: f32,
    /// Seed of every random draw the sensor makes
    pub seed: u64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            noise_level: 1,
            bad_sensor: false,
            optimal_focus: None,
            blur_per_focus_unit: 1.0 / 20_000.0,
            max_blur_radius: 8.0,
            lens_falloff: 0.35,
            seed: 0x5EED_CA3E,
        }
    }
}

impl SensorConfig {
    pub fn builder() -> SensorConfigBuilder {
        SensorConfigBuilder::default()
    }

    /// Peak amplitude of the per-exposure noise
    pub fn noise_amplitude(&self) -> f32 {
        f32::from(self.noise_level) * 3.0
    }

    /// Peak amplitude of the fixed per-row bias
    pub fn row_bias_amplitude(&self) -> f32 {
        let base = f32::from(self.noise_level) * 2.0;
        if self.bad_sensor { base + 12.0 } else { base }
    }

    /// Probability that a site is stuck at black or white
    pub fn stuck_pixel_rate(&self) -> f64 {
        if self.bad_sensor {
            0.005
        } else {
            0.0002 * f64::from(self.noise_level)
        }
    }
}

/// Builder for SensorConfig
#[derive(Default)]
pub struct SensorConfigBuilder {
    noise_level: Option<u8>,
    bad_sensor: Option<bool>,
    optimal_focus: Option<Option<i32>>,
    blur_per_focus_unit: Option<f32>,
    max_blur_radius: Option<f32>,
    lens_falloff: Option<f32>,
    seed: Option<u64>,
}

impl SensorConfigBuilder {
    /// Values above 4 are clamped
    pub fn noise_level(mut self, level: u8) -> Self {
        self.noise_level = Some(level.min(4));
        self
    }

    pub fn bad_sensor(mut self, bad: bool) -> Self {
        self.bad_sensor = Some(bad);
        self
    }

    pub fn optimal_focus(mut self, focus: Option<i32>) -> Self {
        self.optimal_focus = Some(focus);
        self
    }

    pub fn blur_per_focus_unit(mut self, blur: f32) -> Self {
        self.blur_per_focus_unit = Some(blur);
        self
    }

    pub fn max_blur_radius(mut self, radius: f32) -> Self {
        self.max_blur_radius = Some(radius);
        self
    }

    pub fn lens_falloff(mut self, falloff: f32) -> Self {
        self.lens_falloff = Some(falloff);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> SensorConfig {
        let default = SensorConfig::default();
        SensorConfig {
            noise_level: self.noise_level.unwrap_or(default.noise_level),
            bad_sensor: self.bad_sensor.unwrap_or(default.bad_sensor),
            optimal_focus: self.optimal_focus.unwrap_or(default.optimal_focus),
            blur_per_focus_unit: self.blur_per_focus_unit.unwrap_or(default.blur_per_focus_unit),
            max_blur_radius: self.max_blur_radius.unwrap_or(default.max_blur_radius),
            lens_falloff: self.lens_falloff.unwrap_or(default.lens_falloff),
            seed: self.seed.unwrap_or(default.seed),
        }
    }
}
