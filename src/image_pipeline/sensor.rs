//! Camera sensor module
//!
//! The pipeline only talks to the [`CameraSensor`] trait. The simulated
//! implementation stands in for hardware when processing scene files.

mod camera_sensor;
mod simulated;
pub mod types;

#[cfg(test)]
mod tests;

pub use camera_sensor::{CameraSensor, CropWindow};
pub use simulated::SimulatedSensor;
pub use types::{SensorConfig, SensorConfigBuilder};
