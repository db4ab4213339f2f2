//! Sensor calibration module
//!
//! One-time pass producing the defect map and the vignette gain map shared by
//! the rest of the pipeline.

mod maps;
mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use maps::{CalibrationMaps, DefectMap, VignetteMap, vignette_gain};
pub use state::CalibrationState;
pub use types::CalibrationConfig;
