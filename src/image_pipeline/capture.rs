//! Capture orchestration module
//!
//! Sequences calibration, autofocus, exposure, stripe correction and
//! demosaicing into a single still capture.

mod pipeline;
mod timing;
pub mod types;


pub use pipeline::CameraPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{PipelineConfig, PipelineConfigBuilder};
