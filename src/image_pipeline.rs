//! Image processing pipeline module
//!
//! This module turns raw Bayer exposures into corrected RGB images, with
//! separate modules for calibration, autofocus, defect-aware demosaicing,
//! row-noise removal, the sensor abstraction and TIFF output.

pub mod autofocus;
pub mod bayer;
pub mod calibration;
pub mod capture;
pub mod common;
pub mod debayer;
pub mod scene;
pub mod sensor;
pub mod stripes;
pub mod tiff;

#[cfg(test)]
mod testing;

pub use common::{
    PipelineError,
    Result,
};

pub use bayer::{
    BayerColor,
    color_at,
};

pub use calibration::{
    CalibrationConfig,
    CalibrationMaps,
    CalibrationState,
};

pub use autofocus::{
    AutoFocus,
    FocusConfig,
    FocusOracle,
    FocusReport,
};

pub use debayer::{
    CpuDebayer,
    MosaicView,
    RgbImage,
};

pub use sensor::{
    CameraSensor,
    CropWindow,
    SensorConfig,
    SimulatedSensor,
};

pub use scene::{
    Scene,
    SceneLoader,
    load_scene_file,
};

pub use self::tiff::{
    OutputConfig,
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
};

pub use capture::{
    CameraPipeline,
    PipelineConfig,
    PipelineTimings,
};

pub use stripes::correct_stripes;
