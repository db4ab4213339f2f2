//! Debayering module for converting the Bayer mosaic to RGB
//!
//! Reconstruction reads the mosaic through a defect-aware view so that sites
//! flagged at calibration never leak into the output.

pub mod cpu_debayer;
mod interpolate;
mod pixel_reader;
pub mod types;


pub use cpu_debayer::CpuDebayer;
pub use pixel_reader::MosaicView;
pub use types::RgbImage;
