//! TIFF writing module
//!
//! This module writes captured RGB images as TIFF files with various compression options.

mod standard_tiff_writer;
pub mod types;
mod writer;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{OutputConfig, OutputConfigBuilder, TiffCompression};
pub use writer::TiffWriter;
