//! Scene loading module
//!
//! This module turns image files into the ground-truth radiance the simulated
//! sensor exposes.

mod loader;
mod raw_loader;
mod tiff_loader;
pub mod types;

pub use loader::SceneLoader;
pub use raw_loader::RawSceneLoader;
pub use tiff_loader::TiffSceneLoader;
pub use types::Scene;

use std::path::Path;

use tracing::info;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Loads a scene, choosing the decoder from the file extension.
///
/// `.tif`/`.tiff` go through the TIFF decoder, anything else is treated as a
/// camera RAW file.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| PipelineError::InputReadError(format!("{}: {}", path.display(), e)))?;

    let is_tiff = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"))
        .unwrap_or(false);

    let scene = if is_tiff {
        TiffSceneLoader.load_scene(&data)?
    } else {
        RawSceneLoader.load_scene(&data)?
    };

    info!(
        path = %path.display(),
        width = scene.width,
        height = scene.height,
        "Scene loaded"
    );
    Ok(scene)
}
