//! Scene loader for camera RAW files using the rawloader library.
//!
//! A RAW file already is a mosaic, so turning it into scene radiance means
//! undoing the sensor that took it: every 2x2 CFA cell is binned into one RGB
//! pixel after black-level subtraction and white-level normalisation. The
//! resulting scene is half the RAW resolution in each axis.

use std::io::Cursor;

use rawloader::RawImageData as RawloaderImageData;
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::scene::loader::SceneLoader;
use crate::image_pipeline::scene::types::Scene;

/// Maps a rawloader CFA color to an RGB channel. Index 3 is the second
/// green of four-color patterns.
fn scene_channel(cfa_color: usize) -> usize {
    match cfa_color {
        0 => 0,
        2 => 2,
        _ => 1,
    }
}

/// Scene loader for any RAW format rawloader can decode (ARW, CR2, NEF, DNG, ...).
pub struct RawSceneLoader;

impl SceneLoader for RawSceneLoader {
    fn load_scene(&self, data: &[u8]) -> Result<Scene> {
        debug!("Decoding RAW scene, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        if decoded.cpp != 1 {
            return Err(PipelineError::UnsupportedFormat(format!(
                "RAW with {} components per pixel",
                decoded.cpp
            )));
        }

        let (raw_width, raw_height) = (decoded.width, decoded.height);
        let (width, height) = (raw_width / 2, raw_height / 2);
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(raw_width, raw_height));
        }

        // Float RAWs are already normalised to 0.0..=1.0
        let normalised: Vec<f32> = match decoded.data {
            RawloaderImageData::Integer(values) => {
                let black = f32::from(decoded.blacklevels[0]);
                let white = f32::from(decoded.whitelevels[0]);
                let range = (white - black).max(1.0);
                values
                    .iter()
                    .map(|&v| ((f32::from(v) - black) / range).clamp(0.0, 1.0))
                    .collect()
            }
            RawloaderImageData::Float(values) => {
                values.iter().map(|&v| v.clamp(0.0, 1.0)).collect()
            }
        };

        let mut scene = Vec::with_capacity(width * height * 3);
        for cy in 0..height {
            for cx in 0..width {
                let mut sums = [0.0f32; 3];
                let mut counts = [0u32; 3];
                for row in 2 * cy..2 * cy + 2 {
                    for col in 2 * cx..2 * cx + 2 {
                        let channel = scene_channel(decoded.cfa.color_at(row, col));
                        sums[channel] += normalised[row * raw_width + col];
                        counts[channel] += 1;
                    }
                }
                for channel in 0..3 {
                    let mean = if counts[channel] > 0 {
                        sums[channel] / counts[channel] as f32
                    } else {
                        0.0
                    };
                    scene.push(mean * 255.0);
                }
            }
        }

        debug!(
            "Binned {}x{} RAW into {}x{} scene",
            raw_width, raw_height, width, height
        );
        Scene::new(width, height, scene)
    }
}
