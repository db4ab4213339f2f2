//! Scene loader for TIFF images.
//!
//! Accepts 8 or 16 bit grayscale, RGB and RGBA TIFFs and rescales samples to
//! the 0..=255 radiance range the simulated sensor works in. Alpha is dropped.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::scene::loader::SceneLoader;
use crate::image_pipeline::scene::types::Scene;

pub struct TiffSceneLoader;

impl SceneLoader for TiffSceneLoader {
    fn load_scene(&self, data: &[u8]) -> Result<Scene> {
        debug!("Decoding TIFF scene, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let colortype = decoder
            .colortype()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        let samples_per_pixel = match colortype {
            ColorType::Gray(8 | 16) => 1,
            ColorType::RGB(8 | 16) => 3,
            ColorType::RGBA(8 | 16) => 4,
            other => {
                return Err(PipelineError::UnsupportedFormat(format!(
                    "TIFF color type {:?}",
                    other
                )));
            }
        };

        // Normalise both bit depths into 0..=255 floats
        let samples: Vec<f32> = match decoder
            .read_image()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values.into_iter().map(f32::from).collect(),
            DecodingResult::U16(values) => values
                .into_iter()
                .map(|v| f32::from(v) * 255.0 / f32::from(u16::MAX))
                .collect(),
            _ => {
                return Err(PipelineError::UnsupportedFormat(
                    "TIFF sample format".to_string(),
                ));
            }
        };

        let (width, height) = (width as usize, height as usize);
        if samples.len() < width * height * samples_per_pixel {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width * height * samples_per_pixel,
                actual: samples.len(),
            });
        }

        let data: Vec<f32> = samples
            .chunks_exact(samples_per_pixel)
            .take(width * height)
            .flat_map(|px| match samples_per_pixel {
                1 => [px[0], px[0], px[0]],
                _ => [px[0], px[1], px[2]],
            })
            .collect();

        debug!("Decoded TIFF scene: {}x{} ({:?})", width, height, colortype);
        Scene::new(width, height, data)
    }
}
