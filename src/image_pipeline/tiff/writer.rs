use std::io::Write;
use std::path::Path;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::types::RgbImage;
use crate::image_pipeline::tiff::types::OutputConfig;

pub trait TiffWriter {
    fn write_rgb_tiff(&self, image: &RgbImage, output: &mut dyn Write, config: &OutputConfig) -> Result<()>;

    fn write_file(&self, image: &RgbImage, path: &Path, config: &OutputConfig) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .map_err(|e| PipelineError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        self.write_rgb_tiff(image, &mut file, config)
    }
}
