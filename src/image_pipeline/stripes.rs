//! Fixed-pattern row noise removal
//!
//! Each row is shifted so its mean matches the mean of all row means. Runs in
//! place on the raw mosaic, before any reconstruction.

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Removes per-row additive bias from `buffer` in place.
pub fn correct_stripes(buffer: &mut [u8], width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidDimensions(width, height));
    }
    if buffer.len() != width * height {
        return Err(PipelineError::BufferSizeMismatch {
            expected: width * height,
            actual: buffer.len(),
        });
    }

    let row_means: Vec<f32> = buffer
        .chunks_exact(width)
        .map(|row| row.iter().map(|&v| f32::from(v)).sum::<f32>() / width as f32)
        .collect();
    let global_mean = row_means.iter().sum::<f32>() / height as f32;

    for (row, &row_mean) in buffer.chunks_exact_mut(width).zip(&row_means) {
        let offset = row_mean - global_mean;
        for sample in row.iter_mut() {
            *sample = ((f32::from(*sample) - offset) as i32).clamp(0, 255) as u8;
        }
    }

    debug!(global_mean, "Row stripes corrected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(buffer: &[u8]) -> f64 {
        buffer.iter().map(|&v| f64::from(v)).sum::<f64>() / buffer.len() as f64
    }

    #[test]
    fn test_offset_row_is_restored() {
        let (w, h) = (8, 8);
        let mut buffer = vec![100u8; w * h];
        for v in &mut buffer[3 * w..4 * w] {
            *v = 120;
        }

        correct_stripes(&mut buffer, w, h).unwrap();

        let row_means: Vec<f64> = buffer.chunks(w).map(mean).collect();
        for &m in &row_means {
            assert!((m - row_means[0]).abs() <= 1.0);
        }
        assert!((row_means[3] - row_means[0]).abs() <= 1.0);
    }

    #[test]
    fn test_brightness_is_preserved() {
        let (w, h) = (16, 12);
        let mut buffer: Vec<u8> = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                (60 + (x * 7 + y * 3) % 90 + (y % 3) * 9) as u8
            })
            .collect();
        let before = mean(&buffer);

        correct_stripes(&mut buffer, w, h).unwrap();

        assert!((mean(&buffer) - before).abs() <= 1.0);
    }

    #[test]
    fn test_flat_frame_is_untouched() {
        let mut buffer = vec![42u8; 20];
        correct_stripes(&mut buffer, 5, 4).unwrap();
        assert!(buffer.iter().all(|&v| v == 42));
    }

    #[test]
    fn test_results_are_clamped() {
        // Row 0 is far above the global mean, row 1 far below
        let mut buffer = vec![250, 10, 0, 0];
        correct_stripes(&mut buffer, 2, 2).unwrap();
        assert_eq!(buffer, vec![185, 0, 65, 65]);
    }

    #[test]
    fn test_rejects_bad_buffer() {
        let mut buffer = vec![0u8; 5];
        assert!(matches!(
            correct_stripes(&mut buffer, 2, 2),
            Err(PipelineError::BufferSizeMismatch { expected: 4, actual: 5 })
        ));
        assert!(matches!(
            correct_stripes(&mut buffer, 0, 2),
            Err(PipelineError::InvalidDimensions(0, 2))
        ));
    }
}
