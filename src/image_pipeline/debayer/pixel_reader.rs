use crate::image_pipeline::bayer::color_at;
use crate::image_pipeline::calibration::DefectMap;

/// Read-only view of a raw mosaic that never hands out a defective sample.
///
/// All reconstruction reads go through [`MosaicView::read_pixel`].
#[derive(Debug, Clone, Copy)]
pub struct MosaicView<'a> {
    buffer: &'a [u8],
    width: usize,
    height: usize,
    defects: &'a DefectMap,
}

/// Half-size of the square window searched for replacement samples.
const REPAIR_RADIUS: isize = 2;

impl<'a> MosaicView<'a> {
    /// `buffer` and `defects` must both cover `width * height` sites.
    pub fn new(buffer: &'a [u8], width: usize, height: usize, defects: &'a DefectMap) -> Self {
        debug_assert_eq!(buffer.len(), width * height);
        debug_assert_eq!(defects.len(), width * height);
        Self {
            buffer,
            width,
            height,
            defects,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `Some((x, y))` when the signed coordinate lies inside the frame.
    #[inline]
    fn in_bounds(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some((x as usize, y as usize))
        }
    }

    /// Sample at `(x, y)`, 0 outside the frame.
    ///
    /// A defective site is replaced by the truncated mean of the healthy
    /// same-colour sites in its 5x5 neighbourhood; with none available the
    /// raw sample is returned as is.
    pub fn read_pixel(&self, x: isize, y: isize) -> u8 {
        let Some((ux, uy)) = self.in_bounds(x, y) else {
            return 0;
        };

        let raw = self.buffer[uy * self.width + ux];
        if !self.defects.is_defective(ux, uy) {
            return raw;
        }

        let color = color_at(x, y);
        let mut sum = 0u32;
        let mut count = 0u32;

        for dy in -REPAIR_RADIUS..=REPAIR_RADIUS {
            for dx in -REPAIR_RADIUS..=REPAIR_RADIUS {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                let Some((unx, uny)) = self.in_bounds(nx, ny) else {
                    continue;
                };
                if color_at(nx, ny) == color && !self.defects.is_defective(unx, uny) {
                    sum += u32::from(self.buffer[uny * self.width + unx]);
                    count += 1;
                }
            }
        }

        if count > 0 { (sum / count) as u8 } else { raw }
    }
}
