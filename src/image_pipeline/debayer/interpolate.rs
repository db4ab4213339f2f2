use crate::image_pipeline::bayer::{BayerColor, NeighborSet, color_at};
use crate::image_pipeline::debayer::pixel_reader::MosaicView;

impl MosaicView<'_> {
    /// Value of channel `target` at `(x, y)`.
    ///
    /// Native channels come straight from the defect-aware reader. Missing
    /// channels are the truncated mean of the neighbour ring chosen by
    /// [`NeighborSet::for_reconstruction`]; 0 when no neighbour qualifies.
    pub fn interpolate(&self, x: isize, y: isize, target: BayerColor) -> u8 {
        let native = color_at(x, y);
        if native == target {
            return self.read_pixel(x, y);
        }

        let mut sum = 0u32;
        let mut count = 0u32;

        for &(dx, dy) in NeighborSet::for_reconstruction(native, target).offsets() {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx as usize >= self.width() || ny as usize >= self.height() {
                continue;
            }
            // On a green site the cross mixes red and blue, keep only the
            // target colour. Elsewhere the geometry already guarantees it.
            let accepted = native != BayerColor::Green || color_at(nx, ny) == target;
            if accepted {
                sum += u32::from(self.read_pixel(nx, ny));
                count += 1;
            }
        }

        if count > 0 { (sum / count) as u8 } else { 0 }
    }

    /// All three channels at `(x, y)` in RGB order.
    pub fn interpolate_rgb(&self, x: isize, y: isize) -> [u8; 3] {
        BayerColor::ALL.map(|color| self.interpolate(x, y, color))
    }
}
