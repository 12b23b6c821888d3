use image::Rgba;

use crate::matting::background::BackgroundSet;
use crate::matting::pixel_buffer::PixelBuffer;
use crate::Image;

/// Clears every background pixel to fully transparent black.
pub trait CutBackground {
    /// Sets the RGBA channels of each member of `background` to zero.
    /// Only members are visited, so the cost follows the size of the set.
    ///
    /// `background` must have been computed for an image of the same size.
    fn cut_background(&mut self, background: &BackgroundSet) -> &mut Self;
}

impl CutBackground for Image<Rgba<u8>> {
    fn cut_background(&mut self, background: &BackgroundSet) -> &mut Self {
        for index in background.iter() {
            self.set_color_and_alpha(index, 0, 0, 0, 0);
        }
        self
    }
}
