use image::Rgba;

use crate::Image;

/// Row-major index of a pixel, `y * width + x`.
pub type PixelIndex = usize;

/// Index-based access to an RGBA raster.
///
/// Traversal and feathering state is keyed by [`PixelIndex`] rather than
/// `(x, y)` pairs so that visited marks and set membership are plain slice
/// lookups. Indices out of range panic like slice indexing does; every index
/// produced internally is derived from the image dimensions.
pub trait PixelBuffer {
    /// Total number of pixels (`width * height`).
    fn pixel_count(&self) -> usize;

    /// Converts coordinates into a [`PixelIndex`].
    fn index_of(&self, x: u32, y: u32) -> PixelIndex;

    /// Converts a [`PixelIndex`] back into `(x, y)` coordinates.
    fn coordinates_of(&self, index: PixelIndex) -> (u32, u32);

    /// Returns the pixel stored at `index`.
    fn pixel(&self, index: PixelIndex) -> Rgba<u8>;

    /// Overwrites only the alpha channel of the pixel at `index`.
    fn set_alpha(&mut self, index: PixelIndex, alpha: u8);

    /// Overwrites all four channels of the pixel at `index`.
    fn set_color_and_alpha(&mut self, index: PixelIndex, red: u8, green: u8, blue: u8, alpha: u8);
}

impl PixelBuffer for Image<Rgba<u8>> {
    #[inline]
    fn pixel_count(&self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> PixelIndex {
        y as usize * self.width() as usize + x as usize
    }

    #[inline]
    fn coordinates_of(&self, index: PixelIndex) -> (u32, u32) {
        let width = self.width() as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    #[inline]
    fn pixel(&self, index: PixelIndex) -> Rgba<u8> {
        let offset = index * 4;
        let raw: &[u8] = self.as_raw();
        Rgba([
            raw[offset],
            raw[offset + 1],
            raw[offset + 2],
            raw[offset + 3],
        ])
    }

    #[inline]
    fn set_alpha(&mut self, index: PixelIndex, alpha: u8) {
        let raw: &mut [u8] = self;
        raw[index * 4 + 3] = alpha;
    }

    #[inline]
    fn set_color_and_alpha(&mut self, index: PixelIndex, red: u8, green: u8, blue: u8, alpha: u8) {
        let offset = index * 4;
        let raw: &mut [u8] = self;
        raw[offset..offset + 4].copy_from_slice(&[red, green, blue, alpha]);
    }
}

/// Euclidean distance between the RGB channels of two pixels. Alpha is ignored.
#[inline]
pub fn color_distance(a: Rgba<u8>, b: Rgba<u8>) -> f32 {
    let Rgba([ar, ag, ab, _]) = a;
    let Rgba([br, bg, bb, _]) = b;
    let dr = f32::from(ar) - f32::from(br);
    let dg = f32::from(ag) - f32::from(bg);
    let db = f32::from(ab) - f32::from(bb);
    (dr * dr + dg * dg + db * db).sqrt()
}
