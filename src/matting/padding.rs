use crate::error::PaddingError;
use image::{imageops, ImageBuffer, Pixel};

/// Offset that centres an image of `size` on a canvas of `canvas_size`,
/// rounding towards the top-left corner.
///
/// # Errors
///
/// * `PaddingError::PaddingWidthTooSmall` - canvas narrower than the image
/// * `PaddingError::PaddingHeightTooSmall` - canvas shorter than the image
pub fn centered_offset(
    size: (u32, u32),
    canvas_size: (u32, u32),
) -> Result<(u32, u32), PaddingError> {
    let (width, height) = size;
    let (pad_width, pad_height) = canvas_size;

    let x = pad_width
        .checked_sub(width)
        .ok_or(PaddingError::PaddingWidthTooSmall { width, pad_width })?;
    let y = pad_height
        .checked_sub(height)
        .ok_or(PaddingError::PaddingHeightTooSmall { height, pad_height })?;

    Ok((x / 2, y / 2))
}

/// Centres an image on a larger canvas filled with a single colour.
pub trait Padding<P: Pixel> {
    /// Returns the padded canvas and the offset of the original image on it.
    ///
    /// Source pixels are copied verbatim, so partially transparent pixels
    /// are not blended with `color`.
    ///
    /// # Errors
    ///
    /// Fails when `canvas_size` is smaller than the image in either dimension.
    fn pad_centered(
        self,
        canvas_size: (u32, u32),
        color: P,
    ) -> Result<(ImageBuffer<P, Vec<P::Subpixel>>, (u32, u32)), PaddingError>;
}

impl<P: Pixel> Padding<P> for ImageBuffer<P, Vec<P::Subpixel>> {
    fn pad_centered(
        self,
        canvas_size: (u32, u32),
        color: P,
    ) -> Result<(Self, (u32, u32)), PaddingError> {
        let (x, y) = centered_offset(self.dimensions(), canvas_size)?;
        if canvas_size == self.dimensions() {
            return Ok((self, (x, y)));
        }
        let (pad_width, pad_height) = canvas_size;
        let mut canvas = Self::from_pixel(pad_width, pad_height, color);
        imageops::replace(&mut canvas, &self, i64::from(x), i64::from(y));
        Ok((canvas, (x, y)))
    }
}
