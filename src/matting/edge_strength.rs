use image::Rgba;

use crate::Image;

/// Rec. 601 luma of an RGB triple, kept in floating point.
#[inline]
pub fn luma(pixel: Rgba<u8>) -> f32 {
    let Rgba([red, green, blue, _]) = pixel;
    f32::from(red).mul_add(
        0.299,
        f32::from(green).mul_add(0.587, f32::from(blue) * 0.114),
    )
}

/// Local contrast estimation based on the Sobel operator.
///
/// The estimate is the gradient magnitude `sqrt(gx² + gy²)` of the luma
/// channel over the 3×3 neighbourhood of a pixel, using the kernels
///
/// ```text
/// gx: -1 0 1    gy: -1 -2 -1
///     -2 0 2         0  0  0
///     -1 0 1         1  2  1
/// ```
///
/// Pixels on the outermost rows and columns have no complete neighbourhood
/// and report a strength of `0.0`.
pub trait EdgeStrength {
    /// Returns the edge strength at `(x, y)`. Always non-negative.
    fn edge_strength(&self, x: u32, y: u32) -> f32;
}

impl EdgeStrength for Image<Rgba<u8>> {
    fn edge_strength(&self, x: u32, y: u32) -> f32 {
        let (width, height) = self.dimensions();
        if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
            return 0.0;
        }

        let gray = |dx: i32, dy: i32| -> f32 {
            let px = x.saturating_add_signed(dx);
            let py = y.saturating_add_signed(dy);
            luma(*self.get_pixel(px, py))
        };

        let top_left = gray(-1, -1);
        let top = gray(0, -1);
        let top_right = gray(1, -1);
        let left = gray(-1, 0);
        let right = gray(1, 0);
        let bottom_left = gray(-1, 1);
        let bottom = gray(0, 1);
        let bottom_right = gray(1, 1);

        let gx = (top_right + 2.0 * right + bottom_right) - (top_left + 2.0 * left + bottom_left);
        let gy = (bottom_left + 2.0 * bottom + bottom_right) - (top_left + 2.0 * top + top_right);

        gx.hypot(gy)
    }
}
