//! Test utilities for sprite-matte
//!
//! Builders for the synthetic sprites used across the unit tests.
//! Only compiled when running tests.

use image::Rgba;

use crate::Image;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Creates a 2x2 RGBA image with known pixel values:
/// - (0,0): [200, 150, 100, 255]
/// - (1,0): [100, 200, 150, 128]
/// - (0,1): [150, 100, 200, 64]
/// - (1,1): [50, 75, 25, 0]
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Single-colour image with no subject.
pub fn uniform_image(width: u32, height: u32, color: Rgba<u8>) -> Image<Rgba<u8>> {
    Image::from_pixel(width, height, color)
}

/// White image with a sharp black `side × side` square in the middle.
///
/// The square's top-left corner is at `((width - side) / 2, (height - side) / 2)`.
pub fn centered_square_image(width: u32, height: u32, side: u32) -> Image<Rgba<u8>> {
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    Image::from_fn(width, height, |x, y| {
        if (left..left + side).contains(&x) && (top..top + side).contains(&y) {
            BLACK
        } else {
            WHITE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_is_placed_in_the_middle() {
        let image = centered_square_image(10, 10, 2);
        let black: Vec<_> = image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(black, vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn uniform_image_has_single_color() {
        let image = uniform_image(3, 4, Rgba([1, 2, 3, 4]));
        assert_eq!(image.dimensions(), (3, 4));
        assert!(image.pixels().all(|p| *p == Rgba([1, 2, 3, 4])));
    }
}
