use image::imageops::{self, FilterType};
use image::Rgba;
use imageproc::map::map_colors;
use tracing::debug;

use crate::error::ResizeError;
use crate::matting::padding::Padding;
use crate::Image;

/// Default edge length of the square output.
pub const DEFAULT_TARGET_SIZE: u32 = 96;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Resize with "contain" fit onto a transparent square canvas.
pub trait ContainResize {
    /// Scales the image to fit entirely inside a `size × size` square,
    /// preserving aspect ratio, and centres it on a fully transparent canvas.
    ///
    /// Filtering uses Lanczos-3 on premultiplied colour so that the zeroed
    /// background does not bleed dark fringes into the subject's edge.
    ///
    /// # Errors
    ///
    /// * `ResizeError::InvalidTargetSize` - `size` is zero
    /// * `ResizeError::EmptyImage` - the source has a zero dimension
    /// * `ResizeError::Padding` - the scaled image does not fit the canvas
    fn resize_contain(&self, size: u32) -> Result<Image<Rgba<u8>>, ResizeError>;
}

impl ContainResize for Image<Rgba<u8>> {
    fn resize_contain(&self, size: u32) -> Result<Image<Rgba<u8>>, ResizeError> {
        if size == 0 {
            return Err(ResizeError::InvalidTargetSize { size });
        }
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(ResizeError::EmptyImage);
        }

        let (fit_width, fit_height) = contain_dimensions((width, height), size);
        debug!(width, height, fit_width, fit_height, size, "contain resize");

        let scaled = if (fit_width, fit_height) == (width, height) {
            self.clone()
        } else {
            let premultiplied = map_colors(self, premultiply);
            let resized = imageops::resize(&premultiplied, fit_width, fit_height, FilterType::Lanczos3);
            map_colors(&resized, unpremultiply)
        };

        let (canvas, _) = scaled.pad_centered((size, size), TRANSPARENT)?;
        Ok(canvas)
    }
}

/// Largest dimensions with the source aspect ratio that fit in `size × size`.
/// Each side is rounded to the nearest pixel and kept in `1..=size`.
pub fn contain_dimensions(source: (u32, u32), size: u32) -> (u32, u32) {
    let (width, height) = source;
    let scale = (f64::from(size) / f64::from(width)).min(f64::from(size) / f64::from(height));
    let fit = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, size);
    (fit(width), fit(height))
}

fn premultiply(pixel: Rgba<u8>) -> Rgba<f32> {
    let Rgba([red, green, blue, alpha]) = pixel;
    let alpha = f32::from(alpha) / 255.0;
    let channel = |value: u8| f32::from(value) / 255.0 * alpha;
    Rgba([channel(red), channel(green), channel(blue), alpha])
}

fn unpremultiply(pixel: Rgba<f32>) -> Rgba<u8> {
    let Rgba([red, green, blue, alpha]) = pixel;
    let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
    let alpha_u8 = to_u8(alpha);
    if alpha_u8 == 0 {
        return TRANSPARENT;
    }
    let channel = |value: f32| to_u8(value / alpha);
    Rgba([channel(red), channel(green), channel(blue), alpha_u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_dimensions_preserve_aspect_ratio() {
        assert_eq!(contain_dimensions((1024, 1024), 96), (96, 96));
        assert_eq!(contain_dimensions((200, 100), 96), (96, 48));
        assert_eq!(contain_dimensions((100, 300), 96), (32, 96));
        assert_eq!(contain_dimensions((1000, 1), 96), (96, 1));
        assert_eq!(contain_dimensions((10, 10), 96), (96, 96));
    }

    #[test]
    fn zero_size_is_rejected() {
        let image: Image<Rgba<u8>> = Image::new(4, 4);
        assert_eq!(
            image.resize_contain(0),
            Err(ResizeError::InvalidTargetSize { size: 0 })
        );
    }

    #[test]
    fn empty_image_is_rejected() {
        let image: Image<Rgba<u8>> = Image::new(0, 4);
        assert_eq!(image.resize_contain(8), Err(ResizeError::EmptyImage));
    }

    #[test]
    fn wide_image_is_letterboxed_with_transparency() {
        let image: Image<Rgba<u8>> = Image::from_pixel(40, 20, Rgba([200, 100, 50, 255]));
        let result = image.resize_contain(10).unwrap();
        assert_eq!(result.dimensions(), (10, 10));
        // Scaled content is 10x5 centred vertically at rows 2..7.
        for x in 0..10 {
            assert_eq!(result.get_pixel(x, 0)[3], 0);
            assert_eq!(result.get_pixel(x, 1)[3], 0);
            assert_eq!(result.get_pixel(x, 9)[3], 0);
            assert_eq!(result.get_pixel(x, 4), &Rgba([200, 100, 50, 255]));
        }
    }

    #[test]
    fn transparent_input_stays_transparent() {
        let image: Image<Rgba<u8>> = Image::from_pixel(30, 30, TRANSPARENT);
        let result = image.resize_contain(12).unwrap();
        assert!(result.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn premultiply_round_trip_keeps_opaque_colors() {
        let pixel = Rgba([12, 34, 56, 255]);
        assert_eq!(unpremultiply(premultiply(pixel)), pixel);
        assert_eq!(unpremultiply(premultiply(Rgba([90, 90, 90, 0]))), TRANSPARENT);
    }
}
