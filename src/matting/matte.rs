use image::Rgba;
use tracing::debug;

use crate::error::MatteError;
use crate::matting::background::{BackgroundReachability, BackgroundSet, Thresholds};
use crate::matting::cut::CutBackground;
use crate::matting::feather::{FeatherEdges, FeatherOptions};
use crate::utils::validate_buffer_len;
use crate::Image;

/// Parameters of the whole matting step: traversal gates and feathering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatteOptions {
    pub thresholds: Thresholds,
    pub feather: FeatherOptions,
}

impl MatteOptions {
    pub const fn new(thresholds: Thresholds, feather: FeatherOptions) -> Self {
        Self {
            thresholds,
            feather,
        }
    }

    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub const fn with_feather_radius(mut self, radius: u32) -> Self {
        self.feather.radius = radius;
        self
    }
}

/// Border-seeded background removal with feathered edges.
///
/// Runs the background traversal, clears every background pixel to
/// transparent black, then feathers the alpha of the foreground along the
/// cut. A fully transparent result is a valid outcome for images without a
/// distinct subject.
pub trait Matte {
    /// Mattes the image in place and returns the detected background.
    fn matte_in_place(&mut self, options: &MatteOptions) -> BackgroundSet;

    /// Consumes the image and returns the matted result.
    fn matte(mut self, options: &MatteOptions) -> Self
    where
        Self: Sized,
    {
        self.matte_in_place(options);
        self
    }
}

impl Matte for Image<Rgba<u8>> {
    fn matte_in_place(&mut self, options: &MatteOptions) -> BackgroundSet {
        let background = self.background_set(&options.thresholds);
        self.cut_background(&background)
            .feather_edges(&background, &options.feather);

        debug!(
            width = self.width(),
            height = self.height(),
            coverage = background.coverage(),
            "matte finished"
        );

        background
    }
}

/// Mattes a raw row-major RGBA buffer of `width × height` pixels.
///
/// # Errors
///
/// * `MatteError::BufferSizeMismatch` - `buffer.len() != width * height * 4`
///
/// # Examples
///
/// ```
/// use sprite_matte::{matte_rgba, MatteOptions};
///
/// let gray = [128u8, 128, 128, 255].repeat(100);
/// let matted = matte_rgba(gray, 10, 10, &MatteOptions::default()).unwrap();
/// assert!(matted.iter().all(|&channel| channel == 0));
/// ```
pub fn matte_rgba(
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    options: &MatteOptions,
) -> Result<Vec<u8>, MatteError> {
    let actual = buffer.len();
    let expected = validate_buffer_len(actual, width, height, 4)?;
    let image: Image<Rgba<u8>> = Image::from_raw(width, height, buffer)
        .ok_or(MatteError::BufferSizeMismatch { expected, actual })?;
    Ok(image.matte(options).into_raw())
}
