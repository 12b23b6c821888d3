use image::Rgba;
use itertools::iproduct;
use tracing::debug;

use crate::matting::background::BackgroundSet;
use crate::matting::pixel_buffer::{PixelBuffer, PixelIndex};
use crate::Image;

/// Default feathering radius in pixels.
pub const DEFAULT_FEATHER_RADIUS: u32 = 2;

/// Reduction level applied at distance 1 before damping.
pub const DEFAULT_MAX_REDUCTION: f32 = 128.0;

/// Empirical damping factor applied to the reduction level.
pub const DEFAULT_DAMPING: f32 = 0.3;

/// Parameters of the edge feathering pass.
///
/// For a foreground pixel at Manhattan distance `r` from a boundary
/// background pixel, alpha is capped at
/// `255 - floor(floor((radius - r + 1) / (radius + 1) * max_reduction) * damping)`.
/// With the defaults this gives caps of 230 at `r = 1` and 243 at `r = 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatherOptions {
    pub radius: u32,
    pub max_reduction: f32,
    pub damping: f32,
}

impl Default for FeatherOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_FEATHER_RADIUS,
            max_reduction: DEFAULT_MAX_REDUCTION,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl FeatherOptions {
    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Alpha cap for foreground pixels at Manhattan distance `distance`.
    pub fn alpha_cap(&self, distance: u32) -> u8 {
        if distance == 0 || distance > self.radius {
            return u8::MAX;
        }
        let weight = ((self.radius - distance) as f32 + 1.0) / (self.radius as f32 + 1.0);
        let level = (weight * self.max_reduction).floor();
        let reduction = (level * self.damping).floor().clamp(0.0, 255.0);
        (255.0 - reduction) as u8
    }
}

/// Softens the hard edge left by [`CutBackground`](crate::CutBackground).
pub trait FeatherEdges {
    /// Lowers the alpha of foreground pixels near the background boundary.
    ///
    /// Alpha only ever decreases, so the pass is not idempotent: run it once
    /// per cut. Pixels in `background` are never touched.
    fn feather_edges(&mut self, background: &BackgroundSet, options: &FeatherOptions)
        -> &mut Self;
}

impl FeatherEdges for Image<Rgba<u8>> {
    fn feather_edges(
        &mut self,
        background: &BackgroundSet,
        options: &FeatherOptions,
    ) -> &mut Self {
        if options.radius == 0 {
            return self;
        }

        let boundaries = boundary_pixels(self, background);
        let (width, height) = self.dimensions();
        let mut softened = 0usize;

        // No two pixels are further apart than this, so larger rings are empty.
        let reach = options.radius.min(width.saturating_add(height));

        for distance in 1..=reach {
            let cap = options.alpha_cap(distance);
            let ring = manhattan_ring(distance);

            for &boundary in &boundaries {
                let (bx, by) = self.coordinates_of(boundary);
                for &(dx, dy) in &ring {
                    let (Some(nx), Some(ny)) =
                        (bx.checked_add_signed(dx), by.checked_add_signed(dy))
                    else {
                        continue;
                    };
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let index = self.index_of(nx, ny);
                    if background.contains(index) {
                        continue;
                    }
                    let Rgba([_, _, _, alpha]) = self.pixel(index);
                    if cap < alpha {
                        self.set_alpha(index, cap);
                        softened += 1;
                    }
                }
            }
        }

        debug!(
            boundaries = boundaries.len(),
            softened,
            radius = options.radius,
            "edge feathering finished"
        );

        self
    }
}

/// Background pixels with at least one in-bounds four-connected neighbour
/// outside the background.
pub fn boundary_pixels(image: &Image<Rgba<u8>>, background: &BackgroundSet) -> Vec<PixelIndex> {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);

    background
        .iter()
        .filter(|&index| {
            let x = index % width;
            let y = index / width;
            [
                (x > 0).then(|| index - 1),
                (x + 1 < width).then(|| index + 1),
                (y > 0).then(|| index - width),
                (y + 1 < height).then(|| index + width),
            ]
            .into_iter()
            .flatten()
            .any(|neighbor| !background.contains(neighbor))
        })
        .collect()
}

/// Offsets at Manhattan distance exactly `distance` from the origin.
fn manhattan_ring(distance: u32) -> Vec<(i32, i32)> {
    let r = i32::try_from(distance).unwrap_or(i32::MAX);
    iproduct!(-r..=r, -r..=r)
        .filter(|&(dy, dx)| dx.abs() + dy.abs() == r)
        .map(|(dy, dx)| (dx, dy))
        .collect()
}
