use std::collections::VecDeque;

use image::Rgba;
use tracing::debug;

use crate::matting::edge_strength::EdgeStrength;
use crate::matting::pixel_buffer::{color_distance, PixelBuffer, PixelIndex};
use crate::Image;

/// Default maximum RGB distance between two adjacent background pixels.
pub const DEFAULT_NEIGHBOR_THRESHOLD: f32 = 25.0;

/// Default maximum edge strength of a background pixel.
pub const DEFAULT_EDGE_THRESHOLD: f32 = 40.0;

/// Gates applied while growing the background region.
///
/// Both comparisons are strict: a neighbour is admitted only when its colour
/// distance to the predecessor is `< neighbor_threshold` and its edge strength
/// is `< edge_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Maximum Euclidean RGB distance between a background pixel and the
    /// neighbour being evaluated.
    pub neighbor_threshold: f32,
    /// Maximum Sobel magnitude for a pixel to still count as background.
    pub edge_threshold: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            neighbor_threshold: DEFAULT_NEIGHBOR_THRESHOLD,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub const fn new(neighbor_threshold: f32, edge_threshold: f32) -> Self {
        Self {
            neighbor_threshold,
            edge_threshold,
        }
    }

    #[must_use]
    pub const fn with_neighbor_threshold(mut self, neighbor_threshold: f32) -> Self {
        self.neighbor_threshold = neighbor_threshold;
        self
    }

    #[must_use]
    pub const fn with_edge_threshold(mut self, edge_threshold: f32) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }
}

/// Pixels classified as background: a membership bitmap over [`PixelIndex`]
/// plus the members in the order they were discovered.
///
/// The set only ever grows. Foreground is its complement and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundSet {
    members: Vec<bool>,
    discovered: Vec<PixelIndex>,
}

impl BackgroundSet {
    /// Creates an empty set for an image of `pixel_count` pixels.
    pub fn for_pixels(pixel_count: usize) -> Self {
        Self {
            members: vec![false; pixel_count],
            discovered: Vec::new(),
        }
    }

    /// Adds `index`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, index: PixelIndex) -> bool {
        let slot = &mut self.members[index];
        if *slot {
            return false;
        }
        *slot = true;
        self.discovered.push(index);
        true
    }

    /// Out-of-range indices are reported as not contained.
    #[inline]
    pub fn contains(&self, index: PixelIndex) -> bool {
        self.members.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Number of pixels of the image the set was built for.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.members.len()
    }

    /// Fraction of the image classified as background, in `[0, 1]`.
    pub fn coverage(&self) -> f32 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.len() as f32 / self.members.len() as f32
    }

    /// Members in discovery order. Runs in `O(len)`, not `O(pixel_count)`.
    pub fn iter(&self) -> impl Iterator<Item = PixelIndex> + '_ {
        self.discovered.iter().copied()
    }
}

/// Gradient-aware background detection seeded from the image border.
pub trait BackgroundReachability {
    /// Grows the background region breadth-first from every border pixel.
    ///
    /// Each candidate is compared against the background pixel it was
    /// reached from, not against a fixed reference colour, so smooth
    /// gradients are followed while sharp object boundaries stop the fill.
    /// Every pixel is evaluated at most once; the result is deterministic.
    fn background_set(&self, thresholds: &Thresholds) -> BackgroundSet;
}

impl BackgroundReachability for Image<Rgba<u8>> {
    fn background_set(&self, thresholds: &Thresholds) -> BackgroundSet {
        let (width, height) = self.dimensions();
        let pixel_count = self.pixel_count();

        let mut background = BackgroundSet::for_pixels(pixel_count);
        if pixel_count == 0 {
            return background;
        }
        let mut visited = vec![false; pixel_count];
        let mut queue: VecDeque<PixelIndex> = VecDeque::new();

        for index in border_indices(width, height) {
            if !visited[index] {
                visited[index] = true;
                background.insert(index);
                queue.push_back(index);
            }
        }
        let seeded = background.len();

        let width = width as usize;
        let height = height as usize;

        while let Some(current) = queue.pop_front() {
            let current_pixel = self.pixel(current);
            let x = current % width;
            let y = current / width;

            let neighbors = [
                (x > 0).then(|| current - 1),
                (x + 1 < width).then(|| current + 1),
                (y > 0).then(|| current - width),
                (y + 1 < height).then(|| current + width),
            ];

            for neighbor in neighbors.into_iter().flatten() {
                if visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;

                if color_distance(current_pixel, self.pixel(neighbor))
                    >= thresholds.neighbor_threshold
                {
                    continue;
                }

                let (nx, ny) = self.coordinates_of(neighbor);
                if self.edge_strength(nx, ny) < thresholds.edge_threshold {
                    background.insert(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(
            width,
            height,
            seeded,
            background = background.len(),
            "background traversal finished"
        );

        background
    }
}

/// Border pixels in seed order: for each column the top then bottom row,
/// then for each interior row the left then right column. Corners and
/// degenerate single-row or single-column images may yield an index twice.
fn border_indices(width: u32, height: u32) -> impl Iterator<Item = PixelIndex> {
    let width = width as usize;
    let height = height as usize;
    let last_row = height.saturating_sub(1) * width;

    let rows = (0..width).flat_map(move |x| [x, last_row + x]);
    let columns = (1..height.saturating_sub(1))
        .flat_map(move |y| [y * width, y * width + width.saturating_sub(1)]);

    rows.chain(columns)
}
