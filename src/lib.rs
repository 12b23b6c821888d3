//! Gradient-aware background removal for rendered sprites.
//!
//! The background is grown breadth-first from the image border, admitting a
//! pixel only when it is close in colour to the background pixel it was
//! reached from and does not sit on a strong Sobel edge. Background pixels
//! are cleared to transparent, the subject's edge is feathered, and the
//! result can be fitted onto a transparent square with a Lanczos-3 resize.
//!
//! ```
//! use image::Rgba;
//! use sprite_matte::{Image, Matte, MatteOptions};
//!
//! let image: Image<Rgba<u8>> = Image::from_pixel(10, 10, Rgba([128, 128, 128, 255]));
//! let matted = image.matte(&MatteOptions::default());
//! assert!(matted.pixels().all(|p| p[3] == 0));
//! ```

mod error;
mod matting;
pub mod pipeline;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use error::{MatteError, PaddingError, ResizeError};
pub use matting::background::{
    BackgroundReachability, BackgroundSet, Thresholds, DEFAULT_EDGE_THRESHOLD,
    DEFAULT_NEIGHBOR_THRESHOLD,
};
pub use matting::cut::CutBackground;
pub use matting::edge_strength::{luma, EdgeStrength};
pub use matting::feather::{
    boundary_pixels, FeatherEdges, FeatherOptions, DEFAULT_DAMPING, DEFAULT_FEATHER_RADIUS,
    DEFAULT_MAX_REDUCTION,
};
pub use matting::matte::{matte_rgba, Matte, MatteOptions};
pub use matting::padding::{centered_offset, Padding};
pub use matting::pixel_buffer::{color_distance, PixelBuffer, PixelIndex};
pub use matting::resize::{contain_dimensions, ContainResize, DEFAULT_TARGET_SIZE};
pub use pipeline::{
    process_batch, process_file, process_image, BatchReport, FileOutcome, PipelineOptions,
    ProcessedImage,
};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
