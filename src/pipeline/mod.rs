//! Per-image orchestration around the matting core.
//!
//! Decoding and encoding go through the `image` codec, the matted buffer is
//! fitted onto a transparent square with [`ContainResize`], and a batch keeps
//! going when individual files fail.

mod originals;
mod sprites;

pub use originals::{OriginalsStore, Preparation, ORIGINALS_DIR};
pub use sprites::{select_sprites, sprite_id};

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba};
use tracing::{info, instrument, warn};

use crate::error::MatteError;
use crate::matting::matte::{Matte, MatteOptions};
use crate::matting::resize::{ContainResize, DEFAULT_TARGET_SIZE};
use crate::utils::validate_non_empty_image;
use crate::Image;

/// Options for one pass of the pipeline over an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    pub matte: MatteOptions,
    /// Edge length of the square output; `None` keeps the source size.
    pub target_size: Option<u32>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            matte: MatteOptions::default(),
            target_size: Some(DEFAULT_TARGET_SIZE),
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub const fn with_matte(mut self, matte: MatteOptions) -> Self {
        self.matte = matte;
        self
    }

    #[must_use]
    pub const fn with_target_size(mut self, target_size: Option<u32>) -> Self {
        self.target_size = target_size;
        self
    }
}

/// Summary of a successfully processed image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub source_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    /// Fraction of source pixels classified as background.
    pub background_fraction: f32,
}

impl ProcessedImage {
    pub fn background_percentage(&self) -> f32 {
        self.background_fraction * 100.0
    }
}

/// Mattes a decoded image and applies the contain resize when configured.
///
/// # Errors
///
/// * `MatteError::EmptyImage` - the image has a zero dimension
/// * `MatteError::Resize` - the contain resize failed
pub fn process_image(
    mut image: Image<Rgba<u8>>,
    options: &PipelineOptions,
) -> Result<(Image<Rgba<u8>>, ProcessedImage), MatteError> {
    let source_dimensions = image.dimensions();
    validate_non_empty_image(source_dimensions.0, source_dimensions.1)?;

    let background = image.matte_in_place(&options.matte);

    let output = match options.target_size {
        Some(size) => image.resize_contain(size)?,
        None => image,
    };

    let summary = ProcessedImage {
        source_dimensions,
        output_dimensions: output.dimensions(),
        background_fraction: background.coverage(),
    };
    Ok((output, summary))
}

/// Decodes `path`, runs [`process_image`] and overwrites `path` with the
/// result encoded as PNG.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn process_file(path: &Path, options: &PipelineOptions) -> Result<ProcessedImage, MatteError> {
    let image = image::open(path)
        .map_err(|source| MatteError::codec(path, source))?
        .into_rgba8();

    let (output, summary) = process_image(image, options)?;

    output
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| MatteError::codec(path, source))?;

    Ok(summary)
}

/// Outcome of one file in a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ProcessedImage, MatteError>,
}

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.len() - self.successes()
    }

    pub fn failed_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.path.as_path())
    }
}

/// Processes every file independently. A failing file is logged and
/// recorded; it never aborts the batch.
///
/// With the `rayon` feature the files are processed in parallel. Each image
/// is owned by exactly one worker, so the outcome is the same either way.
pub fn process_batch(paths: &[PathBuf], options: &PipelineOptions) -> BatchReport {
    #[cfg(feature = "rayon")]
    let outcomes = {
        use rayon::prelude::*;
        paths
            .par_iter()
            .map(|path| process_and_log(path, options))
            .collect()
    };

    #[cfg(not(feature = "rayon"))]
    let outcomes = paths
        .iter()
        .map(|path| process_and_log(path, options))
        .collect();

    BatchReport { outcomes }
}

fn process_and_log(path: &Path, options: &PipelineOptions) -> FileOutcome {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let result = process_file(path, options);
    match &result {
        Ok(summary) => info!(
            file = %name,
            background = %format!("{:.1}%", summary.background_percentage()),
            width = summary.output_dimensions.0,
            height = summary.output_dimensions.1,
            "processed"
        ),
        Err(error) => warn!(file = %name, %error, "failed"),
    }
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{centered_square_image, uniform_image};

    #[test]
    fn default_pipeline_targets_96_pixels() {
        let options = PipelineOptions::default();
        assert_eq!(options.target_size, Some(96));
        assert_eq!(options.matte, MatteOptions::default());
    }

    #[test]
    fn process_image_resizes_to_square() {
        let image = centered_square_image(20, 10, 2);
        let (output, summary) = process_image(image, &PipelineOptions::default()).unwrap();
        assert_eq!(output.dimensions(), (96, 96));
        assert_eq!(summary.source_dimensions, (20, 10));
        assert_eq!(summary.output_dimensions, (96, 96));
        assert!(summary.background_fraction < 1.0);
    }

    #[test]
    fn process_image_can_skip_resize() {
        let image = uniform_image(10, 10, Rgba([128, 128, 128, 255]));
        let options = PipelineOptions::default().with_target_size(None);
        let (output, summary) = process_image(image, &options).unwrap();
        assert_eq!(output.dimensions(), (10, 10));
        assert!((summary.background_percentage() - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn process_image_rejects_empty_images() {
        let image: Image<Rgba<u8>> = Image::new(0, 3);
        let result = process_image(image, &PipelineOptions::default());
        assert!(matches!(
            result,
            Err(MatteError::EmptyImage {
                width: 0,
                height: 3
            })
        ));
    }

    #[test]
    fn batch_records_failures_and_continues() {
        let paths = vec![PathBuf::from("/nonexistent/one.png")];
        let report = process_batch(&paths, &PipelineOptions::default());
        assert_eq!(report.successes(), 0);
        assert_eq!(report.failures(), 1);
        assert_eq!(
            report.failed_paths().collect::<Vec<_>>(),
            vec![Path::new("/nonexistent/one.png")]
        );
    }
}
