//! Sprite background remover
//!
//! Mattes every PNG sprite in a directory in place, keeping pristine copies
//! in `_originals` so reruns always start from the source pixels.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sprite_matte::pipeline::{select_sprites, OriginalsStore, Preparation};
use sprite_matte::{
    process_batch, FeatherOptions, MatteOptions, PipelineOptions, Thresholds,
    DEFAULT_EDGE_THRESHOLD, DEFAULT_FEATHER_RADIUS, DEFAULT_NEIGHBOR_THRESHOLD,
    DEFAULT_TARGET_SIZE,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Largest accepted `--feather-radius`.
const MAX_FEATHER_RADIUS: u32 = 64;

/// Largest accepted `--size`.
const MAX_TARGET_SIZE: u32 = 4096;

/// Gradient-aware sprite background remover
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "sprite-matte")]
struct Cli {
    /// Directory containing the PNG sprites
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Only process sprites with these numeric ids (e.g. "1,5")
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<u32>>,

    /// Maximum RGB distance between neighbouring background pixels
    #[arg(long, default_value_t = DEFAULT_NEIGHBOR_THRESHOLD)]
    threshold: f32,

    /// Maximum Sobel edge strength of a background pixel
    #[arg(long, default_value_t = DEFAULT_EDGE_THRESHOLD)]
    edge_threshold: f32,

    /// Feathering radius in pixels (0 disables feathering)
    #[arg(
        long,
        default_value_t = DEFAULT_FEATHER_RADIUS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_FEATHER_RADIUS))
    )]
    feather_radius: u32,

    /// Edge length of the square output
    #[arg(
        long,
        default_value_t = DEFAULT_TARGET_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TARGET_SIZE))
    )]
    size: u32,

    /// Keep the source resolution instead of resizing
    #[arg(long)]
    skip_resize: bool,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn pipeline_options(&self) -> PipelineOptions {
        let thresholds = Thresholds::new(self.threshold, self.edge_threshold);
        let feather = FeatherOptions::default().with_radius(self.feather_radius);
        PipelineOptions::default()
            .with_matte(MatteOptions::new(thresholds, feather))
            .with_target_size((!self.skip_resize).then_some(self.size))
    }
}

fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::try_new(verbosity_to_filter(verbosity))?,
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let options = cli.pipeline_options();
    info!(
        neighbor_threshold = options.matte.thresholds.neighbor_threshold,
        edge_threshold = options.matte.thresholds.edge_threshold,
        resize = ?options.target_size,
        "sprite background remover"
    );

    let sprites = select_sprites(&cli.dir, cli.only.as_deref())
        .with_context(|| format!("Failed to list sprites in {}", cli.dir.display()))?;
    info!(count = sprites.len(), "found PNG sprites to process");

    let store = OriginalsStore::new(&cli.dir);
    match store
        .prepare(&sprites)
        .context("Failed to prepare original backups")?
    {
        Preparation::BackedUp(count) => info!(count, "backed up originals"),
        Preparation::Restored(count) => info!(count, "restored originals"),
    }

    let report = process_batch(&sprites, &options);
    for path in report.failed_paths() {
        warn!(path = %path.display(), "not processed");
    }
    info!(
        processed = report.successes(),
        failed = report.failures(),
        "done"
    );

    Ok(())
}
