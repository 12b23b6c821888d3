//! Performance benchmarks for sprite-matte
//!
//! Measures the traversal, the full matte and the contain resize on
//! sprite-like images at the sizes a renderer typically produces.

use criterion::*;
use image::Rgba;
use itertools::iproduct;
use sprite_matte::{
    BackgroundReachability, ContainResize, Image, Matte, MatteOptions, Thresholds,
};
use std::hint::black_box;

/// Helper function to create a gradient background with a round subject
fn create_sprite(width: u32, height: u32) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = (width.min(height) as f32) / 4.0;

    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let distance = (x as f32 - center_x).hypot(y as f32 - center_y);
        let pixel = if distance <= radius {
            Rgba([180, 60, 40, 255])
        } else {
            let shade = 255 - ((y * 40) / height) as u8;
            Rgba([shade, shade, 255, 255])
        };
        image.put_pixel(x, y, pixel);
    });

    image
}

/// Benchmark the background traversal across different image sizes
fn bench_background_traversal(c: &mut Criterion) {
    let sizes = vec![
        (96, 96),     // Output size
        (256, 256),   // Small
        (1024, 1024), // Generated sprite
    ];

    let mut group = c.benchmark_group("background_traversal");
    group.sample_size(10);

    for (width, height) in sizes {
        let pixels = width * height;
        group.throughput(Throughput::Elements(pixels as u64));

        let image = create_sprite(width, height);
        let thresholds = Thresholds::default();

        group.bench_with_input(
            BenchmarkId::new("background_set", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.background_set(&thresholds))),
        );
    }

    group.finish();
}

/// Benchmark the full matte (traversal, cut and feathering) per feather radius
fn bench_matte(c: &mut Criterion) {
    let radii = vec![0, 2, 4];

    let mut group = c.benchmark_group("matte");
    group.sample_size(10);

    let (width, height) = (1024, 1024);
    group.throughput(Throughput::Elements(u64::from(width * height)));
    let image = create_sprite(width, height);

    for radius in radii {
        let options = MatteOptions::default().with_feather_radius(radius);
        group.bench_with_input(
            BenchmarkId::new("matte", format!("{}x{}_r{}", width, height, radius)),
            &image,
            |b, img| b.iter(|| black_box(img.clone().matte(&options))),
        );
    }

    group.finish();
}

/// Benchmark the Lanczos-3 contain resize down to the sprite size
fn bench_contain_resize(c: &mut Criterion) {
    let sizes = vec![(1024, 1024), (1024, 768), (512, 1024)];

    let mut group = c.benchmark_group("contain_resize");
    group.sample_size(10);

    for (width, height) in sizes {
        group.throughput(Throughput::Elements(u64::from(width * height)));
        let image = create_sprite(width, height).matte(&MatteOptions::default());

        group.bench_with_input(
            BenchmarkId::new("resize_contain", format!("{}x{}_to_96", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.resize_contain(96).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_background_traversal,
    bench_matte,
    bench_contain_resize
);
criterion_main!(benches);
