//! Benchmarks for the Web Mercator conversions.
//!
//! Run with: cargo bench --package projection --bench mercator_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use projection::Projection;

/// Lat/lon samples on a regular grid inside the square world.
fn generate_lat_lon_grid(count: usize) -> Vec<(f64, f64)> {
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let row = (i / side) as f64 / side as f64;
            let col = (i % side) as f64 / side as f64;
            (-85.0 + row * 170.0, -180.0 + col * 360.0)
        })
        .collect()
}

// =============================================================================
// SINGLE CONVERSIONS
// =============================================================================

fn bench_single_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_conversion");
    let proj = Projection::default();

    group.bench_function("lat_lon_to_meters", |b| {
        b.iter(|| proj.lat_lon_to_meters(black_box(40.7128), black_box(-74.0060)))
    });

    group.bench_function("meters_to_lat_lon", |b| {
        b.iter(|| proj.meters_to_lat_lon(black_box(-8238310.24), black_box(4970071.58)))
    });

    group.bench_function("pixels_to_tile", |b| {
        b.iter(|| proj.pixels_to_tile(black_box(4939678.42), black_box(6307911.06)))
    });

    group.bench_function("lat_lon_to_tile_and_pixel", |b| {
        b.iter(|| proj.lat_lon_to_tile_and_pixel(black_box(40.7128), black_box(-74.0060), 16))
    });

    group.finish();
}

// =============================================================================
// BATCH CONVERSIONS
// =============================================================================

fn bench_batch_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_lat_lon_to_tile");

    for tile_size in [256u32, 512] {
        let proj = Projection::new(tile_size);
        let points = generate_lat_lon_grid(65_536);

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("tile_size", tile_size),
            &points,
            |b, points| {
                b.iter(|| {
                    points
                        .iter()
                        .map(|&(lat, lon)| proj.lat_lon_to_tile(lat, lon, 14))
                        .fold(0i64, |acc, tile| acc.wrapping_add(tile.x ^ tile.y))
                })
            },
        );
    }

    group.finish();
}

fn bench_tile_bounds(c: &mut Criterion) {
    let proj = Projection::default();
    let tile = proj.lat_lon_to_tile(51.5074, -0.1278, 12);

    c.bench_function("tile_lat_lon_bounds", |b| {
        b.iter(|| proj.tile_lat_lon_bounds(black_box(tile), 12))
    });
}

criterion_group!(
    benches,
    bench_single_conversions,
    bench_batch_tiles,
    bench_tile_bounds,
);
criterion_main!(benches);
