//! Benchmarks for the section pipeline.
//!
//! Run with: `cargo bench --bench section_bench`
//!
//! Times distances, the topography mask and shadow-zone extrapolation on
//! synthetic shelf-to-basin transects of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use oceans::{build_topo_mask, cumulative_distance, extrapolate_section, TopoMaskOptions};

/// Transect running south along a meridian, deepening station by station.
fn setup_transect(stations: usize, levels: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Array2<f64>) {
    let lon = vec![-40.0; stations];
    let lat: Vec<f64> = (0..stations).map(|i| -20.0 - 0.05 * i as f64).collect();
    let h: Vec<f64> = (0..stations)
        .map(|i| 10.0 + 4000.0 * i as f64 / stations as f64)
        .collect();

    let data = Array2::from_shape_fn((levels, stations), |(level, station)| {
        let reach = (station + 1) * levels / stations;
        if level < reach.max(1) {
            25.0 - 0.01 * level as f64 - 0.1 * station as f64
        } else {
            f64::NAN
        }
    });

    (lon, lat, h, data)
}

fn bench_cumulative_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_distance");

    for stations in [10, 100, 1000] {
        let (lon, lat, _, _) = setup_transect(stations, 1);
        group.bench_with_input(BenchmarkId::from_parameter(stations), &stations, |b, _| {
            b.iter(|| cumulative_distance(black_box(&lon), black_box(&lat)))
        });
    }

    group.finish();
}

fn bench_topo_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("topo_mask");
    let options = TopoMaskOptions {
        dx: 0.5,
        ..Default::default()
    };

    for stations in [10, 100, 1000] {
        let (lon, lat, h, _) = setup_transect(stations, 1);
        group.bench_with_input(BenchmarkId::from_parameter(stations), &stations, |b, _| {
            b.iter(|| build_topo_mask(black_box(&h), &lon, &lat, &options))
        });
    }

    group.finish();
}

fn bench_extrapolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrapolate_section");
    group.sample_size(50);

    for (stations, levels) in [(10, 100), (50, 500), (200, 2000)] {
        let (lon, lat, _, data) = setup_transect(stations, levels);
        group.bench_with_input(
            BenchmarkId::new("grid", format!("{}x{}", levels, stations)),
            &data,
            |b, data| b.iter(|| extrapolate_section(black_box(&data.view()), &lon, &lat, 0.8)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cumulative_distance,
    bench_topo_mask,
    bench_extrapolation
);
criterion_main!(benches);
