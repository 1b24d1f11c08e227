mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wrap_tile::config::CollisionMetric;
use wrap_tile::placement::PlacementEngine;

const RADII: [f32; 4] = [10.0, 25.0, 50.0, 100.0];
const SHAPES_PER_TILE: usize = 40;

fn placement_benches(c: &mut Criterion) {
    for metric in [CollisionMetric::Planar, CollisionMetric::Toroidal] {
        let mut group = c.benchmark_group(format!("placement/{metric:?}").to_lowercase());
        group.throughput(common::shapes_throughput(SHAPES_PER_TILE));

        for &radius in &RADII {
            let mut rng = StdRng::seed_from_u64(0x7113 ^ radius as u64);
            group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
                b.iter(|| {
                    let mut engine = PlacementEngine::new(600.0).with_metric(metric);
                    for _ in 0..SHAPES_PER_TILE {
                        black_box(engine.place(r, &mut rng));
                    }
                    black_box(engine.placed().len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = placement_benches
}
criterion_main!(benches);
