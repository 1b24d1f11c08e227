mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wrap_tile::compose::TileComposer;
use wrap_tile::config::{CountMode, GenerationConfig, SizeScale};
use wrap_tile::palette::Palette;
use wrap_tile::render::RecordingRenderer;

fn compose_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/pass");

    for mode in [CountMode::Fewer, CountMode::Usual, CountMode::Many] {
        for scale in [SizeScale::Small, SizeScale::Large] {
            let config = GenerationConfig::new()
                .with_count_mode(mode)
                .with_size_scale(scale);
            let mut composer =
                TileComposer::try_new(Palette::vibrant()).expect("vibrant palette fits");
            let mut rng = StdRng::seed_from_u64(0xC0FFEE);

            group.bench_with_input(
                BenchmarkId::new(mode.name(), scale.name()),
                &config,
                |b, config| {
                    b.iter(|| {
                        let mut renderer = RecordingRenderer::new();
                        let report = composer.generate(config, &mut rng, &mut renderer);
                        black_box(renderer.calls().len());
                        black_box(report.shapes.len());
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = compose_benches
}
criterion_main!(benches);
