use rand::rngs::StdRng;
use rand::SeedableRng;
use wrap_tile::prelude::*;
use wrap_tile_examples::{init_tracing, repeat_tile, PngRenderer};

fn main() -> anyhow::Result<()> {
    init_tracing();

    for metric in [CollisionMetric::Planar, CollisionMetric::Toroidal] {
        let config = GenerationConfig::new()
            .with_count_mode(CountMode::Many)
            .with_size_scale(SizeScale::Large)
            .with_collision_metric(metric);

        let mut composer = TileComposer::try_new(Palette::vibrant())?;
        let mut rng = StdRng::seed_from_u64(314);
        let mut renderer = PngRenderer::new(500);

        let mut exhausted = 0usize;
        let mut sink = FnSink::new(|event| {
            if let TileEvent::PlacementExhausted { .. } = event {
                exhausted += 1;
            }
        });
        let report = composer.generate_with_events(&config, &mut rng, &mut renderer, &mut sink);

        // Overlaps among recorded placements once the tile repeats
        let placed = composer.engine().placed();
        let mut wrapped_overlaps = 0usize;
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[..i] {
                let d = toroidal_distance(a.center, b.center, config.tile_size);
                if d < a.bounding_radius + b.bounding_radius {
                    wrapped_overlaps += 1;
                }
            }
        }

        let name = format!("{metric:?}").to_lowercase();
        println!(
            "{name:<9} shapes {:>3} | exhausted {:>2} | overlaps across the wrap {:>2}",
            report.shapes.len(),
            exhausted,
            wrapped_overlaps
        );
        repeat_tile(renderer.image(), 2, 2).save(format!("placement-{name}.png"))?;
    }
    Ok(())
}
