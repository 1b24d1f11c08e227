use wrap_tile::prelude::*;
use wrap_tile_examples::{init_tracing, PngRenderer};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same seed for every variant so only the size knob differs
    for scale in ["small", "medium", "large"] {
        let mut generator = TileGenerator::from_seed(7);
        generator.set_size_scale(scale);
        generator.set_shape_count_mode("usual");

        let mut renderer = PngRenderer::new(600);
        let report = generator.trigger_regeneration(&mut renderer);
        let mean_radius = report
            .shapes
            .iter()
            .map(|s| s.bounding_radius)
            .sum::<f32>()
            / report.shapes.len().max(1) as f32;
        println!(
            "{scale:<6} mean radius {mean_radius:>6.1}, fallbacks {}",
            report.fallback_count()
        );

        renderer.save(format!("tile-size-{scale}.png"))?;
    }
    Ok(())
}
