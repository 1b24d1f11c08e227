use wrap_tile::prelude::*;
use wrap_tile_examples::{init_tracing, PngRenderer};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Optional seed as first argument for reproducible output
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let mut generator = TileGenerator::from_seed(seed);
    let mut renderer = PngRenderer::new(600);
    let report = generator.trigger_regeneration(&mut renderer);

    println!(
        "seed {seed}: {} shapes from {} families, {} without clearance",
        report.shapes.len(),
        report.families.len(),
        report.fallback_count()
    );
    for (family, count) in &report.families {
        let color = report.colors.for_family(*family).unwrap_or(SHADOW_COLOR);
        println!("  {family:<15} x{count} {color}");
    }

    renderer.save("tile-basic.png")?;
    Ok(())
}
