use wrap_tile::prelude::*;
use wrap_tile_examples::{init_tracing, repeat_tile, PngRenderer};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut generator = TileGenerator::from_seed(2025);
    generator.set_shape_count_mode("many");

    let mut renderer = PngRenderer::new(400);
    generator.trigger_regeneration(&mut renderer);
    renderer.save("tile-repeat-single.png")?;

    // 3x3 repeat: shapes crossing an edge continue seamlessly in the neighbor
    let preview = repeat_tile(renderer.image(), 3, 3);
    preview.save("tile-repeat-preview.png")?;
    println!("wrote tile-repeat-single.png and tile-repeat-preview.png");
    Ok(())
}
