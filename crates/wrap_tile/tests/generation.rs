use std::collections::HashSet;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wrap_tile::prelude::*;

fn assert_clearance(report: &TileReport) {
    let clear: Vec<&ShapeInstance> = report
        .shapes
        .iter()
        .filter(|s| s.placement.outcome.is_clear())
        .collect();
    for (i, a) in clear.iter().enumerate() {
        for b in &clear[..i] {
            let need = a.bounding_radius + b.bounding_radius + CLEARANCE_BUFFER;
            assert!(a.placement.position.distance(b.placement.position) >= need);
        }
    }
}

#[test]
fn consecutive_passes_differ_but_keep_clearance() {
    let mut generator = TileGenerator::from_seed(2024);
    let mut renderer = RecordingRenderer::new();
    let first = generator.trigger_regeneration(&mut renderer);
    renderer.clear();
    let second = generator.trigger_regeneration(&mut renderer);

    let layout = |r: &TileReport| -> Vec<Vec2> {
        r.shapes.iter().map(|s| s.placement.position).collect()
    };
    assert_ne!(layout(&first), layout(&second));
    assert_clearance(&first);
    assert_clearance(&second);
}

#[test]
fn dense_packing_falls_back_without_recording() {
    let mut engine = PlacementEngine::new(600.0);
    let mut rng = StdRng::seed_from_u64(1);
    let outcomes: Vec<PlacementOutcome> =
        (0..5).map(|_| engine.place(200.0, &mut rng).outcome).collect();

    assert!(outcomes[0].is_clear());
    assert!(outcomes[1..]
        .iter()
        .all(|o| *o == PlacementOutcome::Fallback));
    assert_eq!(engine.placed().len(), 1);
}

#[test]
fn small_tiles_keep_every_center_inside() {
    let config = GenerationConfig::new()
        .with_tile_size(100.0)
        .with_size_scale(SizeScale::Large)
        .with_count_mode(CountMode::Many);
    for seed in 0..5 {
        let mut generator = TileGenerator::from_seed(seed);
        generator.set_config(config.clone()).unwrap();
        let report = generator.trigger_regeneration(&mut RecordingRenderer::new());
        for shape in &report.shapes {
            let p = shape.placement.position;
            assert!(
                (0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y),
                "{} r={} at {p:?}",
                shape.family,
                shape.bounding_radius
            );
        }
    }
}

#[test]
fn every_instance_gets_nine_body_draws() {
    let mut generator = TileGenerator::from_seed(31);
    generator.set_shape_count_mode("many");
    let mut renderer = RecordingRenderer::new();
    let report = generator.trigger_regeneration(&mut renderer);

    assert_eq!(renderer.body_draws().count(), 9 * report.shapes.len());
    let first = &report.shapes[0];
    let centers: HashSet<(i32, i32)> = renderer
        .body_draws()
        .take(9)
        .filter_map(DrawCall::pose)
        .map(|p| {
            let d = p.center - first.placement.position;
            (d.x.round() as i32, d.y.round() as i32)
        })
        .collect();
    assert_eq!(centers.len(), 9);
}

#[test]
fn size_scale_setter_changes_shape_sizes() {
    let mean_radius = |scale: &str| {
        let mut total = 0.0;
        let mut count = 0usize;
        for seed in 0..25 {
            let mut generator = TileGenerator::from_seed(seed);
            generator.set_size_scale(scale);
            generator.set_shape_count_mode("many");
            let report = generator.trigger_regeneration(&mut RecordingRenderer::new());
            total += report.shapes.iter().map(|s| s.bounding_radius).sum::<f32>();
            count += report.shapes.len();
        }
        total / count as f32
    };
    assert!(mean_radius("large") > mean_radius("medium"));
    assert!(mean_radius("medium") > mean_radius("small"));
}

#[test]
fn fewer_mode_uses_fewer_families_than_usual() {
    let mut generator = TileGenerator::from_seed(77);
    generator.set_shape_count_mode("fewer");
    let fewer = generator.trigger_regeneration(&mut RecordingRenderer::new());
    generator.set_shape_count_mode("usual");
    let usual = generator.trigger_regeneration(&mut RecordingRenderer::new());
    assert!(fewer.families.len() < usual.families.len());
}

#[test]
fn events_can_fan_out_to_several_sinks() {
    let mut generator = TileGenerator::from_seed(3);
    let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
    let report =
        generator.trigger_regeneration_with_events(&mut RecordingRenderer::new(), &mut multi);

    for sink in multi.into_sinks() {
        let finished: Vec<&TileReport> = sink
            .as_slice()
            .iter()
            .filter_map(|e| match e {
                TileEvent::PassFinished { report } => Some(report),
                _ => None,
            })
            .collect();
        assert_eq!(finished, vec![&report]);
    }
}
