//! Enclosing-circle radius per shape family.
//!
//! The radius is measured from the placement point, so it follows each family's anchoring:
//! isosceles triangles sit on their base midpoint and therefore use the full height.
use crate::shape::{ShapeGeometry, BAND_PERIOD_DIVISOR, SQUIGGLE_PERIOD_DIVISOR};

/// Unscaled margin added around wave and dot-grid shapes.
pub const SAFETY_MARGIN: f32 = 10.0;

/// Radius of the circle around the placement point used for collision tests.
pub fn bounding_radius(geometry: &ShapeGeometry) -> f32 {
    match geometry {
        ShapeGeometry::Square { side } => side * std::f32::consts::SQRT_2 / 2.0,
        ShapeGeometry::Triangle { side } => {
            let h = equilateral_height(*side);
            (side / 2.0).hypot(h / 2.0)
        }
        ShapeGeometry::IsoTriangle { base, height } => (base / 2.0).hypot(*height),
        ShapeGeometry::Semicircle { diameter } | ShapeGeometry::StripeyCircle { diameter, .. } => {
            diameter / 2.0
        }
        ShapeGeometry::Oval { width, height } => (width / 2.0).hypot(height / 2.0),
        ShapeGeometry::Squiggle(wave) => {
            let len = wave.length(SQUIGGLE_PERIOD_DIVISOR);
            (len / 2.0).hypot(wave.amplitude) + SAFETY_MARGIN
        }
        ShapeGeometry::SineWaveBand { wave, .. } => {
            let len = wave.length(BAND_PERIOD_DIVISOR);
            (len / 2.0).hypot(wave.amplitude) + SAFETY_MARGIN
        }
        ShapeGeometry::DotGrid {
            grid_size, spacing, ..
        } => (*grid_size as f32 * spacing) / 2.0 + SAFETY_MARGIN,
    }
}

#[inline]
pub(crate) fn equilateral_height(side: f32) -> f32 {
    side * 3f32.sqrt() / 2.0
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::shape::sample::sample_geometry;
    use crate::shape::{ShapeFamily, Wave};

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn square_uses_half_diagonal() {
        approx(bounding_radius(&ShapeGeometry::Square { side: 100.0 }), 70.7107);
    }

    #[test]
    fn triangle_uses_circumradius_formula() {
        let s = 90.0_f32;
        let h = s * 3f32.sqrt() / 2.0;
        approx(
            bounding_radius(&ShapeGeometry::Triangle { side: s }),
            ((s / 2.0).powi(2) + (h / 2.0).powi(2)).sqrt(),
        );
    }

    #[test]
    fn iso_triangle_uses_full_height() {
        approx(
            bounding_radius(&ShapeGeometry::IsoTriangle {
                base: 60.0,
                height: 40.0,
            }),
            50.0,
        );
    }

    #[test]
    fn round_shapes_use_half_diameter() {
        approx(bounding_radius(&ShapeGeometry::Semicircle { diameter: 90.0 }), 45.0);
        approx(
            bounding_radius(&ShapeGeometry::StripeyCircle {
                diameter: 80.0,
                stripes: 5,
            }),
            40.0,
        );
        approx(
            bounding_radius(&ShapeGeometry::Oval {
                width: 60.0,
                height: 80.0,
            }),
            50.0,
        );
    }

    #[test]
    fn waves_add_unscaled_margin_and_differ_by_divisor() {
        let wave = Wave {
            humps: 5,
            spacing: 20.0,
            amplitude: 10.0,
        };
        let squiggle_len = 5.0 * 20.0 * std::f32::consts::TAU / 10.0;
        approx(
            bounding_radius(&ShapeGeometry::Squiggle(wave)),
            ((squiggle_len / 2.0).powi(2) + 100.0).sqrt() + 10.0,
        );

        let band_len = squiggle_len / 2.0;
        approx(
            bounding_radius(&ShapeGeometry::SineWaveBand {
                wave,
                thickness: 8.0,
            }),
            ((band_len / 2.0).powi(2) + 100.0).sqrt() + 10.0,
        );
    }

    #[test]
    fn dot_grid_uses_half_side_plus_margin() {
        approx(
            bounding_radius(&ShapeGeometry::DotGrid {
                grid_size: 4,
                spacing: 15.0,
                dot_diameter: 6.0,
            }),
            40.0,
        );
    }

    #[test]
    fn radius_is_positive_and_linear_in_scale() {
        for family in ShapeFamily::ALL {
            let margin = match family {
                ShapeFamily::Squiggle | ShapeFamily::SineWaveBand | ShapeFamily::DotGrid => {
                    SAFETY_MARGIN
                }
                _ => 0.0,
            };
            for seed in 0..10 {
                let per_unit: Vec<f32> = [0.8, 1.2, 1.6]
                    .into_iter()
                    .map(|scale| {
                        let geometry =
                            sample_geometry(family, &mut StdRng::seed_from_u64(seed), scale);
                        let r = bounding_radius(&geometry);
                        assert!(r > 0.0, "{family} at {scale}: {r}");
                        (r - margin) / scale
                    })
                    .collect();
                for v in &per_unit[1..] {
                    assert!(
                        (v - per_unit[0]).abs() <= per_unit[0] * 1e-4,
                        "{family}: {per_unit:?}"
                    );
                }
            }
        }
    }
}
