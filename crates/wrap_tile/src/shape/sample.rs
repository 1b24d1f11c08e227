//! Per-family dimension sampling.
//!
//! Every size parameter is `base × jitter × scale`, with one independent jitter draw per
//! parameter. Integer parameters (humps, grid size, stripes) are drawn first and never scaled,
//! so two passes that differ only in size scale consume identical random draws.
use rand::{Rng, RngCore};

use crate::sampling::uniform_half_open;
use crate::shape::{FamilyDescriptor, ShapeFamily, ShapeGeometry, Wave};

/// Per-parameter multiplicative jitter range, `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeJitter {
    pub min: f32,
    pub max: f32,
}

pub const SIZE_JITTER: SizeJitter = SizeJitter { min: 0.8, max: 1.2 };

#[inline]
fn scaled(rng: &mut dyn RngCore, base: f32, scale: f32) -> f32 {
    base * uniform_half_open(rng, SIZE_JITTER.min, SIZE_JITTER.max) * scale
}

pub(crate) static SQUARE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::Square,
    instances: (2, 4),
    supports_fill: true,
    sample: |rng, scale| ShapeGeometry::Square {
        side: scaled(rng, 75.0, scale),
    },
};

pub(crate) static TRIANGLE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::Triangle,
    instances: (3, 5),
    supports_fill: true,
    sample: |rng, scale| ShapeGeometry::Triangle {
        side: scaled(rng, 90.0, scale),
    },
};

pub(crate) static ISO_TRIANGLE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::IsoTriangle,
    instances: (2, 4),
    supports_fill: true,
    sample: |rng, scale| {
        let base = scaled(rng, 70.0, scale);
        let height = scaled(rng, 100.0, scale);
        ShapeGeometry::IsoTriangle { base, height }
    },
};

pub(crate) static SEMICIRCLE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::Semicircle,
    instances: (3, 5),
    supports_fill: true,
    sample: |rng, scale| ShapeGeometry::Semicircle {
        diameter: scaled(rng, 90.0, scale),
    },
};

pub(crate) static OVAL: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::Oval,
    instances: (2, 4),
    supports_fill: true,
    sample: |rng, scale| {
        let width = scaled(rng, 110.0, scale);
        let height = scaled(rng, 65.0, scale);
        ShapeGeometry::Oval { width, height }
    },
};

pub(crate) static SQUIGGLE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::Squiggle,
    instances: (3, 6),
    supports_fill: false,
    sample: |rng, scale| {
        let humps = rng.random_range(3..6u32);
        let spacing = scaled(rng, 18.0, scale);
        let amplitude = scaled(rng, 13.5, scale);
        ShapeGeometry::Squiggle(Wave {
            humps,
            spacing,
            amplitude,
        })
    },
};

pub(crate) static SINE_WAVE_BAND: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::SineWaveBand,
    instances: (1, 3),
    supports_fill: false,
    sample: |rng, scale| {
        let humps = rng.random_range(3..6u32);
        let spacing = scaled(rng, 36.0, scale);
        let amplitude = scaled(rng, 16.0, scale);
        let thickness = scaled(rng, 9.0, scale);
        ShapeGeometry::SineWaveBand {
            wave: Wave {
                humps,
                spacing,
                amplitude,
            },
            thickness,
        }
    },
};

pub(crate) static DOT_GRID: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::DotGrid,
    instances: (2, 4),
    supports_fill: false,
    sample: |rng, scale| {
        let grid_size = rng.random_range(3..6u32);
        let spacing = scaled(rng, 14.0, scale);
        let dot_diameter = scaled(rng, 6.0, scale);
        ShapeGeometry::DotGrid {
            grid_size,
            spacing,
            dot_diameter,
        }
    },
};

pub(crate) static STRIPEY_CIRCLE: FamilyDescriptor = FamilyDescriptor {
    family: ShapeFamily::StripeyCircle,
    instances: (1, 3),
    supports_fill: false,
    sample: |rng, scale| {
        let stripes = rng.random_range(3..7u32);
        let diameter = scaled(rng, 85.0, scale);
        ShapeGeometry::StripeyCircle { diameter, stripes }
    },
};

/// Sample one instance of `family` at the given size-scale multiplier.
pub fn sample_geometry(family: ShapeFamily, rng: &mut dyn RngCore, scale: f32) -> ShapeGeometry {
    (family.descriptor().sample)(rng, scale)
}

/// Draw how many instances of `family` a pass places.
pub fn sample_instance_count(family: ShapeFamily, rng: &mut dyn RngCore) -> usize {
    let (lo, hi) = family.descriptor().instances;
    rng.random_range(lo..hi)
}
