//! Shape families, their resolved geometry, and the per-family dispatch table.
//!
//! - [`ShapeFamily`]: closed set of families a tile can contain.
//! - [`ShapeGeometry`]: one sampled instance with every numeric parameter resolved.
//! - [`FamilyDescriptor`]: instance-count range, fill support and sampler per family.
//! - [`bounds`]: enclosing-circle radius used for collision tests.
//! - [`silhouette`]: local-space primitives consumed by renderers.
use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::error::{Error, Result};

pub mod bounds;
pub mod sample;
pub mod silhouette;

pub use bounds::bounding_radius;
pub use sample::SizeJitter;
pub use silhouette::Primitive;

/// Closed set of shape families.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeFamily {
    Square,
    Triangle,
    IsoTriangle,
    Semicircle,
    Oval,
    Squiggle,
    SineWaveBand,
    DotGrid,
    StripeyCircle,
}

impl ShapeFamily {
    /// Every family, in declaration order.
    pub const ALL: [ShapeFamily; 9] = [
        ShapeFamily::Square,
        ShapeFamily::Triangle,
        ShapeFamily::IsoTriangle,
        ShapeFamily::Semicircle,
        ShapeFamily::Oval,
        ShapeFamily::Squiggle,
        ShapeFamily::SineWaveBand,
        ShapeFamily::DotGrid,
        ShapeFamily::StripeyCircle,
    ];

    /// Back-to-front draw order: wide filled shapes, then linear shapes, then textural overlays.
    pub const DRAW_ORDER: [ShapeFamily; 9] = [
        ShapeFamily::Oval,
        ShapeFamily::Square,
        ShapeFamily::Semicircle,
        ShapeFamily::StripeyCircle,
        ShapeFamily::IsoTriangle,
        ShapeFamily::Triangle,
        ShapeFamily::SineWaveBand,
        ShapeFamily::Squiggle,
        ShapeFamily::DotGrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeFamily::Square => "square",
            ShapeFamily::Triangle => "triangle",
            ShapeFamily::IsoTriangle => "iso-triangle",
            ShapeFamily::Semicircle => "semicircle",
            ShapeFamily::Oval => "oval",
            ShapeFamily::Squiggle => "squiggle",
            ShapeFamily::SineWaveBand => "sine-wave-band",
            ShapeFamily::DotGrid => "dot-grid",
            ShapeFamily::StripeyCircle => "stripey-circle",
        }
    }

    /// Dispatch-table entry for this family.
    pub fn descriptor(self) -> &'static FamilyDescriptor {
        match self {
            ShapeFamily::Square => &sample::SQUARE,
            ShapeFamily::Triangle => &sample::TRIANGLE,
            ShapeFamily::IsoTriangle => &sample::ISO_TRIANGLE,
            ShapeFamily::Semicircle => &sample::SEMICIRCLE,
            ShapeFamily::Oval => &sample::OVAL,
            ShapeFamily::Squiggle => &sample::SQUIGGLE,
            ShapeFamily::SineWaveBand => &sample::SINE_WAVE_BAND,
            ShapeFamily::DotGrid => &sample::DOT_GRID,
            ShapeFamily::StripeyCircle => &sample::STRIPEY_CIRCLE,
        }
    }

    /// Position of this family in [`ShapeFamily::DRAW_ORDER`].
    pub fn draw_rank(self) -> usize {
        ShapeFamily::DRAW_ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(ShapeFamily::DRAW_ORDER.len())
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShapeFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ShapeFamily::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| Error::UnknownOption {
                option: "shape family",
                value: s.to_owned(),
            })
    }
}

/// Static per-family behavior, selected through [`ShapeFamily::descriptor`].
pub struct FamilyDescriptor {
    pub family: ShapeFamily,
    /// Instance count range per pass, `[min, max)`.
    pub instances: (usize, usize),
    /// Whether instances flip between filled and outline-only drawing.
    pub supports_fill: bool,
    /// Draws every size parameter for one instance at the given size-scale multiplier.
    pub sample: fn(&mut dyn RngCore, f32) -> ShapeGeometry,
}

impl fmt::Debug for FamilyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyDescriptor")
            .field("family", &self.family)
            .field("instances", &self.instances)
            .field("supports_fill", &self.supports_fill)
            .finish_non_exhaustive()
    }
}

/// Sine-wave parameters shared by squiggles and sine-wave bands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub humps: u32,
    /// Wavelength in tile units.
    pub spacing: f32,
    pub amplitude: f32,
}

impl Wave {
    /// Horizontal extent of the polyline for the given period divisor.
    pub fn length(&self, divisor: f32) -> f32 {
        self.humps as f32 * self.spacing * std::f32::consts::TAU / divisor
    }
}

pub const SQUIGGLE_PERIOD_DIVISOR: f32 = 10.0;
pub const BAND_PERIOD_DIVISOR: f32 = 20.0;
/// Stroke width of squiggles.
pub const SQUIGGLE_LINE_WIDTH: f32 = 4.0;

/// One sampled shape with all numeric parameters resolved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Square { side: f32 },
    Triangle { side: f32 },
    IsoTriangle { base: f32, height: f32 },
    Semicircle { diameter: f32 },
    Oval { width: f32, height: f32 },
    Squiggle(Wave),
    SineWaveBand { wave: Wave, thickness: f32 },
    DotGrid { grid_size: u32, spacing: f32, dot_diameter: f32 },
    StripeyCircle { diameter: f32, stripes: u32 },
}

impl ShapeGeometry {
    pub fn family(&self) -> ShapeFamily {
        match self {
            ShapeGeometry::Square { .. } => ShapeFamily::Square,
            ShapeGeometry::Triangle { .. } => ShapeFamily::Triangle,
            ShapeGeometry::IsoTriangle { .. } => ShapeFamily::IsoTriangle,
            ShapeGeometry::Semicircle { .. } => ShapeFamily::Semicircle,
            ShapeGeometry::Oval { .. } => ShapeFamily::Oval,
            ShapeGeometry::Squiggle(_) => ShapeFamily::Squiggle,
            ShapeGeometry::SineWaveBand { .. } => ShapeFamily::SineWaveBand,
            ShapeGeometry::DotGrid { .. } => ShapeFamily::DotGrid,
            ShapeGeometry::StripeyCircle { .. } => ShapeFamily::StripeyCircle,
        }
    }

    /// Stroke width for shapes that are drawn as lines rather than areas.
    pub fn line_width(&self) -> Option<f32> {
        match self {
            ShapeGeometry::Squiggle(_) => Some(SQUIGGLE_LINE_WIDTH),
            ShapeGeometry::SineWaveBand { thickness, .. } => Some(*thickness),
            _ => None,
        }
    }

    /// Size parameters in a fixed order, integer parameters excluded.
    pub fn dimensions(&self) -> Vec<f32> {
        match self {
            ShapeGeometry::Square { side } | ShapeGeometry::Triangle { side } => vec![*side],
            ShapeGeometry::IsoTriangle { base, height } => vec![*base, *height],
            ShapeGeometry::Semicircle { diameter }
            | ShapeGeometry::StripeyCircle { diameter, .. } => vec![*diameter],
            ShapeGeometry::Oval { width, height } => vec![*width, *height],
            ShapeGeometry::Squiggle(w) => vec![w.spacing, w.amplitude],
            ShapeGeometry::SineWaveBand { wave, thickness } => {
                vec![wave.spacing, wave.amplitude, *thickness]
            }
            ShapeGeometry::DotGrid {
                spacing,
                dot_diameter,
                ..
            } => vec![*spacing, *dot_diameter],
        }
    }

    pub fn bounding_radius(&self) -> f32 {
        bounds::bounding_radius(self)
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        silhouette::primitives(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_order_covers_every_family_once() {
        let mut sorted = ShapeFamily::DRAW_ORDER.to_vec();
        sorted.sort();
        assert_eq!(sorted, ShapeFamily::ALL.to_vec());
    }

    #[test]
    fn descriptors_point_back_to_their_family() {
        for family in ShapeFamily::ALL {
            assert_eq!(family.descriptor().family, family);
        }
    }

    #[test]
    fn family_names_parse_back() {
        for family in ShapeFamily::ALL {
            assert_eq!(family.name().parse::<ShapeFamily>().unwrap(), family);
        }
        assert!("hexagon".parse::<ShapeFamily>().is_err());
    }

    #[test]
    fn only_line_families_report_a_line_width() {
        let wave = Wave {
            humps: 3,
            spacing: 18.0,
            amplitude: 13.5,
        };
        assert_eq!(
            ShapeGeometry::Squiggle(wave).line_width(),
            Some(SQUIGGLE_LINE_WIDTH)
        );
        assert_eq!(
            ShapeGeometry::SineWaveBand {
                wave,
                thickness: 7.0
            }
            .line_width(),
            Some(7.0)
        );
        assert_eq!(ShapeGeometry::Square { side: 10.0 }.line_width(), None);
    }

    #[test]
    fn rank_matches_draw_order_position() {
        assert_eq!(ShapeFamily::Oval.draw_rank(), 0);
        assert_eq!(ShapeFamily::DotGrid.draw_rank(), 8);
        assert!(ShapeFamily::Square.draw_rank() < ShapeFamily::Squiggle.draw_rank());
    }
}
