//! Generation configuration: size scale, family count mode, fill probability, tile size.
//!
//! [`GenerationConfig`] is an immutable value handed to each pass. The string-accepting
//! parsers back the caller-facing setters on [`crate::generator::TileGenerator`], which fall
//! back to the defaults for anything unrecognized.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::shape::ShapeFamily;

pub const DEFAULT_TILE_SIZE: f32 = 600.0;
pub const DEFAULT_FILL_PROBABILITY: f32 = 0.7;

/// Global multiplier on every shape dimension.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeScale {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeScale {
    pub fn multiplier(self) -> f32 {
        match self {
            SizeScale::Small => 0.8,
            SizeScale::Medium => 1.2,
            SizeScale::Large => 1.6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizeScale::Small => "small",
            SizeScale::Medium => "medium",
            SizeScale::Large => "large",
        }
    }
}

impl FromStr for SizeScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeScale::Small),
            "medium" => Ok(SizeScale::Medium),
            "large" => Ok(SizeScale::Large),
            _ => Err(Error::UnknownOption {
                option: "size scale",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SizeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// How many distinct shape families take part in a pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountMode {
    Fewer,
    #[default]
    Usual,
    Many,
}

impl CountMode {
    /// Number of active families drawn from the full set.
    pub fn family_count(self) -> usize {
        match self {
            CountMode::Fewer => 3,
            CountMode::Usual => 5,
            CountMode::Many => ShapeFamily::ALL.len(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CountMode::Fewer => "fewer",
            CountMode::Usual => "usual",
            CountMode::Many => "many",
        }
    }
}

impl FromStr for CountMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fewer" => Ok(CountMode::Fewer),
            "usual" => Ok(CountMode::Usual),
            "many" => Ok(CountMode::Many),
            _ => Err(Error::UnknownOption {
                option: "shape count mode",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for CountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Distance used by the placement engine's clearance test.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionMetric {
    /// Straight-line distance inside the tile. Shapes near opposite edges are treated as far
    /// apart even though their wrapped copies may touch.
    #[default]
    Planar,
    /// Shortest distance on the torus formed by wrapping the tile edges.
    Toroidal,
}

impl FromStr for CollisionMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planar" => Ok(CollisionMetric::Planar),
            "toroidal" => Ok(CollisionMetric::Toroidal),
            _ => Err(Error::UnknownOption {
                option: "collision metric",
                value: s.to_owned(),
            }),
        }
    }
}

/// Configuration read at the start of each generation pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Multiplier applied to every sampled dimension.
    pub size_scale: SizeScale,
    /// How many families participate.
    pub count_mode: CountMode,
    /// Probability that a fill-capable shape is drawn filled rather than outline-only.
    pub fill_probability: f32,
    /// Side length of the square tile.
    pub tile_size: f32,
    /// Clearance metric for placement.
    pub collision_metric: CollisionMetric,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size_scale: SizeScale::default(),
            count_mode: CountMode::default(),
            fill_probability: DEFAULT_FILL_PROBABILITY,
            tile_size: DEFAULT_TILE_SIZE,
            collision_metric: CollisionMetric::default(),
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size scale.
    pub fn with_size_scale(mut self, size_scale: SizeScale) -> Self {
        self.size_scale = size_scale;
        self
    }

    /// Sets the family count mode.
    pub fn with_count_mode(mut self, count_mode: CountMode) -> Self {
        self.count_mode = count_mode;
        self
    }

    /// Sets the fill probability.
    pub fn with_fill_probability(mut self, fill_probability: f32) -> Self {
        self.fill_probability = fill_probability;
        self
    }

    /// Sets the tile side length.
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the collision metric.
    pub fn with_collision_metric(mut self, collision_metric: CollisionMetric) -> Self {
        self.collision_metric = collision_metric;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(Error::InvalidConfig("tile_size must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(Error::InvalidConfig(
                "fill_probability must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
