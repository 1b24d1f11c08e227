#![forbid(unsafe_code)]
//! wrap_tile: seamless generative art tiles with wrap-aware shape placement.
//!
//! Modules:
//! - shape: families, sampled geometry, bounding radii, drawing primitives
//! - placement: non-overlapping placement of bounding circles inside the tile
//! - palette: colors, palettes and per-pass role assignment
//! - compose: one generation pass, drawn at all nine toroidal offsets
//! - render: the renderer interface and a recording renderer
//! - generator: string-configurable facade with an owned random source
//!
//! For a PNG renderer and runnable examples, see the `wrap_tile_examples` crate.
pub mod compose;
pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod palette;
pub mod placement;
pub mod render;
pub(crate) mod sampling;
pub mod shape;

/// Convenient re-exports for common types. Import with `use wrap_tile::prelude::*;`.
pub mod prelude {
    pub use crate::compose::wrap::{wrap_offsets, DOT_SPACING};
    pub use crate::compose::{
        draw_wrapped, ComposerState, ShapeInstance, ShapeStyle, TileComposer, TileReport,
    };
    pub use crate::config::{CollisionMetric, CountMode, GenerationConfig, SizeScale};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, MultiSink, TileEvent, VecSink};
    pub use crate::generator::TileGenerator;
    pub use crate::palette::{Color, Palette, RoleColors, SHADOW_COLOR};
    pub use crate::placement::{
        toroidal_distance, PlacedShape, Placement, PlacementEngine, PlacementOutcome,
        CLEARANCE_BUFFER, MAX_ATTEMPTS,
    };
    pub use crate::render::{DrawCall, Pose, RecordingRenderer, Renderer, Stroke};
    pub use crate::shape::{bounding_radius, Primitive, ShapeFamily, ShapeGeometry, Wave};
}
