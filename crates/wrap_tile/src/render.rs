//! Renderer interface consumed by the tile composer.
//!
//! The core never rasterizes anything. It resolves geometry, color and pose and hands them
//! to a [`Renderer`]. [`RecordingRenderer`] captures the calls for tests and tooling.
use glam::Vec2;

use crate::palette::Color;
use crate::shape::ShapeGeometry;

/// Drop-shadow displacement in tile units.
pub const SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 3.0);
/// Outline width around filled shapes.
pub const FILLED_OUTLINE_WIDTH: f32 = 2.0;
/// Stroke width of outline-only shapes.
pub const OUTLINE_ONLY_WIDTH: f32 = 3.0;

/// Where and how a shape is drawn: center in tile units, rotation in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub center: Vec2,
    pub rotation_deg: f32,
}

impl Pose {
    pub fn new(center: Vec2, rotation_deg: f32) -> Self {
        Self {
            center,
            rotation_deg,
        }
    }

    /// Same rotation, center moved by `offset`.
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            ..self
        }
    }
}

/// Line color and width.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drawing backend driven by [`crate::compose::TileComposer`].
pub trait Renderer {
    /// Start a tile of side `tile_size`, flooded with `background`.
    fn begin(&mut self, tile_size: f32, background: Color);

    /// One background grid dot.
    fn draw_dot(&mut self, center: Vec2, diameter: f32, color: Color);

    /// Flat shadow of `shape`, displaced by `offset` from `pose`.
    fn draw_shadow(&mut self, shape: &ShapeGeometry, pose: Pose, offset: Vec2, color: Color);

    /// Shape filled with `fill` and outlined with `outline`.
    fn draw_filled(&mut self, shape: &ShapeGeometry, pose: Pose, fill: Color, outline: Stroke);

    /// Shape stroked only.
    fn draw_outline(&mut self, shape: &ShapeGeometry, pose: Pose, outline: Stroke);

    /// Called once after the last shape of a pass.
    fn finish(&mut self) {}
}

/// A captured renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin {
        tile_size: f32,
        background: Color,
    },
    Dot {
        center: Vec2,
        diameter: f32,
        color: Color,
    },
    Shadow {
        shape: ShapeGeometry,
        pose: Pose,
        offset: Vec2,
        color: Color,
    },
    Filled {
        shape: ShapeGeometry,
        pose: Pose,
        fill: Color,
        outline: Stroke,
    },
    Outline {
        shape: ShapeGeometry,
        pose: Pose,
        outline: Stroke,
    },
    Finish,
}

impl DrawCall {
    /// Shape body draws (filled or outline), excluding shadows.
    pub fn is_body(&self) -> bool {
        matches!(self, DrawCall::Filled { .. } | DrawCall::Outline { .. })
    }

    pub fn pose(&self) -> Option<Pose> {
        match self {
            DrawCall::Shadow { pose, .. }
            | DrawCall::Filled { pose, .. }
            | DrawCall::Outline { pose, .. } => Some(*pose),
            _ => None,
        }
    }
}

/// Renderer that stores every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_inner(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn body_draws(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| c.is_body())
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, tile_size: f32, background: Color) {
        self.calls.push(DrawCall::Begin {
            tile_size,
            background,
        });
    }

    fn draw_dot(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.calls.push(DrawCall::Dot {
            center,
            diameter,
            color,
        });
    }

    fn draw_shadow(&mut self, shape: &ShapeGeometry, pose: Pose, offset: Vec2, color: Color) {
        self.calls.push(DrawCall::Shadow {
            shape: shape.clone(),
            pose,
            offset,
            color,
        });
    }

    fn draw_filled(&mut self, shape: &ShapeGeometry, pose: Pose, fill: Color, outline: Stroke) {
        self.calls.push(DrawCall::Filled {
            shape: shape.clone(),
            pose,
            fill,
            outline,
        });
    }

    fn draw_outline(&mut self, shape: &ShapeGeometry, pose: Pose, outline: Stroke) {
        self.calls.push(DrawCall::Outline {
            shape: shape.clone(),
            pose,
            outline,
        });
    }

    fn finish(&mut self) {
        self.calls.push(DrawCall::Finish);
    }
}
