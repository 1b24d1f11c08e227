//! PNG rasterization of tiles via `image` + `imageproc`.
use std::path::Path;

use glam::Vec2;
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wrap_tile::prelude::*;

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Renderer that rasterizes a tile into an [`RgbaImage`].
pub struct PngRenderer {
    size_px: u32,
    px_per_unit: f32,
    image: RgbaImage,
}

impl PngRenderer {
    /// Create a renderer producing square images `size_px` pixels wide.
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px,
            px_per_unit: 1.0,
            image: RgbaImage::new(size_px, size_px),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        info!("Wrote {}.", path.display());
        Ok(())
    }

    fn px(&self, p: Vec2) -> Vec2 {
        p * self.px_per_unit
    }

    fn fill_primitive(&mut self, prim: &Primitive, color: Color, line_width: f32) {
        match prim {
            Primitive::Polygon(pts) => self.fill_polygon(pts, color),
            Primitive::Polyline(pts) => self.stroke(pts, line_width, color, false),
            Primitive::Disc { center, radius } => self.fill_disc(*center, *radius, color),
        }
    }

    fn fill_polygon(&mut self, pts: &[Vec2], color: Color) {
        let mut poly: Vec<Point<i32>> = Vec::with_capacity(pts.len());
        for p in pts {
            let q = self.px(*p).round();
            let q = Point::new(q.x as i32, q.y as i32);
            if poly.last() != Some(&q) {
                poly.push(q);
            }
        }
        // imageproc rejects polygons whose first and last vertex coincide.
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, rgba(color));
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        let c = self.px(center).round();
        let r = (radius * self.px_per_unit).round().max(1.0) as i32;
        draw_filled_circle_mut(&mut self.image, (c.x as i32, c.y as i32), r, rgba(color));
    }

    /// Thick polyline as one quad per segment plus round joints.
    fn stroke(&mut self, pts: &[Vec2], width: f32, color: Color, closed: bool) {
        if pts.len() < 2 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let mut segments: Vec<(Vec2, Vec2)> = pts.windows(2).map(|w| (w[0], w[1])).collect();
        if closed {
            segments.push((pts[pts.len() - 1], pts[0]));
        }
        for (a, b) in segments {
            let dir = (b - a).normalize_or_zero();
            if dir == Vec2::ZERO {
                continue;
            }
            let n = dir.perp() * half;
            self.fill_polygon(&[a + n, b + n, b - n, a - n], color);
        }
        if half * self.px_per_unit >= 1.0 {
            for p in pts {
                self.fill_disc(*p, half, color);
            }
        }
    }
}

impl Renderer for PngRenderer {
    fn begin(&mut self, tile_size: f32, background: Color) {
        self.px_per_unit = self.size_px as f32 / tile_size;
        self.image = RgbaImage::from_pixel(self.size_px, self.size_px, rgba(background));
    }

    fn draw_dot(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.fill_disc(center, diameter / 2.0, color);
    }

    fn draw_shadow(&mut self, shape: &ShapeGeometry, pose: Pose, offset: Vec2, color: Color) {
        let line_width = shape.line_width().unwrap_or(0.0);
        for prim in shape.primitives() {
            let posed = prim.posed(pose.center + offset, pose.rotation_deg);
            self.fill_primitive(&posed, color, line_width);
        }
    }

    fn draw_filled(&mut self, shape: &ShapeGeometry, pose: Pose, fill: Color, outline: Stroke) {
        for prim in shape.primitives() {
            match prim.posed(pose.center, pose.rotation_deg) {
                Primitive::Polygon(pts) => {
                    self.fill_polygon(&pts, fill);
                    self.stroke(&pts, outline.width, outline.color, true);
                }
                Primitive::Polyline(pts) => {
                    self.stroke(&pts, outline.width, outline.color, false)
                }
                Primitive::Disc { center, radius } => self.fill_disc(center, radius, fill),
            }
        }
    }

    fn draw_outline(&mut self, shape: &ShapeGeometry, pose: Pose, outline: Stroke) {
        for prim in shape.primitives() {
            match prim.posed(pose.center, pose.rotation_deg) {
                Primitive::Polygon(pts) => self.stroke(&pts, outline.width, outline.color, true),
                Primitive::Polyline(pts) => {
                    self.stroke(&pts, outline.width, outline.color, false)
                }
                Primitive::Disc { center, radius } => {
                    self.fill_disc(center, radius, outline.color)
                }
            }
        }
    }
}

/// Repeat `tile` `nx` by `ny` times to preview seams.
pub fn repeat_tile(tile: &RgbaImage, nx: u32, ny: u32) -> RgbaImage {
    let (w, h) = tile.dimensions();
    let mut out = RgbaImage::new(w * nx, h * ny);
    for j in 0..ny {
        for i in 0..nx {
            imageops::replace(&mut out, tile, (i * w) as i64, (j * h) as i64);
        }
    }
    out
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}
