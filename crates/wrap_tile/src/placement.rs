//! Non-overlapping placement of bounding circles inside a square tile.
//!
//! Candidates are drawn uniformly from `[r, W - r]` on both axes so the un-wrapped instance
//! stays inside the tile. A circle wider than the tile collapses that range to the tile center. A candidate is accepted when every previously placed circle is at
//! least `r + other.r + CLEARANCE_BUFFER` away. After [`MAX_ATTEMPTS`] rejections the engine
//! gives up and returns an unchecked position anywhere in the tile; that position is not
//! recorded, so later shapes are not pushed away from it.
//!
//! Placement is sequential: earlier shapes always see a cleaner tile than later ones.
use glam::Vec2;
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use crate::config::CollisionMetric;

/// Candidate positions tried before falling back.
pub const MAX_ATTEMPTS: usize = 10;
/// Extra gap required between two bounding circles. Not affected by the size scale.
pub const CLEARANCE_BUFFER: f32 = 12.0;

/// A successfully placed bounding circle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedShape {
    pub center: Vec2,
    pub bounding_radius: f32,
}

/// How a position was obtained.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Accepted on the given 1-based attempt; clearance holds against all prior shapes.
    Clear { attempt: usize },
    /// Attempts exhausted; the position carries no clearance guarantee.
    Fallback,
}

impl PlacementOutcome {
    pub fn is_clear(self) -> bool {
        matches!(self, PlacementOutcome::Clear { .. })
    }
}

/// Result of a single placement request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    pub outcome: PlacementOutcome,
}

/// Shortest distance between `a` and `b` when the tile's opposite edges are joined.
pub fn toroidal_distance(a: Vec2, b: Vec2, tile_size: f32) -> f32 {
    let d = (a - b).abs();
    let wrapped = Vec2::new(d.x.min(tile_size - d.x), d.y.min(tile_size - d.y));
    wrapped.length()
}

/// Stateful placement engine for one generation pass.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    tile_size: f32,
    metric: CollisionMetric,
    max_attempts: usize,
    buffer: f32,
    placed: Vec<PlacedShape>,
}

impl PlacementEngine {
    /// Create an engine for a tile of side `tile_size` using planar distance.
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            metric: CollisionMetric::Planar,
            max_attempts: MAX_ATTEMPTS,
            buffer: CLEARANCE_BUFFER,
            placed: Vec::new(),
        }
    }

    /// Sets the distance metric used by the clearance test.
    pub fn with_metric(mut self, metric: CollisionMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets how many candidates are tried before falling back.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn metric(&self) -> CollisionMetric {
        self.metric
    }

    /// Shapes recorded so far in this pass.
    pub fn placed(&self) -> &[PlacedShape] {
        &self.placed
    }

    /// Forget every placed shape. Called at the start of each pass.
    pub fn reset(&mut self) {
        self.placed.clear();
    }

    /// Distance between two centers under the configured metric.
    pub fn distance(&self, a: Vec2, b: Vec2) -> f32 {
        match self.metric {
            CollisionMetric::Planar => a.distance(b),
            CollisionMetric::Toroidal => toroidal_distance(a, b, self.tile_size),
        }
    }

    /// True when a circle at `center` with `radius` clears every placed shape.
    pub fn is_clear(&self, center: Vec2, radius: f32) -> bool {
        self.placed.iter().all(|s| {
            self.distance(center, s.center) >= radius + s.bounding_radius + self.buffer
        })
    }

    /// Find a position for a circle of `radius`, recording it when clearance holds.
    pub fn place(&mut self, radius: f32, rng: &mut dyn RngCore) -> Placement {
        let w = self.tile_size;
        let half = w / 2.0;
        let (lo, hi) = (radius.min(half), (w - radius).max(half));
        for attempt in 1..=self.max_attempts {
            let candidate = Vec2::new(rng.random_range(lo..=hi), rng.random_range(lo..=hi));
            if self.is_clear(candidate, radius) {
                self.placed.push(PlacedShape {
                    center: candidate,
                    bounding_radius: radius,
                });
                debug!(
                    "Placed r={:.1} at ({:.1}, {:.1}) on attempt {}.",
                    radius, candidate.x, candidate.y, attempt
                );
                return Placement {
                    position: candidate,
                    outcome: PlacementOutcome::Clear { attempt },
                };
            }
        }

        let position = Vec2::new(rng.random_range(0.0..=w), rng.random_range(0.0..=w));
        warn!(
            "No clear spot for r={:.1} after {} attempts; using unchecked ({:.1}, {:.1}).",
            radius, self.max_attempts, position.x, position.y
        );
        Placement {
            position,
            outcome: PlacementOutcome::Fallback,
        }
    }
}

/// Place a circle of `radius` against `existing` using planar distance, appending it on success.
pub fn place(
    radius: f32,
    existing: &mut Vec<PlacedShape>,
    tile_size: f32,
    rng: &mut dyn RngCore,
) -> Vec2 {
    let mut engine = PlacementEngine::new(tile_size);
    engine.placed = std::mem::take(existing);
    let placement = engine.place(radius, rng);
    *existing = engine.placed;
    placement.position
}
