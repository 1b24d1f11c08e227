//! Tile composition: one full generation pass from palette to wrapped draw calls.
//!
//! A pass clears placement state, deals the palette, picks the active families, and then
//! walks [`ShapeFamily::DRAW_ORDER`] placing and drawing every instance. Each instance is
//! drawn at all nine offsets of [`wrap::wrap_offsets`], shadow first, so the finished tile
//! repeats without seams.
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::events::{EventSink, TileEvent};
use crate::palette::{Color, Palette, RoleColors, SHADOW_COLOR};
use crate::placement::{Placement, PlacementEngine};
use crate::render::{
    Pose, Renderer, Stroke, FILLED_OUTLINE_WIDTH, OUTLINE_ONLY_WIDTH, SHADOW_OFFSET,
};
use crate::sampling::{chance, uniform_half_open};
use crate::shape::sample::{sample_geometry, sample_instance_count};
use crate::shape::{ShapeFamily, ShapeGeometry};

pub mod wrap;

use wrap::{dot_grid_centers, wrap_offsets, DOT_DIAMETER_RANGE, DOT_SPACING};

/// Lifecycle of a composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Idle,
    Generating,
}

/// How a shape body is painted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeStyle {
    /// Flat fill in the family color with a thin dark outline.
    Filled,
    /// Stroke only, in the family color.
    Outline { width: f32 },
}

/// One shape instance as placed and drawn in a pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub family: ShapeFamily,
    /// Index within its family.
    pub index: usize,
    pub geometry: ShapeGeometry,
    pub bounding_radius: f32,
    pub placement: Placement,
    pub rotation_deg: f32,
    pub color: Color,
    pub style: ShapeStyle,
}

impl ShapeInstance {
    /// Pose of the home copy (offset zero).
    pub fn pose(&self) -> Pose {
        Pose::new(self.placement.position, self.rotation_deg)
    }
}

/// Summary of a finished pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct TileReport {
    pub tile_size: f32,
    pub colors: RoleColors,
    /// Active families with instance counts, in draw order.
    pub families: Vec<(ShapeFamily, usize)>,
    /// Diameter of the background grid dots.
    pub dot_diameter: f32,
    /// Every shape instance in draw order.
    pub shapes: Vec<ShapeInstance>,
}

impl TileReport {
    pub fn active_families(&self) -> Vec<ShapeFamily> {
        self.families.iter().map(|(f, _)| *f).collect()
    }

    /// Instances whose placement ran out of attempts.
    pub fn fallback_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| !s.placement.outcome.is_clear())
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.shapes.len() - self.fallback_count()
    }
}

/// Runs generation passes against a palette, driving a [`Renderer`].
#[derive(Debug, Clone)]
pub struct TileComposer {
    palette: Palette,
    engine: PlacementEngine,
    state: ComposerState,
}

impl TileComposer {
    /// Create a composer, checking that the palette can color every family at once.
    pub fn try_new(palette: Palette) -> Result<Self> {
        palette.ensure_capacity(ShapeFamily::ALL.len())?;
        Ok(Self::new(palette))
    }

    pub fn new(palette: Palette) -> Self {
        debug_assert!(
            palette.ensure_capacity(ShapeFamily::ALL.len()).is_ok(),
            "palette must cover every family plus background and dots"
        );
        Self {
            palette,
            engine: PlacementEngine::new(0.0),
            state: ComposerState::Idle,
        }
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Placement state of the most recent pass.
    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Run one pass.
    pub fn generate<R: RngCore>(
        &mut self,
        config: &GenerationConfig,
        rng: &mut R,
        renderer: &mut dyn Renderer,
    ) -> TileReport {
        self.generate_with_events(config, rng, renderer, &mut ())
    }

    /// Run one pass, reporting progress to `sink`.
    pub fn generate_with_events<R: RngCore>(
        &mut self,
        config: &GenerationConfig,
        rng: &mut R,
        renderer: &mut dyn Renderer,
        sink: &mut dyn EventSink,
    ) -> TileReport {
        debug_assert_eq!(self.state, ComposerState::Idle, "passes must not nest");
        debug_assert!(config.validate().is_ok(), "invalid generation config");

        self.state = ComposerState::Generating;
        self.engine =
            PlacementEngine::new(config.tile_size).with_metric(config.collision_metric);
        sink.send(TileEvent::PassStarted {
            config: config.clone(),
        });

        let mut deck = self.palette.deal(rng);
        let background = deck
            .pop()
            .expect("palette capacity checked at construction");
        let dots = deck
            .pop()
            .expect("palette capacity checked at construction");

        let mut active = ShapeFamily::ALL.to_vec();
        active.shuffle(rng);
        active.truncate(config.count_mode.family_count());
        active.sort_by_key(|f| f.draw_rank());

        let mut family_colors = Vec::with_capacity(active.len());
        for &family in &active {
            let color = deck
                .pop()
                .expect("palette capacity checked at construction");
            family_colors.push((family, color));
        }
        let colors = RoleColors {
            background,
            dots,
            families: family_colors,
        };
        sink.send(TileEvent::RolesAssigned {
            colors: colors.clone(),
        });

        let families: Vec<(ShapeFamily, usize)> = active
            .iter()
            .map(|&f| (f, sample_instance_count(f, rng)))
            .collect();
        sink.send(TileEvent::FamiliesSelected {
            families: families.clone(),
        });
        info!(
            "Generating tile | size: {} | scale: {} | families: {:?}.",
            config.tile_size, config.size_scale, families
        );

        renderer.begin(config.tile_size, colors.background);
        let dot_diameter = uniform_half_open(rng, DOT_DIAMETER_RANGE.0, DOT_DIAMETER_RANGE.1);
        draw_dot_grid(renderer, config.tile_size, dot_diameter, colors.dots);

        let mut shapes = Vec::new();
        for (family_idx, &(family, count)) in families.iter().enumerate() {
            let color = colors.families[family_idx].1;
            for index in 0..count {
                let shape = self.compose_instance(family, index, color, config, rng);
                if shape.placement.outcome.is_clear() {
                    sink.send(TileEvent::ShapePlaced {
                        family,
                        index,
                        position: shape.placement.position,
                        bounding_radius: shape.bounding_radius,
                    });
                } else {
                    sink.send(TileEvent::PlacementExhausted {
                        family,
                        index,
                        position: shape.placement.position,
                        bounding_radius: shape.bounding_radius,
                    });
                }
                draw_wrapped(renderer, &shape, config.tile_size);
                shapes.push(shape);
            }
        }
        renderer.finish();

        let report = TileReport {
            tile_size: config.tile_size,
            colors,
            families,
            dot_diameter,
            shapes,
        };
        let fallbacks = report.fallback_count();
        if fallbacks > 0 {
            warn!(
                "{} of {} shapes were placed without clearance.",
                fallbacks,
                report.shapes.len()
            );
            sink.send(TileEvent::Warning {
                context: "placement".into(),
                message: format!("{fallbacks} shapes placed without clearance"),
            });
        }
        info!(
            "Tile finished | shapes: {} | fallbacks: {}.",
            report.shapes.len(),
            fallbacks
        );
        sink.send(TileEvent::PassFinished {
            report: report.clone(),
        });

        self.state = ComposerState::Idle;
        report
    }

    fn compose_instance(
        &mut self,
        family: ShapeFamily,
        index: usize,
        color: Color,
        config: &GenerationConfig,
        rng: &mut dyn RngCore,
    ) -> ShapeInstance {
        let descriptor = family.descriptor();
        let geometry = sample_geometry(family, rng, config.size_scale.multiplier());
        let bounding_radius = geometry.bounding_radius();
        let placement = self.engine.place(bounding_radius, rng);
        let rotation_deg = uniform_half_open(rng, 0.0, 360.0);

        let style = if let Some(width) = geometry.line_width() {
            ShapeStyle::Outline { width }
        } else if !descriptor.supports_fill || chance(rng, config.fill_probability) {
            ShapeStyle::Filled
        } else {
            ShapeStyle::Outline {
                width: OUTLINE_ONLY_WIDTH,
            }
        };

        debug!(
            "{} #{} r={:.1} at ({:.1}, {:.1}) {:?}.",
            family,
            index,
            bounding_radius,
            placement.position.x,
            placement.position.y,
            style
        );

        ShapeInstance {
            family,
            index,
            geometry,
            bounding_radius,
            placement,
            rotation_deg,
            color,
            style,
        }
    }
}

/// Draw `shape` with its shadow at every toroidal offset.
pub fn draw_wrapped(renderer: &mut dyn Renderer, shape: &ShapeInstance, tile_size: f32) {
    let home = shape.pose();
    for offset in wrap_offsets(tile_size) {
        let pose = home.translated(offset);
        renderer.draw_shadow(&shape.geometry, pose, SHADOW_OFFSET, SHADOW_COLOR);
        match shape.style {
            ShapeStyle::Filled => renderer.draw_filled(
                &shape.geometry,
                pose,
                shape.color,
                Stroke::new(SHADOW_COLOR, FILLED_OUTLINE_WIDTH),
            ),
            ShapeStyle::Outline { width } => {
                renderer.draw_outline(&shape.geometry, pose, Stroke::new(shape.color, width))
            }
        }
    }
}

fn draw_dot_grid(renderer: &mut dyn Renderer, tile_size: f32, diameter: f32, color: Color) {
    let offsets = wrap_offsets(tile_size);
    for center in dot_grid_centers(tile_size, DOT_SPACING) {
        for offset in offsets {
            renderer.draw_dot(center + offset, diameter, color);
        }
    }
}

/// Centers of every copy drawn for a shape at `position`.
pub fn wrapped_centers(position: Vec2, tile_size: f32) -> [Vec2; 9] {
    wrap_offsets(tile_size).map(|o| position + o)
}
