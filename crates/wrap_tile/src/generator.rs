//! Caller-facing facade: owns configuration, randomness and a composer.
//!
//! Setters accept free-form strings and normalize anything unrecognized to the default
//! value instead of failing. Both setters and passes take `&mut self`, so configuration
//! can never change while a pass runs.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::warn;

use crate::compose::{TileComposer, TileReport};
use crate::config::{CountMode, GenerationConfig, SizeScale};
use crate::error::Result;
use crate::events::EventSink;
use crate::palette::Palette;
use crate::render::Renderer;

pub struct TileGenerator<R: RngCore = StdRng> {
    config: GenerationConfig,
    composer: TileComposer,
    rng: R,
}

impl TileGenerator<StdRng> {
    /// Generator with the default config and palette, seeded for reproducibility.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            config: GenerationConfig::default(),
            composer: TileComposer::new(Palette::vibrant()),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> TileGenerator<R> {
    /// Generator over a caller-provided random source.
    pub fn try_new(config: GenerationConfig, palette: Palette, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            composer: TileComposer::try_new(palette)?,
            rng,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it.
    pub fn set_config(&mut self, config: GenerationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Set the size scale from `small`, `medium` or `large`; anything else selects the default.
    pub fn set_size_scale(&mut self, value: &str) -> SizeScale {
        let scale = value.parse::<SizeScale>().unwrap_or_else(|e| {
            warn!("{e}; using {}.", SizeScale::default());
            SizeScale::default()
        });
        self.config.size_scale = scale;
        scale
    }

    /// Set the count mode from `fewer`, `usual` or `many`; anything else selects the default.
    pub fn set_shape_count_mode(&mut self, value: &str) -> CountMode {
        let mode = value.parse::<CountMode>().unwrap_or_else(|e| {
            warn!("{e}; using {}.", CountMode::default());
            CountMode::default()
        });
        self.config.count_mode = mode;
        mode
    }

    /// Run a fresh pass with the current configuration.
    pub fn trigger_regeneration(&mut self, renderer: &mut dyn Renderer) -> TileReport {
        self.composer.generate(&self.config, &mut self.rng, renderer)
    }

    pub fn trigger_regeneration_with_events(
        &mut self,
        renderer: &mut dyn Renderer,
        sink: &mut dyn EventSink,
    ) -> TileReport {
        self.composer
            .generate_with_events(&self.config, &mut self.rng, renderer, sink)
    }
}
