//! Event types and sinks for observing generation passes.
//!
//! This module defines [`TileEvent`] and a set of sinks to emit, collect, or forward events
//! while [`crate::compose::TileComposer`] runs a pass.
use glam::Vec2;

use crate::compose::TileReport;
use crate::config::GenerationConfig;
use crate::palette::RoleColors;
use crate::shape::ShapeFamily;

/// Describes events emitted during a generation pass.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum TileEvent {
    /// Emitted when a pass starts, after placement state was cleared.
    PassStarted {
        /// Configuration read for this pass.
        config: GenerationConfig,
    },

    /// Emitted once colors were popped for every role.
    RolesAssigned {
        /// Colors for background, dots and each active family.
        colors: RoleColors,
    },

    /// Emitted after the active families and their instance counts were drawn.
    FamiliesSelected {
        /// Active families with instance counts, in draw order.
        families: Vec<(ShapeFamily, usize)>,
    },

    /// Emitted when a shape instance received a position with clearance.
    ShapePlaced {
        family: ShapeFamily,
        /// Index within the family.
        index: usize,
        position: Vec2,
        bounding_radius: f32,
    },

    /// Emitted when placement gave up and used an unchecked position.
    PlacementExhausted {
        family: ShapeFamily,
        index: usize,
        position: Vec2,
        bounding_radius: f32,
    },

    /// Emitted when the pass completes.
    PassFinished {
        /// Summary of the pass.
        report: TileReport,
    },

    /// Non-fatal warning.
    Warning {
        /// Context string (e.g. a family name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`TileEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: TileEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = TileEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: TileEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(TileEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(TileEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(TileEvent),
{
    #[inline]
    fn send(&mut self, event: TileEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<TileEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<TileEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[TileEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: TileEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_sinks(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: TileEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}
