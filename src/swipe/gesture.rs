//! Recognition of horizontal swipes from terminal input.
//!
//! Two input sources drive the same gesture model:
//!
//! - **Pointer**: press on a row, drag horizontally, release. The gesture
//!   completes when released past the distance threshold or with enough
//!   velocity in the dragged direction.
//! - **Keys**: each nudge moves the row by a fixed step. Reaching the full row
//!   width completes immediately; otherwise the gesture is released after a
//!   short pause with no further nudge.
//!
//! Offsets are signed fractions of the row width, negative to the left.

use std::time::{Duration, Instant};

use super::{GestureSignal, SwipeDirection};
use crate::config::SwipeConfig;

/// Thresholds used to decide whether a gesture completes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Fraction of the row width past which a release completes
    pub threshold: f32,
    /// Row widths per second past which a release completes regardless of distance
    pub velocity_threshold: f32,
    /// Fraction of the row width one key nudge moves
    pub key_step: f32,
    /// Pause after the last nudge before a key gesture is released
    pub settle_after: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&SwipeConfig::default())
    }
}

impl From<&SwipeConfig> for GestureConfig {
    fn from(config: &SwipeConfig) -> Self {
        Self {
            threshold: config.threshold,
            velocity_threshold: config.velocity_threshold,
            key_step: config.key_step,
            settle_after: Duration::from_millis(config.settle_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragSource {
    Pointer,
    Keys,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    source: DragSource,
    origin_column: u16,
    width: u16,
    offset: f32,
    velocity: f32,
    moved: bool,
    last_at: Instant,
}

/// Outcome of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureRelease {
    /// No horizontal movement: treat as a click on the row
    Click,
    /// The drag ended; pass the signal on to the row's controller
    Signal(GestureSignal),
    /// Nothing was being tracked
    Ignored,
}

/// Turns pointer and key input into [`GestureSignal`]s
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    config: GestureConfig,
    drag: Option<Drag>,
}

impl SwipeRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self { config, drag: None }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether a gesture is being tracked
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Signed offset of the tracked gesture, 0 when idle
    pub fn offset(&self) -> f32 {
        self.drag.map_or(0.0, |drag| drag.offset)
    }

    /// Pointer went down on a row `width` columns wide
    pub fn press(&mut self, column: u16, width: u16, now: Instant) {
        self.drag = Some(Drag {
            source: DragSource::Pointer,
            origin_column: column,
            width: width.max(1),
            offset: 0.0,
            velocity: 0.0,
            moved: false,
            last_at: now,
        });
    }

    /// Pointer moved while pressed
    pub fn drag_to(&mut self, column: u16, now: Instant) -> Option<GestureSignal> {
        let drag = self.drag.as_mut().filter(|drag| drag.source == DragSource::Pointer)?;

        let dx = column as f32 - drag.origin_column as f32;
        if dx.abs() > 1.0 {
            drag.moved = true;
        }
        let offset = (dx / drag.width as f32).clamp(-1.0, 1.0);

        if offset != drag.offset {
            let elapsed = now.saturating_duration_since(drag.last_at).as_secs_f32();
            if elapsed > 0.0 {
                drag.velocity = (offset - drag.offset) / elapsed;
            }
            drag.offset = offset;
            drag.last_at = now;
        }

        let offset = drag.offset;
        Some(self.progress(offset))
    }

    /// Pointer went up
    pub fn release(&mut self, column: u16, now: Instant) -> GestureRelease {
        if self.drag.is_some_and(|drag| drag.source == DragSource::Pointer) {
            self.drag_to(column, now);
        }

        match self.drag.take() {
            Some(drag) if drag.source == DragSource::Pointer && !drag.moved => GestureRelease::Click,
            Some(drag) if drag.source == DragSource::Pointer => {
                GestureRelease::Signal(self.settle_or_cancel(drag.offset, drag.velocity))
            }
            Some(drag) => {
                // A key gesture is still pending; the pointer does not own it
                self.drag = Some(drag);
                GestureRelease::Ignored
            }
            None => GestureRelease::Ignored,
        }
    }

    /// Move the row one key step in `direction`
    pub fn nudge(&mut self, direction: SwipeDirection, now: Instant) -> Option<GestureSignal> {
        let step = self.config.key_step * direction.sign();
        let drag = self.drag.get_or_insert(Drag {
            source: DragSource::Keys,
            origin_column: 0,
            width: 1,
            offset: 0.0,
            velocity: 0.0,
            moved: true,
            last_at: now,
        });
        if drag.source != DragSource::Keys {
            return None;
        }

        drag.offset = (drag.offset + step).clamp(-1.0, 1.0);
        drag.last_at = now;
        let offset = drag.offset;

        if offset.abs() >= 1.0 {
            self.drag = None;
            return Some(GestureSignal::Settled(SwipeDirection::from_offset(offset)));
        }
        if offset == 0.0 {
            self.drag = None;
            return Some(GestureSignal::Cancelled);
        }
        Some(self.progress(offset))
    }

    /// Periodic check releasing key gestures after a pause
    pub fn tick(&mut self, now: Instant) -> Option<GestureSignal> {
        let drag = self.drag.filter(|drag| drag.source == DragSource::Keys)?;
        if now.saturating_duration_since(drag.last_at) < self.config.settle_after {
            return None;
        }

        self.drag = None;
        Some(self.settle_or_cancel(drag.offset, 0.0))
    }

    /// Abandon the tracked gesture
    pub fn cancel(&mut self) -> Option<GestureSignal> {
        self.drag.take().map(|_| GestureSignal::Cancelled)
    }

    fn progress(&self, offset: f32) -> GestureSignal {
        let threshold = self.config.threshold.max(f32::EPSILON);
        GestureSignal::Progress {
            direction: SwipeDirection::from_offset(offset),
            progress: (offset.abs() / threshold).min(1.0),
        }
    }

    fn settle_or_cancel(&self, offset: f32, velocity: f32) -> GestureSignal {
        let past_threshold = offset != 0.0 && offset.abs() >= self.config.threshold;
        let flung = offset != 0.0
            && velocity.signum() == offset.signum()
            && velocity.abs() >= self.config.velocity_threshold;

        if past_threshold || flung {
            GestureSignal::Settled(SwipeDirection::from_offset(offset))
        } else {
            GestureSignal::Cancelled
        }
    }
}
