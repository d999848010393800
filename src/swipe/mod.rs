//! Swipe handling for task rows.
//!
//! A horizontal swipe on a row carries one of two intents: leftward
//! ([`SwipeDirection::EndToStart`]) asks to delete the todo, rightward
//! ([`SwipeDirection::StartToEnd`]) toggles its completion.
//!
//! The pieces:
//!
//! - [`gesture::SwipeRecognizer`] turns raw pointer/keyboard input into
//!   [`GestureSignal`]s and owns the distance and velocity thresholds
//! - [`controller::SwipeController`] is the per-row state machine driven only
//!   by those signals
//! - [`registry::SwipeRegistry`] keeps one controller per todo id
//! - [`effects`] applies the resulting intents to the store and reminder
//!   collaborators
//! - [`visual::SwipeVisual`] describes how a row looks in each phase

pub mod controller;
pub mod effects;
pub mod gesture;
pub mod registry;
pub mod visual;

pub use controller::{SwipeController, SwipeIntent, SwipePhase};
pub use gesture::{GestureConfig, GestureRelease, SwipeRecognizer};
pub use registry::SwipeRegistry;
pub use visual::{IconAlignment, SwipeIcon, SwipeTint, SwipeVisual};

/// Horizontal direction of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Right to left, delete intent
    EndToStart,
    /// Left to right, toggle-complete intent
    StartToEnd,
}

impl SwipeDirection {
    /// Direction of a signed horizontal offset (negative is leftward)
    pub fn from_offset(offset: f32) -> Self {
        if offset < 0.0 {
            SwipeDirection::EndToStart
        } else {
            SwipeDirection::StartToEnd
        }
    }

    /// Sign of offsets moving in this direction
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::EndToStart => -1.0,
            SwipeDirection::StartToEnd => 1.0,
        }
    }
}

/// What the gesture recognizer reports to a row's controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSignal {
    /// The row is being dragged; `progress` is the fraction of the dismiss
    /// threshold reached, in `0.0..=1.0`
    Progress { direction: SwipeDirection, progress: f32 },
    /// The gesture passed the threshold and completed
    Settled(SwipeDirection),
    /// The gesture ended without completing
    Cancelled,
}
