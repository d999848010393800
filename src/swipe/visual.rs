use super::controller::SwipePhase;
use super::SwipeDirection;

/// Icon size when no gesture is tracked
pub const ICON_SCALE_MIN: f32 = 0.5;
/// Icon size once the gesture reaches its threshold
pub const ICON_SCALE_MAX: f32 = 1.3;

/// Background tint behind a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeTint {
    Neutral,
    /// Red
    Delete,
    /// Green
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIcon {
    Trash,
    Check,
}

/// Side of the row the icon sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAlignment {
    Start,
    End,
}

/// How a row's swipe background looks right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeVisual {
    pub tint: SwipeTint,
    pub icon: SwipeIcon,
    pub alignment: IconAlignment,
    pub icon_scale: f32,
    /// Signed fraction of the row width the content is shifted by
    pub offset: f32,
}

impl SwipeVisual {
    pub const NEUTRAL: SwipeVisual = SwipeVisual {
        tint: SwipeTint::Neutral,
        icon: SwipeIcon::Trash,
        alignment: IconAlignment::End,
        icon_scale: ICON_SCALE_MIN,
        offset: 0.0,
    };

    pub fn for_phase(phase: SwipePhase) -> Self {
        match phase {
            SwipePhase::Idle => Self::NEUTRAL,
            SwipePhase::Tracking { progress, .. } if progress <= 0.0 => Self::NEUTRAL,
            SwipePhase::Tracking { direction, progress } => Self::towards(direction, progress),
            SwipePhase::PendingDelete { .. } | SwipePhase::Removed => Self::towards(SwipeDirection::EndToStart, 1.0),
            SwipePhase::PendingToggle => Self::towards(SwipeDirection::StartToEnd, 1.0),
        }
    }

    fn towards(direction: SwipeDirection, progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let (tint, icon, alignment) = match direction {
            SwipeDirection::EndToStart => (SwipeTint::Delete, SwipeIcon::Trash, IconAlignment::End),
            SwipeDirection::StartToEnd => (SwipeTint::Complete, SwipeIcon::Check, IconAlignment::Start),
        };

        Self {
            tint,
            icon,
            alignment,
            icon_scale: if progress >= 1.0 {
                ICON_SCALE_MAX
            } else {
                ICON_SCALE_MIN + (ICON_SCALE_MAX - ICON_SCALE_MIN) * progress
            },
            offset: direction.sign() * progress,
        }
    }

    /// Whether the icon has grown to its full size
    pub fn is_full_size(&self) -> bool {
        self.icon_scale >= ICON_SCALE_MAX
    }
}
