use super::visual::SwipeVisual;
use super::{GestureSignal, SwipeDirection};
use crate::entities::TodoId;

/// Where a row's swipe currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    Idle,
    /// A gesture is in progress
    Tracking { direction: SwipeDirection, progress: f32 },
    /// Swiped away to the start. `confirming` is true while the confirmation
    /// prompt is up; once dismissed the row waits for its reset.
    PendingDelete { confirming: bool },
    /// Swiped away to the end, waiting for the toggle to be applied
    PendingToggle,
    /// Deletion confirmed; the row goes away with the next data refresh
    Removed,
}

/// Requests a controller hands to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Show the delete confirmation prompt
    ConfirmDelete,
    /// Delete the todo
    Delete,
    /// Flip the todo's completion flag
    ToggleComplete,
    /// Bring the row back once the reset task runs
    ScheduleReset,
}

/// Per-row swipe state machine
#[derive(Debug, Clone)]
pub struct SwipeController {
    todo_id: TodoId,
    phase: SwipePhase,
}

impl SwipeController {
    pub fn new(todo_id: TodoId) -> Self {
        Self {
            todo_id,
            phase: SwipePhase::Idle,
        }
    }

    pub fn todo_id(&self) -> TodoId {
        self.todo_id
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SwipePhase::Idle
    }

    /// Whether the delete confirmation prompt should be showing for this row
    pub fn is_confirming_delete(&self) -> bool {
        self.phase == SwipePhase::PendingDelete { confirming: true }
    }

    /// Whether an intent raised by this row is still unresolved
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            SwipePhase::PendingDelete { .. } | SwipePhase::PendingToggle | SwipePhase::Removed
        )
    }

    /// Feed a gesture signal. Signals are ignored while the row is busy.
    pub fn handle(&mut self, signal: GestureSignal) -> Option<SwipeIntent> {
        if self.is_busy() {
            log::debug!("Swipe: ignoring {:?} on {} in {:?}", signal, self.todo_id, self.phase);
            return None;
        }

        match signal {
            GestureSignal::Progress { direction, progress } => {
                self.phase = SwipePhase::Tracking {
                    direction,
                    progress: progress.clamp(0.0, 1.0),
                };
                None
            }
            GestureSignal::Cancelled => {
                self.phase = SwipePhase::Idle;
                None
            }
            GestureSignal::Settled(SwipeDirection::EndToStart) => {
                self.phase = SwipePhase::PendingDelete { confirming: true };
                Some(SwipeIntent::ConfirmDelete)
            }
            GestureSignal::Settled(SwipeDirection::StartToEnd) => {
                self.phase = SwipePhase::PendingToggle;
                Some(SwipeIntent::ToggleComplete)
            }
        }
    }

    /// The user accepted the delete prompt
    pub fn confirm_delete(&mut self) -> Option<SwipeIntent> {
        if self.is_confirming_delete() {
            self.phase = SwipePhase::Removed;
            Some(SwipeIntent::Delete)
        } else {
            None
        }
    }

    /// The user dismissed the delete prompt
    pub fn dismiss_delete(&mut self) -> Option<SwipeIntent> {
        if self.is_confirming_delete() {
            self.phase = SwipePhase::PendingDelete { confirming: false };
            Some(SwipeIntent::ScheduleReset)
        } else {
            None
        }
    }

    /// Return to idle after a dismissed delete or an abandoned drag.
    ///
    /// Returns false (and changes nothing) in any other phase.
    pub fn reset(&mut self) -> bool {
        match self.phase {
            SwipePhase::PendingDelete { confirming: false } | SwipePhase::Tracking { .. } => {
                self.phase = SwipePhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// The store refused the confirmed delete. Only leaves `Removed`.
    pub fn delete_failed(&mut self) -> bool {
        if self.phase == SwipePhase::Removed {
            self.phase = SwipePhase::Idle;
            true
        } else {
            false
        }
    }

    /// The store has finished writing the completion toggle
    pub fn finish_toggle(&mut self) -> bool {
        if self.phase == SwipePhase::PendingToggle {
            self.phase = SwipePhase::Idle;
            true
        } else {
            false
        }
    }

    pub fn visual(&self) -> SwipeVisual {
        SwipeVisual::for_phase(self.phase)
    }
}
