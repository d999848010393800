use std::collections::{HashMap, HashSet};

use super::controller::{SwipeController, SwipePhase};
use super::visual::SwipeVisual;
use crate::entities::TodoId;

/// Swipe controllers keyed by todo id, so row state follows the todo rather
/// than its position in the list
#[derive(Debug, Default)]
pub struct SwipeRegistry {
    controllers: HashMap<TodoId, SwipeController>,
}

impl SwipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &TodoId) -> Option<&SwipeController> {
        self.controllers.get(id)
    }

    /// Controller for `id`, created idle on first use
    pub fn controller(&mut self, id: TodoId) -> &mut SwipeController {
        self.controllers
            .entry(id)
            .or_insert_with(|| SwipeController::new(id))
    }

    pub fn phase(&self, id: &TodoId) -> SwipePhase {
        self.get(id).map_or(SwipePhase::Idle, SwipeController::phase)
    }

    pub fn visual(&self, id: &TodoId) -> SwipeVisual {
        self.get(id).map_or(SwipeVisual::NEUTRAL, SwipeController::visual)
    }

    /// The row currently asking for delete confirmation, if any
    pub fn confirming(&self) -> Option<TodoId> {
        self.controllers
            .values()
            .find(|controller| controller.is_confirming_delete())
            .map(SwipeController::todo_id)
    }

    /// Drop the controllers of todos no longer in the list.
    ///
    /// Returns the ids that were dropped.
    pub fn retain<I>(&mut self, ids: I) -> Vec<TodoId>
    where
        I: IntoIterator<Item = TodoId>,
    {
        let live: HashSet<TodoId> = ids.into_iter().collect();
        let gone: Vec<TodoId> = self
            .controllers
            .keys()
            .filter(|id| !live.contains(id))
            .copied()
            .collect();
        for id in &gone {
            self.controllers.remove(id);
        }
        gone
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<SwipeController> {
        self.controllers.remove(id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
