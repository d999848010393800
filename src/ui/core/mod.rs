//! Core UI functionality for Tasky.
//!
//! This module contains the building blocks every UI component relies on.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling (keys, mouse, resize, ticks)
//! - [`task_manager`] - Background operations reporting back as actions
//!
//! Components turn input into [`Action`]s, actions flow down the component
//! hierarchy through [`Component::update`], and whatever is left over is
//! handled by the application shell, which may spawn background work through
//! the [`TaskManager`].

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskResult};
