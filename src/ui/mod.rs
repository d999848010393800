//! UI module for tasky
//!
//! This module handles the terminal interface: the grouped task list, its
//! dialogs, and the event loop that drives them.

pub mod app;
pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;

pub use app::run_app;
pub use app_component::{AppComponent, AppState};
pub use layout::LayoutManager;
