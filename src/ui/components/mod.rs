//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use task_list_component::{ListRow, TaskListComponent};
