//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "tasky";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "tasky.toml";
pub const LOG_FILE_NAME: &str = "tasky.log";

// Delete confirmation prompt
pub const DELETE_DIALOG_TITLE: &str = "Delete Task?";
pub const DELETE_DIALOG_MESSAGE: &str = "Do you want to delete this task?";
pub const DELETE_CONFIRM_TEXT: &str = "Delete";
pub const DELETE_DISMISS_TEXT: &str = "Cancel";

// Success Messages
pub const SUCCESS_TODO_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TODO_REOPENED: &str = "✅ Task marked as not done";
pub const SUCCESS_TODO_DELETED: &str = "✅ Task deleted";

// Error Messages
pub const ERROR_TODO_UPDATE_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TODO_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_LOAD_FAILED: &str = "❌ Failed to load tasks";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Import some with `tasky --import todos.json`.";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_HINT: &str = "j/k move • Enter open • h/l swipe • ? help • q quit";
