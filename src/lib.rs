//! tasky - a terminal to-do list grouped by day
//!
//! Todos are shown newest day first under sticky date headers. Swiping a row
//! to the right toggles its completion (and schedules or cancels its
//! reminder); swiping to the left asks to delete it.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`grouping`] - Bucketing todos by calendar day
//! * [`swipe`] - Swipe gestures, per-row swipe state and their effects
//! * [`storage`] - Local database and data persistence
//! * [`services`] - Store and reminder collaborators
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Grouping todos into day buckets
pub mod grouping;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Store and reminder services used by the task list
pub mod services;

/// Local storage layer for todos
pub mod storage;

/// Swipe-to-complete and swipe-to-delete handling
pub mod swipe;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the core model for convenient access
pub use entities::{todo, Todo, TodoId};
