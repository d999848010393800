//! Local storage module for todo persistence
//!
//! Todos live in a single SQLite table managed through SeaORM. The
//! [`LocalStorage`] handle is also the application's
//! [`TodoStore`](crate::services::TodoStore).

pub mod db;

pub use db::{ImportedTodo, LocalStorage};
