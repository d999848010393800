//! SeaORM entity models

pub mod todo;

/// A single to-do item as stored and displayed
pub type Todo = todo::Model;

/// Stable identifier of a todo
pub type TodoId = uuid::Uuid;

pub use todo::Entity as TodoEntity;
