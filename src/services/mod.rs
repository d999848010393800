//! Collaborators the task list talks to but does not implement.
//!
//! The list never mutates todos itself: completion toggles and deletions are
//! requests to a [`TodoStore`], reminders go through a
//! [`NotificationScheduler`]. Both are async traits so the UI can hand the
//! calls to background tasks.

pub mod notifications;
pub mod store;

use anyhow::Result;
use async_trait::async_trait;

use crate::entities::Todo;

pub use notifications::{ReminderError, ReminderScheduler};

/// Persistence side of the todo list
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persist an updated todo
    async fn update_todo(&self, todo: Todo) -> Result<()>;

    /// Remove a todo permanently
    async fn delete_todo(&self, todo: Todo) -> Result<()>;
}

/// A reminder request for a single todo
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub title: String,
    pub message: String,
    pub time: String,
    pub todo: Todo,
}

impl Reminder {
    /// Reminder carrying the todo's title, description and time
    pub fn for_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            message: todo.description.clone(),
            time: todo.time.clone(),
            todo: todo.clone(),
        }
    }
}

/// Reminder side of the todo list
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Schedule (or reschedule) a reminder for `reminder.todo`
    async fn schedule_notification(&self, reminder: Reminder) -> Result<()>;

    /// Cancel any pending reminder for `todo`
    async fn cancel_notification(&self, todo: &Todo) -> Result<()>;
}
