//! Applying swipe intents to the collaborators.

use anyhow::Result;

use crate::entities::Todo;
use crate::services::{NotificationScheduler, Reminder, TodoStore};

/// Flip a todo's completion flag and keep its reminder in step.
///
/// A todo that ends up completed gets its reminder (re)scheduled with its
/// title, description and time; one that ends up incomplete has any pending
/// reminder cancelled. Returns the updated todo.
pub async fn toggle_completion(
    todo: &Todo,
    store: &dyn TodoStore,
    notifier: &dyn NotificationScheduler,
) -> Result<Todo> {
    let updated = todo.toggled();
    store.update_todo(updated.clone()).await?;

    if updated.is_completed {
        notifier.schedule_notification(Reminder::for_todo(&updated)).await?;
    } else {
        notifier.cancel_notification(&updated).await?;
    }

    Ok(updated)
}

/// Delete a todo whose removal was confirmed
pub async fn delete_todo(todo: &Todo, store: &dyn TodoStore) -> Result<()> {
    store.delete_todo(todo.clone()).await
}
