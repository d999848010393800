//! In-process reminder timers.
//!
//! Each scheduled todo gets one tokio timer. When it fires, the reminder is
//! sent on a channel; delivering it to the user (status bar, desktop
//! notification) is up to whoever owns the receiver.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{NotificationScheduler, Reminder};
use crate::entities::{Todo, TodoId};
use crate::utils::datetime;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReminderError {
    #[error("invalid reminder date '{date}' for todo '{title}'")]
    InvalidDate { title: String, date: String },
    #[error("invalid reminder time '{time}' for todo '{title}'")]
    InvalidTime { title: String, time: String },
}

/// Tokio-timer backed [`NotificationScheduler`]
#[derive(Clone)]
pub struct ReminderScheduler {
    pending: Arc<Mutex<HashMap<TodoId, JoinHandle<()>>>>,
    sender: mpsc::UnboundedSender<Reminder>,
    enabled: bool,
}

impl ReminderScheduler {
    /// Create a scheduler and the receiver fired reminders arrive on
    pub fn new(enabled: bool) -> (Self, mpsc::UnboundedReceiver<Reminder>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                pending: Arc::new(Mutex::new(HashMap::new())),
                sender: tx,
                enabled,
            },
            rx,
        )
    }

    /// How long until `reminder` should fire, seen from `now`.
    ///
    /// Returns `Ok(None)` when the reminder's moment has already passed.
    pub fn fire_delay(reminder: &Reminder, now: DateTime<Local>) -> Result<Option<std::time::Duration>, ReminderError> {
        let date = datetime::parse_todo_date(&reminder.todo.date).map_err(|_| ReminderError::InvalidDate {
            title: reminder.title.clone(),
            date: reminder.todo.date.clone(),
        })?;
        let time = datetime::parse_todo_time(&reminder.time).map_err(|_| ReminderError::InvalidTime {
            title: reminder.title.clone(),
            time: reminder.time.clone(),
        })?;

        let fire_at = datetime::to_local(date.and_time(time));
        Ok((fire_at - now).to_std().ok())
    }

    /// Whether a timer is still waiting for this todo
    pub fn is_pending(&self, id: &TodoId) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.get(id).is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }

    /// Number of timers still waiting
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .map(|pending| pending.values().filter(|handle| !handle.is_finished()).count())
            .unwrap_or(0)
    }

    fn abort_pending(&self, id: &TodoId) -> bool {
        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|_, handle| !handle.is_finished());
            if let Some(handle) = pending.remove(id) {
                handle.abort();
                return true;
            }
        }
        false
    }
}

#[async_trait]
impl NotificationScheduler for ReminderScheduler {
    async fn schedule_notification(&self, reminder: Reminder) -> Result<()> {
        if !self.enabled {
            log::debug!("Reminders disabled, not scheduling '{}'", reminder.title);
            return Ok(());
        }

        let id = reminder.todo.id;
        let delay = Self::fire_delay(&reminder, Local::now())?;

        // Rescheduling replaces whatever was pending
        self.abort_pending(&id);

        let Some(delay) = delay else {
            log::info!(
                "Reminder for '{}' at {} {} is in the past, skipping",
                reminder.title,
                reminder.todo.date,
                reminder.time
            );
            return Ok(());
        };

        log::info!("Scheduling reminder for '{}' in {}s", reminder.title, delay.as_secs());
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(reminder);
        });

        if let Ok(mut pending) = self.pending.lock() {
            pending.insert(id, handle);
        }
        Ok(())
    }

    async fn cancel_notification(&self, todo: &Todo) -> Result<()> {
        if self.abort_pending(&todo.id) {
            log::info!("Cancelled reminder for '{}'", todo.title);
        }
        Ok(())
    }
}
