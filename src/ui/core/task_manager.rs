use super::actions::{Action, DialogType};
use crate::constants::ERROR_LOAD_FAILED;
use crate::entities::TodoId;
use crate::storage::LocalStorage;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<anyhow::Result<TaskResult>>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    TodoOperationCompleted(String),
    DataLoadCompleted(usize),
    SwipeReset(TodoId),
    Failed(String),
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<anyhow::Result<TaskResult>>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Spawn a background todo operation (toggle, delete).
    ///
    /// `on_finish(succeeded)` is sent once the operation is over, then a data
    /// refresh. Failure is also reported in the error dialog and is not retried.
    pub fn spawn_todo_operation<F, Fut, R>(&mut self, operation: F, description: String, on_finish: R) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<String>> + Send + 'static,
        R: FnOnce(bool) -> Action + Send + 'static,
    {
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            let result = operation().await;
            let succeeded = result.is_ok();

            let task_result = match result {
                Ok(message) => {
                    log::info!("{}", message);
                    TaskResult::TodoOperationCompleted(message)
                }
                Err(e) => {
                    let error_msg = format!("{}: {:#}", desc_for_task, e);
                    log::warn!("{}", error_msg);
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(error_msg.clone())));
                    TaskResult::Failed(error_msg)
                }
            };

            match on_finish(succeeded) {
                Action::None => {}
                follow_up => {
                    let _ = action_sender.send(follow_up);
                }
            }
            // Pick up the store's view of the list
            let _ = action_sender.send(Action::RefreshData);
            Ok(task_result)
        });

        self.track(handle, description)
    }

    /// Spawn a background load of the whole todo list
    pub fn spawn_data_load(&mut self, storage: LocalStorage) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match storage.get_todos().await {
                Ok(todos) => {
                    let count = todos.len();
                    let _ = action_sender.send(Action::DataLoaded(todos));
                    Ok(TaskResult::DataLoadCompleted(count))
                }
                Err(e) => {
                    let error_msg = format!("{}: {:#}", ERROR_LOAD_FAILED, e);
                    log::warn!("{}", error_msg);
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(error_msg.clone())));
                    Ok(TaskResult::Failed(error_msg))
                }
            }
        });

        self.track(handle, "Loading todos from storage".to_string())
    }

    /// Send [`Action::ResetSwipe`] for `id` after `delay`, unless cancelled first
    pub fn spawn_swipe_reset(&mut self, id: TodoId, delay: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(Action::ResetSwipe(id));
            Ok(TaskResult::SwipeReset(id))
        });

        self.track(handle, format!("Swipe reset for {}", id))
    }

    /// Abort a task. Returns false when it already finished or never existed.
    pub fn cancel_task(&mut self, task_id: TaskId) -> bool {
        match self.tasks.remove(&task_id) {
            Some(task) if !task.handle.is_finished() => {
                task.handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| {
                // The result was already sent via the action channel
                self.tasks.remove(&task_id).map(|task| (task_id, task.description))
            })
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
