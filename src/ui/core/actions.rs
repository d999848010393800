use crate::entities::{Todo, TodoId};
use crate::services::Reminder;
use crate::swipe::GestureSignal;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTodo,
    PreviousTodo,
    /// A row was activated; carries the todo's index in the ungrouped list
    OpenTodo(usize),

    // Swipe handling
    Swipe {
        id: TodoId,
        signal: GestureSignal,
    },
    ConfirmDelete(TodoId),
    DismissDelete(TodoId),
    ScheduleReset(TodoId),
    ResetSwipe(TodoId),

    // Todo operations
    ToggleTodo(Todo),
    /// The store write for a toggle is over; the row accepts gestures again
    ToggleFinished { id: TodoId, succeeded: bool },
    DeleteTodo(Todo),
    /// The store refused a confirmed delete; the row stays in the list
    DeleteFailed(TodoId),

    // Data
    RefreshData,
    DataLoaded(Vec<Todo>),
    ReminderFired(Reminder),

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation { todo_id: TodoId, title: String },
    TodoDetails { index: usize, todo: Todo },
    Error(String),
    Info(String),
    Help,
    Logs,
}
