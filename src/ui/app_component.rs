use crate::config::Config;
use crate::constants::{
    ERROR_TODO_DELETE_FAILED, ERROR_TODO_UPDATE_FAILED, SUCCESS_TODO_COMPLETED, SUCCESS_TODO_DELETED,
    SUCCESS_TODO_REOPENED,
};
use crate::entities::{Todo, TodoId};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::services::{NotificationScheduler, Reminder, TodoStore};
use crate::storage::LocalStorage;
use crate::swipe::{effects, GestureConfig};
use crate::ui::components::{DialogComponent, StatusBar, StatusInfo, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Follow-up actions handled per dispatched action before giving up
const MAX_ACTION_CHAIN: usize = 8;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub loading: bool,
    pub status_message: Option<String>,
}

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    storage: LocalStorage,
    store: Arc<dyn TodoStore>,
    notifier: Arc<dyn NotificationScheduler>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    reminder_rx: Option<mpsc::UnboundedReceiver<Reminder>>,
    logger: Logger,

    // Swipe resets waiting to fire, by row
    pending_resets: HashMap<TodoId, TaskId>,
    reset_delay: Duration,
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        config: &Config,
        storage: LocalStorage,
        notifier: Arc<dyn NotificationScheduler>,
        logger: Logger,
    ) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let task_list = TaskListComponent::new(
            config.display.clone(),
            GestureConfig::from(&config.swipe),
            icons.clone(),
        );

        let mut dialog = DialogComponent::new();
        dialog.icons = icons;
        dialog.display_config = config.display.clone();
        dialog.set_logger(logger.clone());

        let (task_manager, background_action_rx) = TaskManager::new();
        let store: Arc<dyn TodoStore> = Arc::new(storage.clone());

        Self {
            task_list,
            dialog,
            state: AppState {
                loading: true,
                ..Default::default()
            },
            storage,
            store,
            notifier,
            task_manager,
            background_action_rx,
            reminder_rx: None,
            logger,
            pending_resets: HashMap::new(),
            reset_delay: Duration::from_millis(config.swipe.reset_delay_ms),
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        }
    }

    /// Show reminders arriving on `reminder_rx` as they fire
    pub fn with_reminders(mut self, reminder_rx: mpsc::UnboundedReceiver<Reminder>) -> Self {
        self.reminder_rx = Some(reminder_rx);
        self
    }

    /// Use a different store for toggles and deletions
    pub fn with_store(mut self, store: Arc<dyn TodoStore>) -> Self {
        self.store = store;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn pending_reset_count(&self) -> usize {
        self.pending_resets.len()
    }

    /// Load the todo list in the background
    pub fn load_data(&mut self) {
        self.state.loading = true;
        self.task_manager.spawn_data_load(self.storage.clone());
        self.logger.log("Data: loading todos from storage".to_string());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => {
                self.logger.log("Global key: 'i' - cycling icon theme".to_string());
                Action::CycleIconTheme
            }
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading todos".to_string());
                Action::RefreshData
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn cancel_reset(&mut self, id: &TodoId) {
        if let Some(task_id) = self.pending_resets.remove(id) {
            if self.task_manager.cancel_task(task_id) {
                self.logger.log(format!("Swipe: cancelled pending reset for {}", id));
            }
        }
    }

    /// Toggle in the background; the row stays pending until the write is over
    fn spawn_toggle(&mut self, todo: Todo) {
        let store = Arc::clone(&self.store);
        let notifier = Arc::clone(&self.notifier);
        let target = todo.clone();
        let id = todo.id;

        self.task_manager.spawn_todo_operation(
            move || async move {
                let updated = effects::toggle_completion(&target, store.as_ref(), notifier.as_ref()).await?;
                let outcome = if updated.is_completed {
                    SUCCESS_TODO_COMPLETED
                } else {
                    SUCCESS_TODO_REOPENED
                };
                Ok(format!("{}: {}", outcome, updated.title))
            },
            format!("{} '{}'", ERROR_TODO_UPDATE_FAILED, todo.title),
            move |succeeded| Action::ToggleFinished { id, succeeded },
        );
    }

    fn spawn_delete(&mut self, todo: Todo) {
        let store = Arc::clone(&self.store);
        let target = todo.clone();
        let id = todo.id;

        self.task_manager.spawn_todo_operation(
            move || async move {
                effects::delete_todo(&target, store.as_ref()).await?;
                Ok(format!("{}: {}", SUCCESS_TODO_DELETED, target.title))
            },
            format!("{} '{}'", ERROR_TODO_DELETE_FAILED, todo.title),
            move |succeeded| {
                if succeeded {
                    Action::None
                } else {
                    Action::DeleteFailed(id)
                }
            },
        );
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::OpenTodo(index) => match self.task_list.todos().get(index) {
                Some(todo) => {
                    self.logger.log(format!("Task: opening #{} '{}'", index, todo.title));
                    Action::ShowDialog(DialogType::TodoDetails {
                        index,
                        todo: todo.clone(),
                    })
                }
                None => {
                    self.logger.log(format!("Task: no todo at index {}", index));
                    Action::None
                }
            },
            Action::ToggleTodo(todo) => {
                self.logger.log(format!(
                    "Swipe: toggling '{}' (completed: {} -> {})",
                    todo.title, todo.is_completed, !todo.is_completed
                ));
                self.state.status_message = Some(format!("Updating '{}'...", todo.title));
                self.spawn_toggle(todo);
                Action::None
            }
            Action::DeleteTodo(todo) => {
                self.logger.log(format!("Swipe: deleting '{}' ({})", todo.title, todo.id));
                self.state.status_message = Some(format!("Deleting '{}'...", todo.title));
                self.cancel_reset(&todo.id);
                self.spawn_delete(todo);
                Action::None
            }
            Action::ScheduleReset(id) => {
                self.cancel_reset(&id);
                let task_id = self.task_manager.spawn_swipe_reset(id, self.reset_delay);
                self.pending_resets.insert(id, task_id);
                self.logger.log(format!("Swipe: delete dismissed, resetting {} shortly", id));
                Action::None
            }
            Action::RefreshData => {
                self.load_data();
                Action::None
            }
            Action::DataLoaded(todos) => {
                self.state.loading = false;
                self.state.status_message = None;
                let count = todos.len();
                let gone = self.task_list.set_todos(todos);
                for id in &gone {
                    self.cancel_reset(id);
                }
                self.logger.log(format!("Data: loaded {} todos ({} rows dropped)", count, gone.len()));
                Action::None
            }
            Action::ReminderFired(reminder) => {
                self.logger.log(format!("Reminder: '{}' at {}", reminder.title, reminder.time));
                let mut message = format!("{} {} ({})", self.task_list.icons.reminder(), reminder.title, reminder.time);
                if !reminder.message.trim().is_empty() {
                    message.push_str("\n\n");
                    message.push_str(&reminder.message);
                }
                Action::ShowDialog(DialogType::Info(message))
            }
            Action::CycleIconTheme => {
                self.task_list.icons.cycle_icon_theme();
                self.dialog.icons = self.task_list.icons.clone();
                Action::None
            }
            // Left for the dialog on the next pass
            action @ (Action::ShowDialog(_) | Action::HideDialog) => action,
            _ => Action::None,
        }
    }

    /// Pass an action through the component hierarchy, then the app, following
    /// any actions they return
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if matches!(action, Action::None) {
                return;
            }
            if let Action::ResetSwipe(id) = &action {
                self.pending_resets.remove(id);
            }

            let processed = self.dialog.update(action);
            let processed = self.task_list.update(processed);
            action = self.handle_app_action(processed);
        }
        log::warn!("Dropping action after {} follow-ups: {:?}", MAX_ACTION_CHAIN, action);
    }

    /// Drain actions reported by background tasks and fired reminders
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        if let Some(reminder_rx) = self.reminder_rx.as_mut() {
            while let Ok(reminder) = reminder_rx.try_recv() {
                actions.push(Action::ReminderFired(reminder));
            }
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            self.logger.log(format!("Background: Cleaned up {} finished tasks", finished.len()));
        }

        actions
    }

    /// Process an event through the component hierarchy.
    ///
    /// Returns whether the screen needs redrawing.
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<bool> {
        let action = match event_type {
            EventType::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    match self.task_list.handle_key_events(key) {
                        Action::None => self.handle_global_key(key),
                        action => action,
                    }
                }
            }
            EventType::Mouse(mouse) => {
                if self.mouse_enabled && !self.dialog.is_visible() {
                    self.task_list.handle_mouse_events(mouse)
                } else {
                    Action::None
                }
            }
            EventType::Resize(_, _) => {
                return Ok(true);
            }
            EventType::Tick => {
                let mut changed = false;
                let tick_action = self.task_list.tick(Instant::now());
                if !matches!(tick_action, Action::None) {
                    self.dispatch(tick_action);
                    changed = true;
                }
                for action in self.process_background_actions() {
                    self.dispatch(action);
                    changed = true;
                }
                return Ok(changed);
            }
            EventType::Other => return Ok(false),
        };

        self.dispatch(action);
        Ok(true)
    }

    fn status_info(&self) -> StatusInfo {
        StatusInfo {
            loading: self.state.loading,
            active_tasks: self.task_manager.task_count(),
            todo_count: self.task_list.todos().len(),
            message: self.state.status_message.clone(),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (list_area, status_area) = LayoutManager::main_layout(rect);

        self.task_list.render(f, list_area);
        StatusBar::render(f, status_area, &self.status_info());

        if self.state.loading {
            self.render_loading_indicator(f, list_area);
        }

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

impl AppComponent {
    fn render_loading_indicator(&self, f: &mut Frame, rect: Rect) {
        use ratatui::{
            layout::Alignment,
            style::{Color, Style},
            text::{Line, Span},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = LayoutManager::centered_rect_lines(40, 3, rect);

        let content = Paragraph::new(Line::from(Span::styled(
            "⟳ Loading tasks...",
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}
