use crate::config::DisplayConfig;
use crate::constants::EMPTY_LIST_MESSAGE;
use crate::entities::{Todo, TodoId};
use crate::grouping::{group_by_day, try_group_by_day, DateBucket, DateKey, GroupingError};
use crate::icons::IconService;
use crate::swipe::{
    GestureConfig, GestureRelease, GestureSignal, SwipeDirection, SwipeIntent, SwipeRecognizer, SwipeRegistry,
};
use crate::ui::components::task_list_item_component::{HeaderItem, ListItem, TaskListItemType, TodoItem};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// A rendered line of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    Header { bucket: usize },
    /// `index` is the todo's position in the ungrouped list
    Todo { index: usize, bucket: usize },
}

/// Date-grouped todo list with sticky day headers and swipeable rows
pub struct TaskListComponent {
    todos: Vec<Todo>,
    rows: Vec<ListRow>,
    bucket_keys: Vec<DateKey>,
    grouping_error: Option<GroupingError>,
    selected: Option<usize>,
    scroll_offset: usize,
    area: Rect,
    registry: SwipeRegistry,
    recognizer: SwipeRecognizer,
    gesture_target: Option<TodoId>,
    pub icons: IconService,
    pub display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default(), GestureConfig::default(), IconService::default())
    }
}

impl TaskListComponent {
    pub fn new(display_config: DisplayConfig, gesture_config: GestureConfig, icons: IconService) -> Self {
        Self {
            todos: Vec::new(),
            rows: Vec::new(),
            bucket_keys: Vec::new(),
            grouping_error: None,
            selected: None,
            scroll_offset: 0,
            area: Rect::default(),
            registry: SwipeRegistry::new(),
            recognizer: SwipeRecognizer::new(gesture_config),
            gesture_target: None,
            icons,
            display_config,
        }
    }

    /// Replace the list. Returns the ids whose swipe state was dropped because
    /// their todo is gone.
    pub fn set_todos(&mut self, todos: Vec<Todo>) -> Vec<TodoId> {
        let previous = self.selected_todo().map(|(_, todo)| todo.id);
        let previous_row = self.selected.unwrap_or(0);

        self.todos = todos;
        self.rebuild_rows();

        let gone = self.registry.retain(self.todos.iter().map(|todo| todo.id));

        if let Some(target) = self.gesture_target {
            if !self.todos.iter().any(|todo| todo.id == target) {
                self.recognizer.cancel();
                self.gesture_target = None;
            }
        }

        self.selected = previous
            .and_then(|id| self.row_of_todo(id))
            .or_else(|| self.nearest_todo_row(previous_row));

        gone
    }

    fn rebuild_rows(&mut self) {
        self.rows.clear();
        self.bucket_keys.clear();
        self.grouping_error = None;

        let grouped = if self.display_config.strict_dates {
            try_group_by_day(&self.todos)
        } else {
            Ok(group_by_day(&self.todos))
        };

        match grouped {
            Ok(buckets) => {
                let (rows, keys) = Self::layout_rows(&buckets);
                self.rows = rows;
                self.bucket_keys = keys;
            }
            Err(e) => {
                log::warn!("Task list: {}", e);
                self.grouping_error = Some(e);
            }
        }
    }

    fn layout_rows(buckets: &[DateBucket<'_>]) -> (Vec<ListRow>, Vec<DateKey>) {
        let mut rows = Vec::new();
        let mut keys = Vec::with_capacity(buckets.len());

        for (bucket, date_bucket) in buckets.iter().enumerate() {
            keys.push(date_bucket.key);
            rows.push(ListRow::Header { bucket });
            rows.extend(
                date_bucket
                    .entries
                    .iter()
                    .map(|entry| ListRow::Todo { index: entry.index, bucket }),
            );
        }

        (rows, keys)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn bucket_key(&self, bucket: usize) -> Option<DateKey> {
        self.bucket_keys.get(bucket).copied()
    }

    pub fn grouping_error(&self) -> Option<&GroupingError> {
        self.grouping_error.as_ref()
    }

    pub fn registry(&self) -> &SwipeRegistry {
        &self.registry
    }

    pub fn recognizer(&self) -> &SwipeRecognizer {
        &self.recognizer
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Row position of the selection
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// The selected todo and its index in the ungrouped list
    pub fn selected_todo(&self) -> Option<(usize, &Todo)> {
        self.selected.and_then(|row| self.todo_at_row(row))
    }

    fn todo_at_row(&self, row: usize) -> Option<(usize, &Todo)> {
        match self.rows.get(row)? {
            ListRow::Todo { index, .. } => self.todos.get(*index).map(|todo| (*index, todo)),
            ListRow::Header { .. } => None,
        }
    }

    fn todo_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    fn row_of_todo(&self, id: TodoId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, ListRow::Todo { index, .. } if self.todos[*index].id == id))
    }

    fn is_todo_row(&self, row: usize) -> bool {
        matches!(self.rows.get(row), Some(ListRow::Todo { .. }))
    }

    fn nearest_todo_row(&self, from: usize) -> Option<usize> {
        (from..self.rows.len())
            .find(|row| self.is_todo_row(*row))
            .or_else(|| (0..from.min(self.rows.len())).rev().find(|row| self.is_todo_row(*row)))
    }

    /// Header pinned on the first line: the bucket of the topmost visible row
    pub fn sticky_header(&self) -> Option<DateKey> {
        let bucket = match self.rows.get(self.scroll_offset)? {
            ListRow::Header { bucket } | ListRow::Todo { bucket, .. } => *bucket,
        };
        self.bucket_key(bucket)
    }

    fn select_next(&mut self) {
        let Some(current) = self.selected else {
            self.selected = self.nearest_todo_row(0);
            return;
        };
        self.selected = (current + 1..self.rows.len())
            .find(|row| self.is_todo_row(*row))
            .or_else(|| self.nearest_todo_row(0));
    }

    fn select_previous(&mut self) {
        let Some(current) = self.selected else {
            self.selected = self.nearest_todo_row(0);
            return;
        };
        self.selected = (0..current)
            .rev()
            .find(|row| self.is_todo_row(*row))
            .or_else(|| (0..self.rows.len()).rev().find(|row| self.is_todo_row(*row)));
    }

    /// Keep the selection below the pinned header and inside the viewport
    fn ensure_visible(&mut self, height: usize) {
        let Some(selected) = self.selected else {
            self.scroll_offset = 0;
            return;
        };

        if height <= 1 {
            self.scroll_offset = selected.saturating_sub(1);
            return;
        }
        if selected < self.scroll_offset + 1 {
            self.scroll_offset = selected.saturating_sub(1);
        } else if selected > self.scroll_offset + height - 1 {
            self.scroll_offset = selected + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(self.rows.len().saturating_sub(height));
    }

    /// Row position under a screen line, ignoring the pinned header line
    fn row_at(&self, column: u16, line: u16) -> Option<usize> {
        let area = self.area;
        if column < area.x || column >= area.x + area.width || line <= area.y || line >= area.y + area.height {
            return None;
        }
        let row = self.scroll_offset + usize::from(line - area.y);
        (row < self.rows.len()).then_some(row)
    }

    /// Abandon a gesture in progress on another row
    fn cancel_gesture_unless(&mut self, id: TodoId) {
        if let Some(target) = self.gesture_target.filter(|target| *target != id) {
            if let Some(signal) = self.recognizer.cancel() {
                self.registry.controller(target).handle(signal);
            }
            self.gesture_target = None;
        }
    }

    fn nudge_selected(&mut self, direction: SwipeDirection) -> Action {
        let Some(id) = self.selected_todo().map(|(_, todo)| todo.id) else {
            return Action::None;
        };
        self.cancel_gesture_unless(id);

        match self.recognizer.nudge(direction, Instant::now()) {
            Some(signal) => {
                self.gesture_target = self.recognizer.is_active().then_some(id);
                Action::Swipe { id, signal }
            }
            None => Action::None,
        }
    }

    /// Periodic update releasing paused keyboard swipes
    pub fn tick(&mut self, now: Instant) -> Action {
        let Some(id) = self.gesture_target else {
            return Action::None;
        };
        match self.recognizer.tick(now) {
            Some(signal) => {
                self.gesture_target = None;
                Action::Swipe { id, signal }
            }
            None => Action::None,
        }
    }

    fn apply_signal(&mut self, id: TodoId, signal: GestureSignal) -> Action {
        if self.todo_by_id(id).is_none() {
            return Action::None;
        }

        match self.registry.controller(id).handle(signal) {
            Some(SwipeIntent::ConfirmDelete) => match self.todo_by_id(id) {
                Some(todo) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    todo_id: id,
                    title: todo.title.clone(),
                }),
                None => Action::None,
            },
            Some(SwipeIntent::ToggleComplete) => match self.todo_by_id(id) {
                Some(todo) => Action::ToggleTodo(todo.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// The store write for the toggle of `id` is over. On success the local
    /// copy is flipped right away so the next gesture sees the new state.
    pub fn finish_toggle(&mut self, id: TodoId, succeeded: bool) -> bool {
        let Some(position) = self.todos.iter().position(|todo| todo.id == id) else {
            return false;
        };
        if !self.registry.controller(id).finish_toggle() {
            return false;
        }
        if succeeded {
            self.todos[position] = self.todos[position].toggled();
        }
        true
    }

    fn create_item(&self, row: ListRow, width: u16) -> Option<TaskListItemType> {
        match row {
            ListRow::Header { bucket } => {
                let key = self.bucket_key(bucket)?;
                Some(TaskListItemType::Header(HeaderItem::new(
                    key,
                    &self.display_config.header_date_format,
                    self.icons.clone(),
                )))
            }
            ListRow::Todo { index, .. } => {
                let todo = self.todos.get(index)?;
                let visual = self.registry.visual(&todo.id);
                let shift = LayoutManager::swipe_shift(visual.offset, self.recognizer.config().threshold, width);
                Some(TaskListItemType::Todo(Box::new(TodoItem::new(
                    todo.clone(),
                    visual,
                    shift,
                    self.icons.clone(),
                ))))
            }
        }
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTodo,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTodo,
            KeyCode::Enter => match self.selected_todo() {
                Some((index, _)) => Action::OpenTodo(index),
                None => Action::None,
            },
            KeyCode::Left | KeyCode::Char('h') => self.nudge_selected(SwipeDirection::EndToStart),
            KeyCode::Right | KeyCode::Char('l') => self.nudge_selected(SwipeDirection::StartToEnd),
            KeyCode::Esc => match (self.gesture_target.take(), self.recognizer.cancel()) {
                (Some(id), Some(signal)) => Action::Swipe { id, signal },
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(row) = self.row_at(mouse.column, mouse.row) else {
                    return Action::None;
                };
                let Some(id) = self.todo_at_row(row).map(|(_, todo)| todo.id) else {
                    return Action::None;
                };
                self.cancel_gesture_unless(id);
                self.selected = Some(row);
                self.recognizer.press(mouse.column, self.area.width, now);
                self.gesture_target = Some(id);
                Action::None
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.gesture_target {
                Some(id) => match self.recognizer.drag_to(mouse.column, now) {
                    Some(signal) => Action::Swipe { id, signal },
                    None => Action::None,
                },
                None => Action::None,
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(id) = self.gesture_target else {
                    return Action::None;
                };
                let release = self.recognizer.release(mouse.column, now);
                if !self.recognizer.is_active() {
                    self.gesture_target = None;
                }
                match release {
                    GestureRelease::Click => self
                        .todos
                        .iter()
                        .position(|todo| todo.id == id)
                        .map_or(Action::None, Action::OpenTodo),
                    GestureRelease::Signal(signal) => Action::Swipe { id, signal },
                    GestureRelease::Ignored => Action::None,
                }
            }
            MouseEventKind::ScrollDown => Action::NextTodo,
            MouseEventKind::ScrollUp => Action::PreviousTodo,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                self.select_next();
                Action::None
            }
            Action::PreviousTodo => {
                self.select_previous();
                Action::None
            }
            Action::Swipe { id, signal } => self.apply_signal(id, signal),
            Action::ConfirmDelete(id) => {
                let intent = match self.todo_by_id(id) {
                    Some(_) => self.registry.controller(id).confirm_delete(),
                    None => None,
                };
                match (intent, self.todo_by_id(id)) {
                    (Some(SwipeIntent::Delete), Some(todo)) => Action::DeleteTodo(todo.clone()),
                    _ => Action::None,
                }
            }
            Action::DismissDelete(id) => {
                if self.todo_by_id(id).is_none() {
                    return Action::None;
                }
                match self.registry.controller(id).dismiss_delete() {
                    Some(SwipeIntent::ScheduleReset) => Action::ScheduleReset(id),
                    _ => Action::None,
                }
            }
            Action::ToggleFinished { id, succeeded } => {
                if !self.finish_toggle(id, succeeded) {
                    log::debug!("Swipe: toggle of {} finished outside a pending toggle", id);
                }
                Action::None
            }
            Action::DeleteFailed(id) => {
                if self.todo_by_id(id).is_some() && self.registry.controller(id).delete_failed() {
                    log::debug!("Swipe: delete of {} failed, row is usable again", id);
                }
                Action::None
            }
            Action::ResetSwipe(id) => {
                if self.todo_by_id(id).is_some() && !self.registry.controller(id).reset() {
                    log::debug!("Swipe: reset for {} arrived outside a resettable phase", id);
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} Tasks", self.icons.tasks_title()));
        let inner = block.inner(rect);
        self.area = inner;
        f.render_widget(block, rect);

        if let Some(error) = &self.grouping_error {
            let message = Paragraph::new(format!("{} {}", self.icons.error(), error))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(message, inner);
            return;
        }

        if self.rows.is_empty() {
            let message = Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            f.render_widget(message, inner);
            return;
        }

        let height = usize::from(inner.height);
        self.ensure_visible(height);

        for line in 0..height {
            let item = if line == 0 {
                self.sticky_header()
                    .map(|key| {
                        TaskListItemType::Header(HeaderItem::new(
                            key,
                            &self.display_config.header_date_format,
                            self.icons.clone(),
                        ))
                    })
            } else {
                self.rows
                    .get(self.scroll_offset + line)
                    .and_then(|row| self.create_item(*row, inner.width))
            };
            let Some(item) = item else {
                break;
            };

            let selected = line > 0 && self.selected == Some(self.scroll_offset + line);
            let line_area = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
            f.render_widget(
                Paragraph::new(item.render(selected, inner.width, &self.display_config)),
                line_area,
            );
        }
    }
}
