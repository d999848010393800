//! Modal dialog component.
//!
//! Hosts the delete confirmation prompt raised by a left swipe, the details
//! view opened by activating a row, and the system dialogs (info, error,
//! help, logs). Only one dialog is visible at a time and it receives all key
//! input while shown. Dialogs raised while the delete prompt is up wait their
//! turn until it is answered.

use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, todo_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::collections::VecDeque;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub display_config: DisplayConfig,
    scroll: DialogScroll,
    queued: VecDeque<DialogType>,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
            scroll: DialogScroll::default(),
            queued: VecDeque::new(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = self.queued.pop_front();
        self.scroll.reset();
    }

    /// Close the dialog, answering the delete prompt with `answer` when it is
    /// the one showing
    fn close_with(&mut self, answer: impl FnOnce(crate::entities::TodoId) -> Action) -> Action {
        let action = match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { todo_id, .. }) => answer(*todo_id),
            _ => Action::HideDialog,
        };
        self.clear_dialog();
        action
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.close_with(Action::ConfirmDelete),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
                    self.close_with(Action::DismissDelete)
                }
                _ => Action::None,
            },
            Some(DialogType::TodoDetails { .. }) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                // An unanswered delete prompt stays on top
                if let Some(DialogType::DeleteConfirmation { todo_id, .. }) = &self.dialog_type {
                    if !matches!(dialog_type, DialogType::DeleteConfirmation { .. }) {
                        log::debug!("Dialog: queueing {:?} behind delete prompt for {}", dialog_type, todo_id);
                        self.queued.push_back(dialog_type);
                        return Action::None;
                    }
                }
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { title, .. } => {
                todo_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &title);
            }
            DialogType::TodoDetails { index, todo } => {
                todo_dialogs::render_todo_details_dialog(
                    f,
                    rect,
                    &self.icons,
                    &self.display_config.header_date_format,
                    index,
                    &todo,
                );
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll),
        }
    }
}
