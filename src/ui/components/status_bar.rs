//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::STATUS_HINT;

/// What the status bar reports
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub loading: bool,
    pub active_tasks: usize,
    pub todo_count: usize,
    pub message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for `status`
    pub fn text(status: &StatusInfo) -> String {
        if status.loading {
            "Loading tasks...".to_string()
        } else if let Some(message) = &status.message {
            message.clone()
        } else if status.active_tasks > 0 {
            format!("🔄 Working ({} pending) • {}", status.active_tasks, STATUS_HINT)
        } else {
            format!("{} tasks • {}", status.todo_count, STATUS_HINT)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, status: &StatusInfo) {
        let status_color = if status.loading || status.active_tasks > 0 {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::text(status))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
