use super::common::{create_dialog_block, create_instructions_paragraph, field_line, shortcuts};
use crate::constants::{DELETE_CONFIRM_TEXT, DELETE_DIALOG_MESSAGE, DELETE_DIALOG_TITLE, DELETE_DISMISS_TEXT};
use crate::entities::Todo;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, todo_title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} {}", icons.warning(), DELETE_DIALOG_TITLE), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(DELETE_DIALOG_MESSAGE)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    let title = Paragraph::new(format!("\"{}\"", todo_title))
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = create_instructions_paragraph(&[
        ("y/Enter", Color::Red, " "),
        (DELETE_CONFIRM_TEXT, Color::Red, ""),
        shortcuts::SEPARATOR,
        ("n/Esc", Color::Green, " "),
        (DELETE_DISMISS_TEXT, Color::Green, ""),
    ]);

    f.render_widget(message, chunks[0]);
    f.render_widget(title, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}

pub fn render_todo_details_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    header_format: &str,
    index: usize,
    todo: &Todo,
) {
    let dialog_area = LayoutManager::centered_rect(60, 50, area);
    f.render_widget(Clear, dialog_area);

    let status = if todo.is_completed {
        format!("{} done", icons.todo_completed())
    } else {
        format!("{} not done", icons.todo_pending())
    };
    let date = match datetime::parse_todo_date(&todo.date) {
        Ok(day) => datetime::format_header_date(day, header_format),
        Err(_) => format!("{} (unreadable)", todo.date),
    };
    let description = if todo.description.trim().is_empty() {
        "-".to_string()
    } else {
        todo.description.clone()
    };

    let mut lines = vec![
        field_line("Title", todo.title.clone()),
        field_line("Date", date),
        field_line("Time", todo.time.clone()),
        field_line("Status", status),
        field_line("Position", format!("#{}", index + 1)),
        Line::from(""),
    ];
    lines.extend(description.lines().map(|line| Line::from(line.to_string())));

    let block = create_dialog_block(format!("{} Task", icons.tasks_title()), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    f.render_widget(create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), chunks[1]);
}
