use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
TASKY - date-grouped task list
==============================

NAVIGATION
----------
j/k ↑↓      Move between tasks (headers are skipped)
Enter       Open the selected task
Mouse       Click a task to open it, scroll to move

SWIPING
-------
h / ←       Swipe the selected task left (delete, asks first)
l / →       Swipe the selected task right (toggle done)
Esc         Cancel a swipe in progress
Mouse drag  Drag a task sideways and let go past halfway

A swipe released early slides back. A swipe held still for a
moment is released where it stands.

DELETE PROMPT
-------------
y / Enter   Delete the task
n / Esc     Keep the task

GENERAL
-------
?           Toggle this help
G           Show logs
i           Change icon theme
r           Reload tasks from storage
q, Ctrl+C   Quit

REMINDERS
---------
Completing a task schedules a reminder at its date and time;
marking it not done again cancels the reminder.
";

/// Render `text` in a centered dialog, scrolled by `scroll`, with a
/// scrollbar when it does not fit
fn render_scrolled_text(
    f: &mut Frame,
    dialog_area: Rect,
    title: String,
    color: Color,
    text: &str,
    footer: Option<Paragraph<'_>>,
    scroll: &mut DialogScroll,
) {
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, color), dialog_area);

    let footer_height = u16::from(footer.is_some()) * 2;
    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2 + footer_height),
    );

    let lines: Vec<&str> = text.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll.offset.min(max_scroll);
    scroll.offset = clamped_offset;
    scroll.scrollbar_state = scroll
        .scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, content_area);

    if let Some(footer) = footer {
        let footer_area = Rect::new(
            dialog_area.x + 1,
            dialog_area.y + dialog_area.height.saturating_sub(2),
            dialog_area.width.saturating_sub(2),
            1,
        );
        f.render_widget(footer, footer_area);
    }

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}

fn dismiss_footer() -> Paragraph<'static> {
    create_instructions_paragraph(&[
        ("Any key", Color::Gray, " Dismiss"),
        shortcuts::SEPARATOR,
        shortcuts::SCROLL,
    ])
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    let title = format!("{} Info", icons.info());
    render_scrolled_text(f, dialog_area, title, Color::Blue, message, Some(dismiss_footer()), scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    let title = format!("{} Error", icons.warning());
    render_scrolled_text(f, dialog_area, title, Color::Red, message, Some(dismiss_footer()), scroll);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    let title = "📖 Help - Press 'Esc' or '?' to close".to_string();
    render_scrolled_text(f, dialog_area, title, Color::White, HELP_TEXT, None, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);

    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    render_scrolled_text(
        f,
        dialog_area,
        DIALOG_TITLE_LOGS.to_string(),
        Color::White,
        &logs_content,
        None,
        scroll,
    );
}
