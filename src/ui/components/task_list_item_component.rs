use crate::config::DisplayConfig;
use crate::entities::Todo;
use crate::grouping::DateKey;
use crate::icons::IconService;
use crate::swipe::{IconAlignment, SwipeTint, SwipeVisual};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Background of a row swiped towards delete
pub const DELETE_TINT: Color = Color::Rgb(0xF4, 0x43, 0x36);
/// Background of a row swiped towards complete
pub const COMPLETE_TINT: Color = Color::Rgb(0x4C, 0xAF, 0x50);

const TIME_COLOR: Color = Color::Rgb(255, 165, 0);

/// Trait for items that can be displayed in the task list
pub trait ListItem {
    /// Render this item as one line `width` columns wide
    fn render(&self, selected: bool, width: u16, display_config: &DisplayConfig) -> Line<'static>;
}

/// Enum representing the kinds of rows in the task list
#[derive(Debug, Clone)]
pub enum TaskListItemType {
    Todo(Box<TodoItem>),
    Header(HeaderItem),
}

impl ListItem for TaskListItemType {
    fn render(&self, selected: bool, width: u16, display_config: &DisplayConfig) -> Line<'static> {
        match self {
            Self::Todo(item) => item.render(selected, width, display_config),
            Self::Header(item) => item.render(selected, width, display_config),
        }
    }
}

/// One todo row, drawn over its swipe background
#[derive(Debug, Clone)]
pub struct TodoItem {
    pub todo: Todo,
    pub visual: SwipeVisual,
    /// Columns the content is shifted by, negative to the left
    pub shift: i32,
    pub icons: IconService,
}

impl TodoItem {
    pub fn new(todo: Todo, visual: SwipeVisual, shift: i32, icons: IconService) -> Self {
        Self {
            todo,
            visual,
            shift,
            icons,
        }
    }

    fn status_icon(&self) -> &'static str {
        if self.todo.is_completed {
            self.icons.todo_completed()
        } else {
            self.icons.todo_pending()
        }
    }

    fn description_excerpt(&self, display_config: &DisplayConfig) -> Option<&str> {
        if !display_config.show_descriptions {
            return None;
        }
        self.todo.description.lines().next().filter(|line| !line.trim().is_empty())
    }

    fn content_spans(&self, selected: bool, display_config: &DisplayConfig) -> Vec<Span<'static>> {
        let mut line_spans = Vec::new();

        let status_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.todo.is_completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(format!("{} ", self.status_icon()), status_style));

        let content_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.todo.is_completed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(self.todo.title.clone(), content_style));

        if !self.todo.time.trim().is_empty() {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(self.todo.time.clone(), Style::default().fg(TIME_COLOR)));
        }

        if let Some(description_line) = self.description_excerpt(display_config) {
            line_spans.push(Span::raw(" - "));
            line_spans.push(Span::styled(
                description_line.to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }

        line_spans
    }

    /// The row as plain text, for drawing over a tinted background
    fn plain_text(&self, display_config: &DisplayConfig) -> String {
        let mut text = format!("{} {}", self.status_icon(), self.todo.title);
        if !self.todo.time.trim().is_empty() {
            text.push(' ');
            text.push_str(&self.todo.time);
        }
        if let Some(description_line) = self.description_excerpt(display_config) {
            text.push_str(" - ");
            text.push_str(description_line);
        }
        text
    }

    fn tinted_line(&self, tint: Color, selected: bool, width: usize, display_config: &DisplayConfig) -> Line<'static> {
        let icon = self.icons.swipe_icon(self.visual.icon, self.visual.is_full_size());
        let icon_len = icon.chars().count();
        let content = self.plain_text(display_config);
        let shift = self.shift.unsigned_abs() as usize;

        let text = match self.visual.alignment {
            IconAlignment::Start => {
                let lead = shift.max(icon_len + 1);
                let mut text = pad_to(icon.to_string(), lead);
                text.push_str(&content);
                text
            }
            IconAlignment::End => {
                let room = width.saturating_sub(icon_len + 1);
                let body: String = content.chars().skip(shift).take(room).collect();
                let mut text = pad_to(body, room);
                text.push(' ');
                text.push_str(icon);
                text
            }
        };

        let mut style = Style::default().bg(tint).fg(Color::White);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        let fitted: String = text.chars().take(width).collect();
        Line::from(Span::styled(pad_to(fitted, width), style))
    }
}

impl ListItem for TodoItem {
    fn render(&self, selected: bool, width: u16, display_config: &DisplayConfig) -> Line<'static> {
        match self.visual.tint {
            SwipeTint::Neutral => Line::from(self.content_spans(selected, display_config)),
            SwipeTint::Delete => self.tinted_line(DELETE_TINT, selected, width as usize, display_config),
            SwipeTint::Complete => self.tinted_line(COMPLETE_TINT, selected, width as usize, display_config),
        }
    }
}

/// A day header
#[derive(Debug, Clone)]
pub struct HeaderItem {
    pub key: DateKey,
    pub text: String,
    pub icons: IconService,
}

impl HeaderItem {
    pub fn new(key: DateKey, header_format: &str, icons: IconService) -> Self {
        Self {
            key,
            text: key.label(header_format),
            icons,
        }
    }
}

impl ListItem for HeaderItem {
    fn render(&self, _selected: bool, width: u16, _display_config: &DisplayConfig) -> Line<'static> {
        let (icon, color) = match self.key {
            DateKey::Day(_) => (self.icons.header(), Color::Cyan),
            DateKey::Unscheduled => (self.icons.warning(), Color::Yellow),
        };
        let text = pad_to(format!("{} {}", icon, self.text), width as usize);

        Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD).fg(color)))
    }
}

fn pad_to(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
    text
}
