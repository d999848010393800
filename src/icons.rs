//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

use crate::swipe::SwipeIcon;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Todo status icons
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Swipe background icons, in small and full size
#[derive(Debug, Clone)]
pub struct SwipeIcons {
    pub trash_small: &'static str,
    pub trash: &'static str,
    pub check_small: &'static str,
    pub check: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub header: &'static str,
    pub reminder: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_status: TodoStatusIcons,
    pub swipe: SwipeIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            swipe: SwipeIcons {
                trash_small: "🗑",
                trash: "🗑️ Delete",
                check_small: "✔",
                check: "✔️ Done",
            },
            ui: UiIcons {
                tasks_title: "📝",
                header: "📅",
                reminder: "⏰",
                error: "❌",
                info: "💡",
                warning: "⚠️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "□",
                completed: "✓",
            },
            swipe: SwipeIcons {
                trash_small: "✗",
                trash: "✗ Delete",
                check_small: "✓",
                check: "✓ Done",
            },
            ui: UiIcons {
                tasks_title: "▶",
                header: "◷",
                reminder: "⏲",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            swipe: SwipeIcons {
                trash_small: "x",
                trash: "[x] Delete",
                check_small: "v",
                check: "[v] Done",
            },
            ui: UiIcons {
                tasks_title: ">",
                header: "@",
                reminder: "!",
                error: "X",
                info: "i",
                warning: "!",
            },
        }
    }

    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.icons().todo_status.pending
    }

    #[must_use]
    pub fn todo_completed(&self) -> &'static str {
        self.icons().todo_status.completed
    }

    /// Glyph for a swipe background icon; `full_size` picks the labelled variant
    #[must_use]
    pub fn swipe_icon(&self, icon: SwipeIcon, full_size: bool) -> &'static str {
        let swipe = self.icons().swipe;
        match (icon, full_size) {
            (SwipeIcon::Trash, false) => swipe.trash_small,
            (SwipeIcon::Trash, true) => swipe.trash,
            (SwipeIcon::Check, false) => swipe.check_small,
            (SwipeIcon::Check, true) => swipe.check,
        }
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn header(&self) -> &'static str {
        self.icons().ui.header
    }

    #[must_use]
    pub fn reminder(&self) -> &'static str {
        self.icons().ui.reminder
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }
}
