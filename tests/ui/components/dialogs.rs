use crate::support::{buffer_lines, terminal};
use crossterm::event::KeyCode;
use tasky::icons::IconService;
use tasky::ui::components::dialogs::{system_dialogs, DialogScroll};

#[test]
fn test_scroll_keys() {
    let mut scroll = DialogScroll::default();

    assert!(scroll.handle_key(KeyCode::Char('j')));
    assert!(scroll.handle_key(KeyCode::Down));
    assert_eq!(scroll.offset, 2);

    assert!(scroll.handle_key(KeyCode::PageDown));
    assert_eq!(scroll.offset, 12);

    assert!(scroll.handle_key(KeyCode::Char('k')));
    assert_eq!(scroll.offset, 11);

    assert!(scroll.handle_key(KeyCode::Home));
    assert_eq!(scroll.offset, 0);

    // Never below zero
    assert!(scroll.handle_key(KeyCode::PageUp));
    assert_eq!(scroll.offset, 0);

    assert!(!scroll.handle_key(KeyCode::Char('x')));
}

#[test]
fn test_scroll_is_clamped_when_rendered() {
    let mut scroll = DialogScroll::default();
    scroll.scroll_to_bottom();

    let message = (0..30).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
    let mut terminal = terminal(80, 24);
    terminal
        .draw(|f| system_dialogs::render_info_dialog(f, f.area(), &IconService::default(), &message, &mut scroll))
        .unwrap();

    // Six content lines fit, so the last six of thirty are shown
    assert_eq!(scroll.offset, 24);
    let screen = buffer_lines(&terminal).join("\n");
    assert!(screen.contains("line 29"));
    assert!(screen.contains("line 24"));
    assert!(!screen.contains("line 23"));
}

#[test]
fn test_help_lists_swipe_keys() {
    let mut scroll = DialogScroll::default();
    let mut terminal = terminal(90, 50);
    terminal
        .draw(|f| system_dialogs::render_help_dialog(f, f.area(), &mut scroll))
        .unwrap();

    let screen = buffer_lines(&terminal).join("\n");
    assert!(screen.contains("SWIPING"));
    assert!(screen.contains("toggle done"));
}

#[test]
fn test_error_dialog_shows_message() {
    let mut scroll = DialogScroll::default();
    let mut terminal = terminal(80, 24);
    terminal
        .draw(|f| {
            system_dialogs::render_error_dialog(
                f,
                f.area(),
                &IconService::default(),
                "Failed to delete task 'B': store offline",
                &mut scroll,
            )
        })
        .unwrap();

    let screen = buffer_lines(&terminal).join("\n");
    assert!(screen.contains("Error"));
    assert!(screen.contains("store offline"));
}
