use crate::support::{buffer_lines, key, mouse, scenario, terminal, todo};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tasky::config::DisplayConfig;
use tasky::grouping::DateKey;
use tasky::icons::IconService;
use tasky::swipe::{GestureConfig, GestureSignal, SwipeDirection, SwipePhase};
use tasky::ui::components::task_list_item_component::DELETE_TINT;
use tasky::ui::components::{ListRow, TaskListComponent};
use tasky::ui::core::{
    actions::{Action, DialogType},
    Component,
};

fn component_with(todos: Vec<tasky::entities::Todo>) -> TaskListComponent {
    let mut component = TaskListComponent::default();
    component.set_todos(todos);
    component
}

/// Feed a key through the component the way the app does
fn press(component: &mut TaskListComponent, code: KeyCode) -> Action {
    let action = component.handle_key_events(key(code));
    component.update(action)
}

fn draw(component: &mut TaskListComponent, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|f| component.render(f, f.area())).unwrap();
}

#[test]
fn test_rows_follow_buckets() {
    let component = component_with(scenario());

    assert_eq!(
        component.rows(),
        &[
            ListRow::Header { bucket: 0 },
            ListRow::Todo { index: 1, bucket: 0 },
            ListRow::Header { bucket: 1 },
            ListRow::Todo { index: 0, bucket: 1 },
            ListRow::Todo { index: 2, bucket: 1 },
        ]
    );
    assert_eq!(component.bucket_key(0), Some(DateKey::Day(chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())));
    // The first todo row is selected, never a header
    assert_eq!(component.selected_row(), Some(1));
}

#[test]
fn test_navigation_skips_headers_and_wraps() {
    let mut component = component_with(scenario());

    assert_eq!(press(&mut component, KeyCode::Char('j')), Action::None);
    assert_eq!(component.selected_todo().map(|(_, todo)| todo.title.as_str()), Some("A"));

    press(&mut component, KeyCode::Down);
    assert_eq!(component.selected_todo().map(|(_, todo)| todo.title.as_str()), Some("C"));

    press(&mut component, KeyCode::Char('j'));
    assert_eq!(component.selected_row(), Some(1));

    press(&mut component, KeyCode::Char('k'));
    assert_eq!(component.selected_row(), Some(4));
}

#[test]
fn test_enter_reports_original_index() {
    let mut component = component_with(scenario());
    press(&mut component, KeyCode::Char('j'));
    press(&mut component, KeyCode::Char('j'));

    // C is third in the source list
    assert!(matches!(component.handle_key_events(key(KeyCode::Enter)), Action::OpenTodo(2)));
}

#[test]
fn test_selection_survives_refresh() {
    let todos = scenario();
    let mut component = component_with(todos.clone());
    press(&mut component, KeyCode::Char('j'));
    assert_eq!(component.selected_todo().unwrap().1.title, "A");

    // B disappears; A is still selected even though its row moved
    let remaining = vec![todos[0].clone(), todos[2].clone()];
    component.set_todos(remaining);
    assert_eq!(component.selected_todo().unwrap().1.title, "A");
    assert_eq!(component.selected_row(), Some(1));
}

#[test]
fn test_render_groups_under_date_headers() {
    let mut component = component_with(scenario());
    let mut terminal = terminal(40, 10);
    draw(&mut component, &mut terminal);

    let lines = buffer_lines(&terminal);
    assert!(lines[0].contains("Tasks"));
    assert!(lines[1].contains("May 02, 2024"));
    assert!(lines[2].contains("B"));
    assert!(lines[3].contains("May 01, 2024"));
    assert!(lines[4].contains("A"));
    assert!(lines[5].contains("C"));
    assert!(lines[4].contains("09:00"));
}

#[test]
fn test_header_sticks_while_scrolling() {
    let mut todos: Vec<_> = (0..10).map(|i| todo(i, "01/05/2024", &format!("task {}", i))).collect();
    todos.push(todo(10, "30/04/2024", "older"));
    let mut component = component_with(todos);
    // 4 inner lines: pinned header plus three rows
    let mut terminal = terminal(40, 6);

    for _ in 0..7 {
        press(&mut component, KeyCode::Char('j'));
    }
    draw(&mut component, &mut terminal);

    assert!(component.scroll_offset() > 0);
    let lines = buffer_lines(&terminal);
    assert!(lines[1].contains("May 01, 2024"), "pinned header missing: {:?}", lines);
    assert!(lines[4].contains("task 7"), "selection not visible: {:?}", lines);
    assert_eq!(component.sticky_header(), Some(DateKey::Day(chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())));
}

#[test]
fn test_empty_list_message() {
    let mut component = component_with(Vec::new());
    let mut terminal = terminal(60, 6);
    draw(&mut component, &mut terminal);

    assert!(component.selected_todo().is_none());
    assert!(buffer_lines(&terminal).iter().any(|line| line.contains("No tasks yet")));
}

#[test]
fn test_unscheduled_bucket_in_lenient_mode() {
    let mut todos = scenario();
    todos.push(todo(3, "someday", "D"));
    let component = component_with(todos);

    assert!(component.grouping_error().is_none());
    assert_eq!(component.bucket_key(2), Some(DateKey::Unscheduled));
    assert_eq!(component.rows().last(), Some(&ListRow::Todo { index: 3, bucket: 2 }));
}

#[test]
fn test_strict_mode_shows_error() {
    let display = DisplayConfig {
        strict_dates: true,
        ..Default::default()
    };
    let mut component = TaskListComponent::new(display, GestureConfig::default(), IconService::default());
    let mut todos = scenario();
    todos.push(todo(3, "someday", "D"));
    component.set_todos(todos);

    assert!(component.grouping_error().is_some());
    assert!(component.rows().is_empty());

    let mut terminal = terminal(80, 6);
    draw(&mut component, &mut terminal);
    assert!(buffer_lines(&terminal).iter().any(|line| line.contains("someday")));
}

#[test]
fn test_right_swipe_with_keys_toggles() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    let mut actions = Vec::new();
    for _ in 0..4 {
        actions.push(press(&mut component, KeyCode::Char('l')));
    }

    match actions.last() {
        Some(Action::ToggleTodo(todo)) => assert_eq!(todo.id, b.id),
        other => panic!("expected a toggle, got {:?}", other),
    }
    assert_eq!(component.registry().phase(&b.id), SwipePhase::PendingToggle);

    // Further swipes are ignored until the toggle is issued
    assert_eq!(
        component.update(Action::Swipe {
            id: b.id,
            signal: GestureSignal::Settled(SwipeDirection::StartToEnd)
        }),
        Action::None
    );

    // The store reports back; the local copy flips with it
    component.update(Action::ToggleFinished { id: b.id, succeeded: true });
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Idle);
    assert!(component.todos().iter().find(|todo| todo.id == b.id).unwrap().is_completed);
    assert!(!component.finish_toggle(b.id, true));
}

#[test]
fn test_failed_toggle_keeps_local_copy() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::StartToEnd),
    });
    assert!(component.finish_toggle(b.id, false));
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Idle);
    assert_eq!(
        component.todos().iter().find(|todo| todo.id == b.id).unwrap().is_completed,
        b.is_completed
    );
}

#[test]
fn test_left_swipe_asks_before_deleting() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    let prompt = component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::EndToStart),
    });
    match prompt {
        Action::ShowDialog(DialogType::DeleteConfirmation { todo_id, title }) => {
            assert_eq!(todo_id, b.id);
            assert_eq!(title, "B");
        }
        other => panic!("expected the delete prompt, got {:?}", other),
    }
    assert_eq!(component.registry().confirming(), Some(b.id));

    match component.update(Action::ConfirmDelete(b.id)) {
        Action::DeleteTodo(todo) => assert_eq!(todo.id, b.id),
        other => panic!("expected a delete, got {:?}", other),
    }
    // Confirming twice deletes once
    assert_eq!(component.update(Action::ConfirmDelete(b.id)), Action::None);

    // The row goes away with the refresh, and so does its swipe state
    let remaining: Vec<_> = component.todos().iter().filter(|todo| todo.id != b.id).cloned().collect();
    let gone = component.set_todos(remaining);
    assert_eq!(gone, vec![b.id]);
    assert!(component.registry().get(&b.id).is_none());
}

#[test]
fn test_dismissed_delete_resets_later() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::EndToStart),
    });
    assert_eq!(component.update(Action::DismissDelete(b.id)), Action::ScheduleReset(b.id));
    assert_eq!(component.registry().phase(&b.id), SwipePhase::PendingDelete { confirming: false });

    component.update(Action::ResetSwipe(b.id));
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Idle);
    assert_eq!(component.todos().len(), 3);
}

#[test]
fn test_failed_delete_leaves_row_usable() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::EndToStart),
    });
    component.update(Action::ConfirmDelete(b.id));
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Removed);

    // The store refused
    assert_eq!(component.update(Action::DeleteFailed(b.id)), Action::None);
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Idle);
    assert_eq!(component.todos().len(), 3);

    let again = component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::EndToStart),
    });
    assert!(matches!(again, Action::ShowDialog(DialogType::DeleteConfirmation { .. })));
}

#[test]
fn test_refresh_during_delete_keeps_row_removed() {
    let mut component = component_with(scenario());
    let b = component.selected_todo().unwrap().1.clone();

    component.update(Action::Swipe {
        id: b.id,
        signal: GestureSignal::Settled(SwipeDirection::EndToStart),
    });
    component.update(Action::ConfirmDelete(b.id));

    // A load that finished before the delete still lists B
    let unchanged = component.todos().to_vec();
    assert!(component.set_todos(unchanged).is_empty());
    assert_eq!(component.registry().phase(&b.id), SwipePhase::Removed);

    // No second prompt, so no second delete
    assert_eq!(
        component.update(Action::Swipe {
            id: b.id,
            signal: GestureSignal::Settled(SwipeDirection::EndToStart),
        }),
        Action::None
    );
    assert_eq!(component.update(Action::ConfirmDelete(b.id)), Action::None);
}

#[test]
fn test_swipe_progress_tints_the_row() {
    let mut component = component_with(scenario());
    let mut terminal = terminal(40, 10);

    let progress = press(&mut component, KeyCode::Char('h'));
    assert_eq!(progress, Action::None);
    assert!(component.recognizer().is_active());
    assert!(matches!(
        component.registry().phase(&component.selected_todo().unwrap().1.id),
        SwipePhase::Tracking {
            direction: SwipeDirection::EndToStart,
            ..
        }
    ));

    draw(&mut component, &mut terminal);
    // B is on the second screen line
    assert_eq!(terminal.backend().buffer()[(1, 2)].bg, DELETE_TINT);

    // Esc abandons the gesture
    press(&mut component, KeyCode::Esc);
    assert!(!component.recognizer().is_active());
    assert_eq!(
        component.registry().phase(&component.selected_todo().unwrap().1.id),
        SwipePhase::Idle
    );
}

#[test]
fn test_paused_key_swipe_is_released_on_tick() {
    let mut component = component_with(scenario());
    let id = component.selected_todo().unwrap().1.id;

    press(&mut component, KeyCode::Char('h'));
    press(&mut component, KeyCode::Char('h'));

    let later = std::time::Instant::now() + std::time::Duration::from_secs(1);
    let action = component.tick(later);
    assert!(matches!(
        action,
        Action::Swipe {
            signal: GestureSignal::Settled(SwipeDirection::EndToStart),
            ..
        }
    ));

    assert!(matches!(
        component.update(action),
        Action::ShowDialog(DialogType::DeleteConfirmation { todo_id, .. }) if todo_id == id
    ));
}

#[test]
fn test_mouse_click_opens_row() {
    let mut component = component_with(scenario());
    let mut terminal = terminal(40, 10);
    draw(&mut component, &mut terminal);

    // Line 4 shows A, the first todo of the source list
    assert_eq!(component.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)), Action::None);
    assert_eq!(component.selected_todo().unwrap().1.title, "A");
    assert!(matches!(
        component.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 10, 4)),
        Action::OpenTodo(0)
    ));

    // The pinned header line and header rows are not clickable
    assert_eq!(component.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 10, 1)), Action::None);
    assert_eq!(component.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 10, 3)), Action::None);
    assert!(!component.recognizer().is_active());
}

#[test]
fn test_mouse_drag_toggles() {
    let mut component = component_with(scenario());
    let mut terminal = terminal(40, 10);
    draw(&mut component, &mut terminal);

    component.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
    let dragging = component.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 5));
    assert!(matches!(dragging, Action::Swipe { signal: GestureSignal::Progress { .. }, .. }));
    component.update(dragging);

    let released = component.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 32, 5));
    match component.update(released) {
        Action::ToggleTodo(todo) => assert_eq!(todo.title, "C"),
        other => panic!("expected a toggle, got {:?}", other),
    }
}

#[test]
fn test_scroll_wheel_moves_selection() {
    let mut component = component_with(scenario());
    let action = component.handle_mouse_events(mouse(MouseEventKind::ScrollDown, 0, 0));
    assert_eq!(action, Action::NextTodo);
    component.update(action);
    assert_eq!(component.selected_todo().unwrap().1.title, "A");
}
