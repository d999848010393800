use ratatui::layout::Rect;
use tasky::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_status_line() {
    let (list, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(status.height, 1);
    assert_eq!(status.y, 23);
    assert_eq!(list.height, 23);
    assert_eq!(list.width, 80);
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 40);
    let popup = LayoutManager::centered_rect_lines(50, 8, area);
    assert_eq!(popup.width, 50);
    assert_eq!(popup.height, 8);
    assert_eq!(popup.x, 25);
    assert!(popup.y + popup.height <= area.height);
}

#[test]
fn test_swipe_shift() {
    // Half the threshold distance on a 40 column row
    assert_eq!(LayoutManager::swipe_shift(0.5, 0.5, 40), 10);
    assert_eq!(LayoutManager::swipe_shift(-1.0, 0.5, 40), -20);
    assert_eq!(LayoutManager::swipe_shift(0.0, 0.5, 40), 0);
}
