use std::time::Duration;
use tasky::ui::core::event_handler::DEFAULT_TICK_RATE;
use tasky::ui::core::EventHandler;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::new();
    assert_eq!(handler.tick_rate(), DEFAULT_TICK_RATE);
    assert_eq!(EventHandler::default().tick_rate(), DEFAULT_TICK_RATE);
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(16));
    assert_eq!(handler.tick_rate(), Duration::from_millis(16));
}
