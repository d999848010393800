use tasky::swipe::{GestureSignal, SwipeDirection, SwipePhase, SwipeRegistry, SwipeVisual};
use uuid::Uuid;

#[test]
fn test_unknown_rows_read_as_idle() {
    let registry = SwipeRegistry::new();
    let id = Uuid::new_v4();

    assert!(registry.is_empty());
    assert!(registry.get(&id).is_none());
    assert_eq!(registry.phase(&id), SwipePhase::Idle);
    assert_eq!(registry.visual(&id), SwipeVisual::NEUTRAL);
    assert_eq!(registry.confirming(), None);
}

#[test]
fn test_controller_is_created_once_per_id() {
    let mut registry = SwipeRegistry::new();
    let id = Uuid::new_v4();

    registry
        .controller(id)
        .handle(GestureSignal::Settled(SwipeDirection::StartToEnd));
    assert_eq!(registry.controller(id).phase(), SwipePhase::PendingToggle);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.controller(id).todo_id(), id);
}

#[test]
fn test_state_follows_the_todo_not_the_row() {
    let mut registry = SwipeRegistry::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    registry
        .controller(second)
        .handle(GestureSignal::Settled(SwipeDirection::EndToStart));

    assert_eq!(registry.phase(&first), SwipePhase::Idle);
    assert_eq!(registry.phase(&second), SwipePhase::PendingDelete { confirming: true });
    assert_eq!(registry.confirming(), Some(second));
}

#[test]
fn test_retain_drops_rows_that_left_the_list() {
    let mut registry = SwipeRegistry::new();
    let kept = Uuid::new_v4();
    let gone = Uuid::new_v4();

    registry.controller(kept);
    registry
        .controller(gone)
        .handle(GestureSignal::Settled(SwipeDirection::EndToStart));

    let dropped = registry.retain(vec![kept]);
    assert_eq!(dropped, vec![gone]);
    assert_eq!(registry.len(), 1);
    assert!(registry.get(&gone).is_none());
    assert_eq!(registry.confirming(), None);

    // Nothing left to drop
    assert!(registry.retain(vec![kept]).is_empty());
}

#[test]
fn test_remove() {
    let mut registry = SwipeRegistry::new();
    let id = Uuid::new_v4();
    registry.controller(id);

    assert!(registry.remove(&id).is_some());
    assert!(registry.remove(&id).is_none());
    assert!(registry.is_empty());
}
