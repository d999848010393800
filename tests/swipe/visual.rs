use tasky::swipe::visual::{ICON_SCALE_MAX, ICON_SCALE_MIN};
use tasky::swipe::{IconAlignment, SwipeDirection, SwipeIcon, SwipePhase, SwipeTint, SwipeVisual};

fn tracking(direction: SwipeDirection, progress: f32) -> SwipeVisual {
    SwipeVisual::for_phase(SwipePhase::Tracking { direction, progress })
}

#[test]
fn test_idle_is_neutral() {
    let visual = SwipeVisual::for_phase(SwipePhase::Idle);
    assert_eq!(visual, SwipeVisual::NEUTRAL);
    assert_eq!(visual.tint, SwipeTint::Neutral);
    assert_eq!(visual.icon, SwipeIcon::Trash);
    assert_eq!(visual.alignment, IconAlignment::End);
    assert_eq!(visual.icon_scale, ICON_SCALE_MIN);
    assert!(!visual.is_full_size());
}

#[test]
fn test_left_swipe_shows_red_trash_on_the_right() {
    let visual = tracking(SwipeDirection::EndToStart, 0.5);
    assert_eq!(visual.tint, SwipeTint::Delete);
    assert_eq!(visual.icon, SwipeIcon::Trash);
    assert_eq!(visual.alignment, IconAlignment::End);
    assert!((visual.icon_scale - 0.9).abs() < 1e-6);
    assert!((visual.offset + 0.5).abs() < 1e-6);
}

#[test]
fn test_right_swipe_shows_green_check_on_the_left() {
    let visual = tracking(SwipeDirection::StartToEnd, 0.25);
    assert_eq!(visual.tint, SwipeTint::Complete);
    assert_eq!(visual.icon, SwipeIcon::Check);
    assert_eq!(visual.alignment, IconAlignment::Start);
    assert!((visual.icon_scale - 0.7).abs() < 1e-6);
    assert!((visual.offset - 0.25).abs() < 1e-6);
}

#[test]
fn test_icon_scale_is_monotonic_and_reaches_full_size() {
    let scales: Vec<f32> = (0..=10)
        .map(|step| tracking(SwipeDirection::EndToStart, step as f32 / 10.0).icon_scale)
        .collect();
    assert!(scales.windows(2).all(|pair| pair[0] <= pair[1]));

    let full = tracking(SwipeDirection::EndToStart, 1.0);
    assert_eq!(full.icon_scale, ICON_SCALE_MAX);
    assert!(full.is_full_size());
}

#[test]
fn test_zero_progress_is_neutral() {
    assert_eq!(tracking(SwipeDirection::StartToEnd, 0.0), SwipeVisual::NEUTRAL);
}

#[test]
fn test_settled_phases_are_full_size() {
    let delete = SwipeVisual::for_phase(SwipePhase::PendingDelete { confirming: true });
    assert_eq!(delete.tint, SwipeTint::Delete);
    assert!(delete.is_full_size());
    assert_eq!(delete.offset, -1.0);

    let waiting = SwipeVisual::for_phase(SwipePhase::PendingDelete { confirming: false });
    assert_eq!(waiting, delete);

    let toggle = SwipeVisual::for_phase(SwipePhase::PendingToggle);
    assert_eq!(toggle.tint, SwipeTint::Complete);
    assert_eq!(toggle.alignment, IconAlignment::Start);
    assert!(toggle.is_full_size());
}
