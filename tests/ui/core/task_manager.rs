use std::time::Duration;
use tasky::storage::{ImportedTodo, LocalStorage};
use tasky::ui::core::actions::{Action, DialogType};
use tasky::ui::core::TaskManager;
use uuid::Uuid;

#[tokio::test]
async fn test_successful_operation_requests_refresh() {
    let (mut manager, mut rx) = TaskManager::new();

    let id = Uuid::new_v4();
    let task_id = manager.spawn_todo_operation(
        || async { Ok("done".to_string()) },
        "Toggle".to_string(),
        move |succeeded| Action::ToggleFinished { id, succeeded },
    );
    assert_eq!(manager.task_count(), 1);

    assert_eq!(rx.recv().await, Some(Action::ToggleFinished { id, succeeded: true }));
    assert_eq!(rx.recv().await, Some(Action::RefreshData));

    tokio::time::sleep(Duration::from_millis(10)).await;
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished, vec![(task_id, "Toggle".to_string())]);
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_failed_operation_reports_error_then_refreshes() {
    let (mut manager, mut rx) = TaskManager::new();

    let id = Uuid::new_v4();
    manager.spawn_todo_operation(
        || async { Err(anyhow::anyhow!("store offline")) },
        "❌ Failed to delete task 'B'".to_string(),
        move |succeeded| if succeeded { Action::None } else { Action::DeleteFailed(id) },
    );

    match rx.recv().await {
        Some(Action::ShowDialog(DialogType::Error(message))) => {
            assert_eq!(message, "❌ Failed to delete task 'B': store offline");
        }
        other => panic!("expected an error dialog, got {:?}", other),
    }
    assert_eq!(rx.recv().await, Some(Action::DeleteFailed(id)));
    assert_eq!(rx.recv().await, Some(Action::RefreshData));
}

#[tokio::test]
async fn test_no_follow_up_for_none() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_todo_operation(
        || async { Ok("deleted".to_string()) },
        "Delete".to_string(),
        |_| Action::None,
    );

    assert_eq!(rx.recv().await, Some(Action::RefreshData));
}

#[tokio::test]
async fn test_data_load_sends_todos() {
    let storage = LocalStorage::new(None).await.unwrap();
    storage
        .add_todo(ImportedTodo {
            title: "A".to_string(),
            description: String::new(),
            date: "01/05/2024".to_string(),
            time: "09:00".to_string(),
            is_completed: false,
        })
        .await
        .unwrap();

    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_data_load(storage);

    match rx.recv().await {
        Some(Action::DataLoaded(todos)) => {
            assert_eq!(todos.len(), 1);
            assert_eq!(todos[0].title, "A");
        }
        other => panic!("expected loaded data, got {:?}", other),
    }
}

#[tokio::test]
async fn test_swipe_reset_fires_after_delay() {
    let (mut manager, mut rx) = TaskManager::new();
    let id = Uuid::new_v4();

    manager.spawn_swipe_reset(id, Duration::from_millis(20));
    assert_eq!(manager.task_count(), 1);
    assert!(rx.try_recv().is_err());

    assert_eq!(rx.recv().await, Some(Action::ResetSwipe(id)));
}

#[tokio::test]
async fn test_cancelled_reset_never_fires() {
    let (mut manager, mut rx) = TaskManager::new();
    let id = Uuid::new_v4();

    let task_id = manager.spawn_swipe_reset(id, Duration::from_millis(50));
    assert!(manager.cancel_task(task_id));
    assert!(!manager.cancel_task(task_id));
    assert_eq!(manager.task_count(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_swipe_reset(Uuid::new_v4(), Duration::from_secs(60));
    manager.spawn_swipe_reset(Uuid::new_v4(), Duration::from_secs(60));
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
