use tasky::services::TodoStore;
use tasky::storage::{ImportedTodo, LocalStorage};

const IMPORT: &str = r#"[
    {"title": "A", "date": "01/05/2024", "time": "09:00"},
    {"title": "B", "description": "with notes", "date": "02/05/2024", "time": "10:30", "is_completed": true},
    {"title": "C", "date": "01/05/2024"}
]"#;

async fn storage() -> LocalStorage {
    // Use in-memory database for tests
    LocalStorage::new(None).await.unwrap()
}

#[tokio::test]
async fn test_local_storage_creation() {
    let storage = storage().await;
    assert!(!storage.has_data().await.unwrap());
    assert!(storage.get_todos().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_storage_creates_parent_directories() {
    let dir = std::env::temp_dir().join(format!("tasky_db_{}", std::process::id()));
    let path = dir.join("data").join("todos.db");

    let storage = LocalStorage::new(Some(&path)).await.unwrap();
    storage
        .add_todo(ImportedTodo {
            title: "persisted".to_string(),
            description: String::new(),
            date: "01/05/2024".to_string(),
            time: "08:00".to_string(),
            is_completed: false,
        })
        .await
        .unwrap();
    drop(storage);

    let reopened = LocalStorage::new(Some(&path)).await.unwrap();
    let todos = reopened.get_todos().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "persisted");

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_import_keeps_list_order() {
    let storage = storage().await;

    let count = storage.import_json(IMPORT).await.unwrap();
    assert_eq!(count, 3);

    let todos = storage.get_todos().await.unwrap();
    let titles: Vec<&str> = todos.iter().map(|todo| todo.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    let positions: Vec<i32> = todos.iter().map(|todo| todo.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    // Missing optional fields fall back to defaults
    assert_eq!(todos[1].description, "with notes");
    assert!(todos[1].is_completed);
    assert_eq!(todos[2].time, "");
    assert!(!todos[2].is_completed);
}

#[tokio::test]
async fn test_import_rejects_malformed_json() {
    let storage = storage().await;
    assert!(storage.import_json("{not json").await.is_err());
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_import_is_all_or_nothing() {
    let storage = storage().await;
    let json = r#"[
        {"title": "A", "date": "01/05/2024", "time": "09:00"},
        {"title": "  ", "date": "02/05/2024"}
    ]"#;

    let err = storage.import_json(json).await.unwrap_err();
    assert!(format!("{:#}", err).contains("#2"));
    assert!(!storage.has_data().await.unwrap());

    // The connection is usable again once the import rolled back
    assert_eq!(storage.import_json(IMPORT).await.unwrap(), 3);
}

#[tokio::test]
async fn test_import_file() {
    let storage = storage().await;
    let path = std::env::temp_dir().join(format!("tasky_import_{}.json", std::process::id()));
    std::fs::write(&path, IMPORT).unwrap();

    assert_eq!(storage.import_file(&path).await.unwrap(), 3);
    assert!(storage.import_file("/definitely/not/here.json").await.is_err());

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_update_through_store() {
    let storage = storage().await;
    storage.import_json(IMPORT).await.unwrap();
    let todo = storage.get_todos().await.unwrap().remove(0);

    storage.update_todo(todo.toggled()).await.unwrap();

    let reloaded = storage.get_todo(&todo.id).await.unwrap().unwrap();
    assert!(reloaded.is_completed);
    assert_eq!(reloaded.title, todo.title);
    assert_eq!(reloaded.position, todo.position);
}

#[tokio::test]
async fn test_delete_through_store() {
    let storage = storage().await;
    storage.import_json(IMPORT).await.unwrap();
    let todos = storage.get_todos().await.unwrap();

    storage.delete_todo(todos[1].clone()).await.unwrap();

    let remaining: Vec<String> = storage
        .get_todos()
        .await
        .unwrap()
        .into_iter()
        .map(|todo| todo.title)
        .collect();
    assert_eq!(remaining, vec!["A", "C"]);
    assert!(storage.get_todo(&todos[1].id).await.unwrap().is_none());

    // New todos still go to the end
    storage
        .add_todo(ImportedTodo {
            title: "D".to_string(),
            description: String::new(),
            date: "03/05/2024".to_string(),
            time: String::new(),
            is_completed: false,
        })
        .await
        .unwrap();
    let last = storage.get_todos().await.unwrap().pop().unwrap();
    assert_eq!(last.title, "D");
    assert_eq!(last.position, 3);
}

#[tokio::test]
async fn test_updating_a_deleted_todo_fails() {
    let storage = storage().await;
    storage.import_json(IMPORT).await.unwrap();
    let todo = storage.get_todos().await.unwrap().remove(0);

    storage.delete_todo(todo.clone()).await.unwrap();
    assert!(storage.update_todo(todo.toggled()).await.is_err());
}
