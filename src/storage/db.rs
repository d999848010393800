use std::path::Path;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{todo, Todo, TodoEntity};
use crate::repositories::TodoRepository;

/// Local storage for todos, backed by SQLite through SeaORM
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

/// A todo as it appears in an import file
#[derive(Debug, Clone, Deserialize)]
pub struct ImportedTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl LocalStorage {
    /// Open (or create) the database at `path`, or an in-memory database when `None`
    pub async fn new(path: Option<&Path>) -> Result<Self> {
        let database_url = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
                }
                format!("sqlite://{}?mode=rwc", path.display())
            }
            None => "sqlite::memory:".to_string(),
        };

        let mut options = ConnectOptions::new(database_url.clone());
        options.sqlx_logging(false);
        if path.is_none() {
            // Every pooled connection to :memory: is a separate database
            options.min_connections(1).max_connections(1);
        }

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        log::info!("Storage: opened {}", database_url);

        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut create = schema.create_table_from_entity(TodoEntity);
        create.if_not_exists();

        self.conn
            .execute(backend.build(&create))
            .await
            .context("Failed to create todos table")?;
        Ok(())
    }

    /// All todos in list order
    pub async fn get_todos(&self) -> Result<Vec<Todo>> {
        TodoRepository::get_all(&self.conn).await
    }

    /// Look up a single todo
    pub async fn get_todo(&self, id: &Uuid) -> Result<Option<Todo>> {
        TodoRepository::get_by_id(&self.conn, id).await
    }

    /// Whether the database holds any todo yet
    pub async fn has_data(&self) -> Result<bool> {
        Ok(!self.get_todos().await?.is_empty())
    }

    /// Append a new todo at the end of the list
    pub async fn add_todo(&self, todo: ImportedTodo) -> Result<Todo> {
        Self::insert_imported(&self.conn, todo).await
    }

    async fn insert_imported<C>(conn: &C, todo: ImportedTodo) -> Result<Todo>
    where
        C: ConnectionTrait,
    {
        if todo.title.trim().is_empty() {
            anyhow::bail!("Todo title cannot be empty");
        }
        let position = TodoRepository::next_position(conn).await?;
        let model = todo::Model {
            id: Uuid::new_v4(),
            position,
            title: todo.title,
            description: todo.description,
            date: todo.date,
            time: todo.time,
            is_completed: todo.is_completed,
        };
        TodoRepository::insert(conn, model).await
    }

    /// Import todos from a JSON array, returning how many were added.
    ///
    /// The import is all or nothing: one bad entry leaves the store untouched.
    pub async fn import_json(&self, json: &str) -> Result<usize> {
        let todos: Vec<ImportedTodo> = serde_json::from_str(json).context("Failed to parse todo import file")?;
        let count = todos.len();

        let txn = self.conn.begin().await.context("Failed to start import transaction")?;
        for (index, todo) in todos.into_iter().enumerate() {
            Self::insert_imported(&txn, todo)
                .await
                .with_context(|| format!("Failed to import todo #{}", index + 1))?;
        }
        txn.commit().await.context("Failed to commit import")?;

        log::info!("Storage: imported {} todos", count);
        Ok(count)
    }

    /// Import todos from a JSON file on disk
    pub async fn import_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read import file: {}", path.as_ref().display()))?;
        self.import_json(&content).await
    }
}
