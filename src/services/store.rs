use anyhow::Result;
use async_trait::async_trait;

use super::TodoStore;
use crate::entities::Todo;
use crate::repositories::TodoRepository;
use crate::storage::LocalStorage;

#[async_trait]
impl TodoStore for LocalStorage {
    async fn update_todo(&self, todo: Todo) -> Result<()> {
        log::debug!("Store: updating todo {} '{}'", todo.id, todo.title);
        TodoRepository::update(&self.conn, todo).await?;
        Ok(())
    }

    async fn delete_todo(&self, todo: Todo) -> Result<()> {
        log::debug!("Store: deleting todo {} '{}'", todo.id, todo.title);
        TodoRepository::delete(&self.conn, todo).await
    }
}
