//! Todo repository for database operations.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::entities::todo;

/// Repository for todo-related database operations.
pub struct TodoRepository;

impl TodoRepository {
    /// Get all todos in list order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find()
            .order_by_asc(todo::Column::Position)
            .all(conn)
            .await?)
    }

    /// Get a single todo by id.
    pub async fn get_by_id<C>(conn: &C, id: &Uuid) -> Result<Option<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find().filter(todo::Column::Id.eq(*id)).one(conn).await?)
    }

    /// Next free position at the end of the list.
    pub async fn next_position<C>(conn: &C) -> Result<i32>
    where
        C: ConnectionTrait,
    {
        let max: Option<Option<i32>> = todo::Entity::find()
            .select_only()
            .column_as(todo::Column::Position.max(), "max_position")
            .into_tuple()
            .one(conn)
            .await?;
        Ok(max.flatten().map_or(0, |p| p + 1))
    }

    /// Insert a new todo.
    pub async fn insert<C>(conn: &C, model: todo::Model) -> Result<todo::Model>
    where
        C: ConnectionTrait,
    {
        let active: todo::ActiveModel = model.into();
        Ok(active.insert(conn).await?)
    }

    /// Write every field of an existing todo.
    pub async fn update<C>(conn: &C, model: todo::Model) -> Result<todo::Model>
    where
        C: ConnectionTrait,
    {
        let active = model.into_active_model().reset_all();
        Ok(active.update(conn).await?)
    }

    /// Delete a todo.
    pub async fn delete<C>(conn: &C, model: todo::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        model.delete(conn).await?;
        Ok(())
    }
}
