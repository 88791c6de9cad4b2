// ABOUTME: Todo storage capability and its SQLite implementation
// ABOUTME: One SQL statement per operation against the todos table

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use super::types::Todo;
use todoapp_storage::{StorageError, StorageResult};

/// Persistence operations the HTTP layer depends on.
///
/// Implementations must assign ids on create, return `get_todos` in ascending
/// id order, and report a missing row on `get_todo_by_id` as
/// [`StorageError::NotFound`]. Update and delete of a missing id succeed.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert `todo` (its id is ignored) and return it with the assigned id.
    async fn create_todo(&self, todo: Todo) -> StorageResult<Todo>;

    async fn get_todos(&self) -> StorageResult<Vec<Todo>>;

    async fn get_todo_by_id(&self, id: i64) -> StorageResult<Todo>;

    /// Overwrite title and completed of the row with `todo.id`.
    async fn update_todo(&self, todo: Todo) -> StorageResult<Todo>;

    async fn delete_todo(&self, id: i64) -> StorageResult<()>;
}

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL DEFAULT '',
        completed BOOLEAN NOT NULL DEFAULT 0
    )
"#;

pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the todos table if it does not exist yet.
    pub async fn initialize(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        debug!("Todos table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Convert a database row to a Todo
    fn row_to_todo(row: &sqlx::sqlite::SqliteRow) -> Result<Todo, StorageError> {
        Ok(Todo {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            title: row.try_get("title").map_err(StorageError::Sqlx)?,
            completed: row.try_get("completed").map_err(StorageError::Sqlx)?,
        })
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn create_todo(&self, mut todo: Todo) -> StorageResult<Todo> {
        debug!("Creating todo (title: {})", todo.title);

        let id: i64 =
            sqlx::query_scalar("INSERT INTO todos (title, completed) VALUES (?, ?) RETURNING id")
                .bind(&todo.title)
                .bind(todo.completed)
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        todo.id = id;
        Ok(todo)
    }

    async fn get_todos(&self) -> StorageResult<Vec<Todo>> {
        debug!("Fetching todos");

        let mut rows = sqlx::query("SELECT id, title, completed FROM todos ORDER BY id")
            .fetch(&self.pool);

        let mut todos = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(StorageError::Sqlx)? {
            todos.push(Self::row_to_todo(&row)?);
        }

        Ok(todos)
    }

    async fn get_todo_by_id(&self, id: i64) -> StorageResult<Todo> {
        debug!("Fetching todo: {}", id);

        let row = sqlx::query("SELECT id, title, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Self::row_to_todo(&r),
            None => Err(StorageError::NotFound),
        }
    }

    async fn update_todo(&self, todo: Todo) -> StorageResult<Todo> {
        debug!("Updating todo: {}", todo.id);

        let result = sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(&todo.title)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            warn!("Update matched no todo with id {}", todo.id);
        }

        Ok(todo)
    }

    async fn delete_todo(&self, id: i64) -> StorageResult<()> {
        debug!("Deleting todo: {}", id);

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            warn!("Delete matched no todo with id {}", id);
        }

        Ok(())
    }
}
