// ABOUTME: In-memory TodoStore used to exercise handlers without a database
// ABOUTME: Ordered map keyed by id with a monotonic counter for id assignment

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::storage::TodoStore;
use super::types::Todo;
use todoapp_storage::{StorageError, StorageResult};

#[derive(Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    counter: i64,
}

/// Same contract as `SqliteTodoStore`, held in process memory.
#[derive(Default)]
pub struct InMemoryTodoStore {
    inner: RwLock<Inner>,
    failure: Option<String>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `todos`; the counter continues after the
    /// highest seeded id.
    pub fn seeded(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: BTreeMap<i64, Todo> = todos.into_iter().map(|t| (t.id, t)).collect();
        let counter = todos.keys().next_back().copied().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner { todos, counter }),
            failure: None,
        }
    }

    /// Store whose every operation fails with `StorageError::Database(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            inner: RwLock::default(),
            failure: Some(message.into()),
        }
    }

    /// Snapshot of stored todos in id order.
    pub async fn snapshot(&self) -> Vec<Todo> {
        self.inner.read().await.todos.values().cloned().collect()
    }

    fn check(&self) -> StorageResult<()> {
        match &self.failure {
            Some(message) => Err(StorageError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create_todo(&self, mut todo: Todo) -> StorageResult<Todo> {
        self.check()?;
        let mut inner = self.inner.write().await;
        inner.counter += 1;
        todo.id = inner.counter;
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get_todos(&self) -> StorageResult<Vec<Todo>> {
        self.check()?;
        Ok(self.snapshot().await)
    }

    async fn get_todo_by_id(&self, id: i64) -> StorageResult<Todo> {
        self.check()?;
        self.inner
            .read()
            .await
            .todos
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn update_todo(&self, todo: Todo) -> StorageResult<Todo> {
        self.check()?;
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.todos.get_mut(&todo.id) {
            *existing = todo.clone();
        }
        Ok(todo)
    }

    async fn delete_todo(&self, id: i64) -> StorageResult<()> {
        self.check()?;
        self.inner.write().await.todos.remove(&id);
        Ok(())
    }
}
