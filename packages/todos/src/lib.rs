// ABOUTME: Todo item model and storage layer
// ABOUTME: Defines the TodoStore capability and its SQLite and in-memory implementations

pub mod storage;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

// Re-export main types
pub use storage::{SqliteTodoStore, TodoStore};
pub use types::Todo;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryTodoStore;

pub use todoapp_storage::{StorageError, StorageResult};
