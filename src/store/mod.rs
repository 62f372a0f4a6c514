// src/store/mod.rs

//! Persistence collaborators.
//!
//! The graph model never touches storage directly; it talks to a
//! [`DependencyStore`]. This keeps the model testable with a fake store and
//! lets the CLI plug in a file-backed one.
//!
//! - [`board`] holds the shared in-memory record set and its mutation rules.
//! - [`memory`] is an in-process store around a [`Board`].
//! - [`file`] persists the board to a TOML or JSON file.

pub mod board;
pub mod file;
pub mod memory;

pub use board::Board;
pub use file::FileStore;
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;

use crate::errors::StoreResult;
use crate::model::{DependencyEdge, Task};
use crate::types::TaskId;

/// Boxed future returned by every store operation.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// The four operations the graph model needs from the backend.
///
/// Implementations do not have to keep the edge set acyclic; the model
/// validates proposals before calling `create_dependency`.
pub trait DependencyStore: Send {
    /// All tasks currently known to the store.
    fn list_tasks(&self) -> StoreFuture<'_, Vec<Task>>;

    /// All dependency records, already normalized.
    fn list_dependencies(&self) -> StoreFuture<'_, Vec<DependencyEdge>>;

    /// Record that `task` depends on `depends_on`.
    fn create_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()>;

    /// Remove the record(s) stating that `task` depends on `depends_on`.
    fn delete_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()>;
}
