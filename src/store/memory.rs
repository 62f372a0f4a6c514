// src/store/memory.rs

use std::future::ready;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::errors::{StoreError, StoreResult};
use crate::model::{DependencyEdge, Task};
use crate::store::{Board, DependencyStore, StoreFuture};
use crate::types::TaskId;

/// In-process store. Clones share the same board, so a test (or another
/// part of the application) can change records behind the model's back.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Arc<Mutex<Board>>,
}

impl MemoryStore {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Board>> {
        self.board
            .lock()
            .map_err(|_| StoreError::Backend(anyhow!("memory store lock poisoned")))
    }

    /// Copy of the current records.
    pub fn board(&self) -> StoreResult<Board> {
        Ok(self.lock()?.clone())
    }

    /// Delete a task (and its edges), as another client of the backend might.
    pub fn delete_task(&self, id: TaskId) -> StoreResult<()> {
        self.lock()?.delete_task(id)
    }

    pub fn insert_task(&self, task: Task) -> StoreResult<()> {
        self.lock()?.tasks.push(task);
        Ok(())
    }
}

impl DependencyStore for MemoryStore {
    fn list_tasks(&self) -> StoreFuture<'_, Vec<Task>> {
        let result = self.lock().map(|b| b.tasks.clone());
        Box::pin(ready(result))
    }

    fn list_dependencies(&self) -> StoreFuture<'_, Vec<DependencyEdge>> {
        let result = self.lock().map(|b| b.dependencies.clone());
        Box::pin(ready(result))
    }

    fn create_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        let result = self
            .lock()
            .and_then(|mut b| b.create_dependency(task, depends_on))
            .map(|_| ());
        Box::pin(ready(result))
    }

    fn delete_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        let result = self
            .lock()
            .and_then(|mut b| b.delete_dependency(task, depends_on));
        Box::pin(ready(result))
    }
}
