// src/store/board.rs

use tracing::{debug, info};

use crate::errors::{StoreError, StoreResult};
use crate::model::{DependencyEdge, Task};
use crate::types::{EdgeId, TaskId};

/// The records a store holds: tasks and dependency edges.
///
/// Mutation rules follow the backend: creating an existing pair is a no-op,
/// both endpoints must exist, a task cannot depend on itself, and deleting
/// a task deletes its edges. Cycles are *not* checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub dependencies: Vec<DependencyEdge>,
}

impl Board {
    pub fn new(tasks: Vec<Task>, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            tasks,
            dependencies,
        }
    }

    fn has_task(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    fn next_edge_id(&self) -> EdgeId {
        self.dependencies.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Add `task -> depends_on`. Returns `false` if the pair already existed.
    pub fn create_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreResult<bool> {
        if task == depends_on {
            return Err(StoreError::Rejected(
                "A task cannot depend on itself".to_string(),
            ));
        }
        for id in [task, depends_on] {
            if !self.has_task(id) {
                return Err(StoreError::UnknownTask(id));
            }
        }

        if self.dependencies.iter().any(|e| e.connects(task, depends_on)) {
            debug!(task, depends_on, "dependency already exists");
            return Ok(false);
        }

        let edge = DependencyEdge::new(self.next_edge_id(), task, depends_on);
        info!(edge = edge.id, task, depends_on, "dependency created");
        self.dependencies.push(edge);
        Ok(true)
    }

    /// Remove every record for `task -> depends_on`.
    pub fn delete_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreResult<()> {
        let before = self.dependencies.len();
        self.dependencies.retain(|e| !e.connects(task, depends_on));

        if self.dependencies.len() == before {
            return Err(StoreError::MissingEdge { task, depends_on });
        }
        info!(task, depends_on, "dependency removed");
        Ok(())
    }

    /// Remove a task and every edge touching it.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        if !self.has_task(id) {
            return Err(StoreError::UnknownTask(id));
        }
        self.tasks.retain(|t| t.id != id);
        self.dependencies
            .retain(|e| e.task != id && e.depends_on != id);
        info!(task = id, "task deleted along with its dependencies");
        Ok(())
    }
}
