// src/model/edge.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::RawRef;
use crate::types::{EdgeId, TaskId};

/// A directed dependency: `task` cannot proceed until `depends_on` is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDependency")]
pub struct DependencyEdge {
    pub id: EdgeId,
    pub task: TaskId,
    pub depends_on: TaskId,
}

impl DependencyEdge {
    pub fn new(id: EdgeId, task: TaskId, depends_on: TaskId) -> Self {
        Self {
            id,
            task,
            depends_on,
        }
    }

    pub fn connects(&self, task: TaskId, depends_on: TaskId) -> bool {
        self.task == task && self.depends_on == depends_on
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {} -> {}", self.id, self.task, self.depends_on)
    }
}

/// Every field spelling the backend has used for a dependency record.
#[derive(Debug, Deserialize)]
struct RawDependency {
    id: EdgeId,
    #[serde(alias = "taskId", alias = "task_id")]
    task: RawRef,
    #[serde(
        alias = "dependent_on_task",
        alias = "dependentOnTaskId",
        alias = "dependsOnTaskId",
        alias = "depends_on_task"
    )]
    depends_on: RawRef,
}

impl From<RawDependency> for DependencyEdge {
    fn from(raw: RawDependency) -> Self {
        Self {
            id: raw.id,
            task: raw.task.id(),
            depends_on: raw.depends_on.id(),
        }
    }
}

/// How a caller names an edge to remove: by record id, or by its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRef {
    Id(EdgeId),
    Pair { task: TaskId, depends_on: TaskId },
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeRef::Id(id) => write!(f, "dependency #{id}"),
            EdgeRef::Pair { task, depends_on } => {
                write!(f, "task {task} depending on task {depends_on}")
            }
        }
    }
}
