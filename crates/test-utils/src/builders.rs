#![allow(dead_code)]

use taskdeps::model::{DependencyEdge, Snapshot, Task};
use taskdeps::store::{Board, MemoryStore};
use taskdeps::types::{Priority, TaskId};

/// Builder for a set of tasks and dependency records.
///
/// Edge ids are assigned in insertion order starting at 1.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    tasks: Vec<Task>,
    edges: Vec<DependencyEdge>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tasks named `task <id>` for each id.
    pub fn with_tasks(mut self, ids: &[TaskId]) -> Self {
        for &id in ids {
            self.tasks.push(TaskBuilder::new(id).build());
        }
        self
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Add the record "`task` depends on `depends_on`".
    pub fn depends(mut self, task: TaskId, depends_on: TaskId) -> Self {
        let id = self.edges.len() as i64 + 1;
        self.edges.push(DependencyEdge::new(id, task, depends_on));
        self
    }

    pub fn build_board(self) -> Board {
        Board::new(self.tasks, self.edges)
    }

    pub fn build_snapshot(self) -> Snapshot {
        Snapshot::new(self.tasks, self.edges)
    }

    pub fn build_store(self) -> MemoryStore {
        MemoryStore::new(self.build_board())
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: TaskId) -> Self {
        Self {
            task: Task::new(id, format!("task {id}")),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn completed(mut self, val: bool) -> Self {
        self.task.is_completed = val;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn dates(mut self, start: &str, end: Option<&str>) -> Self {
        self.task.start_date = Some(start.to_string());
        self.task.end_date = end.map(str::to_string);
        self
    }

    pub fn project(mut self, project: i64) -> Self {
        self.task.project = Some(project);
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
