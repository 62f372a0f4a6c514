// src/errors.rs

//! Crate-wide error types.
//!
//! - [`GraphError`] is what the dependency-graph model returns to its caller.
//! - [`StoreError`] is what a [`crate::store::DependencyStore`] returns; the
//!   model passes it through untouched as [`GraphError::Persistence`].
//! - [`TaskdepsError`] covers loading board files and the CLI.

use thiserror::Error;

use crate::types::{EdgeId, TaskId};

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("A task cannot depend on itself")]
    SelfDependency,

    #[error("Please select both a task and the task it depends on")]
    MissingSelection,

    #[error(
        "Task {depends_on} already depends on task {task}; adding this dependency would create a cycle"
    )]
    CyclicDependency { task: TaskId, depends_on: TaskId },

    #[error("No such dependency: {0}")]
    NotFound(String),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl GraphError {
    /// `true` for the failures detected locally against the snapshot, before
    /// any store call is made.
    pub fn is_validation(&self) -> bool {
        !matches!(self, GraphError::Persistence(_))
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Task not found in store: {0}")]
    UnknownTask(TaskId),

    #[error("Dependency not found in store: task {task} -> {depends_on}")]
    MissingEdge { task: TaskId, depends_on: TaskId },

    #[error("Store rejected request: {0}")]
    Rejected(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum TaskdepsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("Duplicate dependency id: {0}")]
    DuplicateEdge(EdgeId),

    #[error("Cycle detected in dependency graph: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for TaskdepsError {
    fn from(err: StoreError) -> Self {
        TaskdepsError::Graph(GraphError::Persistence(err))
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskdepsError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
