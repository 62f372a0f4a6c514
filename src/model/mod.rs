// src/model/mod.rs

//! Task / dependency data model and the ingestion boundary.
//!
//! The backend emits dependency records in several shapes (`task` vs
//! `taskId`, endpoints as bare ids or as nested `{ id }` objects). All of
//! them are normalized into [`DependencyEdge`] during deserialization, so the
//! rest of the crate only ever sees one shape.
//!
//! - [`task`] defines [`Task`].
//! - [`edge`] defines [`DependencyEdge`] and [`EdgeRef`].
//! - [`snapshot`] holds the immutable [`Snapshot`] the graph layer works on.

pub mod edge;
pub mod snapshot;
pub mod task;

pub use edge::{DependencyEdge, EdgeRef};
pub use snapshot::Snapshot;
pub use task::Task;

use serde::Deserialize;

use crate::types::TaskId;

/// A reference to another record as the backend may serialize it: either
/// the bare id or the nested object carrying it.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawRef {
    Id(TaskId),
    Object { id: TaskId },
}

impl RawRef {
    pub(crate) fn id(self) -> TaskId {
        match self {
            RawRef::Id(id) | RawRef::Object { id } => id,
        }
    }
}
