// src/model/task.rs

use serde::{Deserialize, Serialize};

use crate::model::RawRef;
use crate::types::{Priority, TaskId};

/// A unit of work, as owned by the backend store. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTask")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub is_completed: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<i64>,
}

impl Task {
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_completed: false,
            priority: Priority::default(),
            start_date: None,
            end_date: None,
            description: String::new(),
            project: None,
        }
    }

    /// Status label used in listings: `completed` or `in-progress`.
    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "completed"
        } else {
            "in-progress"
        }
    }
}

/// Wire shape accepted for tasks (snake_case or camelCase, project as id or
/// object).
#[derive(Debug, Deserialize)]
struct RawTask {
    id: TaskId,
    name: String,
    #[serde(default, alias = "isCompleted")]
    is_completed: bool,
    #[serde(default)]
    priority: Priority,
    #[serde(default, alias = "startDate")]
    start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    end_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "projectId")]
    project: Option<RawRef>,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            is_completed: raw.is_completed,
            priority: raw.priority,
            start_date: raw.start_date,
            end_date: raw.end_date,
            description: raw.description.unwrap_or_default(),
            project: raw.project.map(RawRef::id),
        }
    }
}
