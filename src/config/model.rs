// src/config/model.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{DependencyEdge, Task};
use crate::store::Board;
use crate::types::InvalidSnapshotPolicy;

/// Board file as read from disk, before validation.
///
/// ```toml
/// [config]
/// on_invalid = "warn"
///
/// [[task]]
/// id = 1
/// name = "Design"
/// priority = 3
///
/// [[task]]
/// id = 2
/// name = "Build"
///
/// [[dependency]]
/// id = 1
/// task = 2
/// depends_on = 1
/// ```
///
/// All sections are optional. JSON files use the same shape; the
/// REST-style keys `tasks` / `dependencies` are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBoardFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default, rename = "task", alias = "tasks")]
    pub tasks: Vec<Task>,

    #[serde(default, rename = "dependency", alias = "dependencies")]
    pub dependencies: Vec<DependencyEdge>,
}

/// Validated board file. Construct through `TryFrom<RawBoardFile>`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardFile {
    pub config: ConfigSection,

    #[serde(rename = "task")]
    pub tasks: Vec<Task>,

    #[serde(rename = "dependency")]
    pub dependencies: Vec<DependencyEdge>,
}

impl BoardFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        tasks: Vec<Task>,
        dependencies: Vec<DependencyEdge>,
    ) -> Self {
        Self {
            config,
            tasks,
            dependencies,
        }
    }

    pub fn into_parts(self) -> (ConfigSection, Board) {
        (self.config, Board::new(self.tasks, self.dependencies))
    }

    /// Reassemble a file from records produced by a [`Board`] mutation.
    ///
    /// Board mutations keep ids unique and endpoints known, so this skips
    /// validation.
    pub fn from_parts(config: ConfigSection, board: Board) -> Self {
        Self::new_unchecked(config, board.tasks, board.dependencies)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSection {
    /// `"warn"` (default) or `"reject"`: how to treat dangling edges,
    /// self-dependencies and cycles found on load.
    #[serde(default)]
    pub on_invalid: InvalidSnapshotPolicy,
}

/// On-disk encoding of a board file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFormat {
    Toml,
    Json,
}

impl BoardFormat {
    /// `.json` selects JSON; anything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BoardFormat::Json,
            _ => BoardFormat::Toml,
        }
    }
}
