// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{BoardFile, RawBoardFile};
use crate::dag::DependencyGraph;
use crate::errors::{Result, TaskdepsError};
use crate::types::InvalidSnapshotPolicy;

impl TryFrom<RawBoardFile> for BoardFile {
    type Error = TaskdepsError;

    fn try_from(raw: RawBoardFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_board(&raw)?;
        Ok(BoardFile::new_unchecked(raw.config, raw.tasks, raw.dependencies))
    }
}

fn validate_raw_board(board: &RawBoardFile) -> Result<()> {
    ensure_unique_ids(board)?;
    validate_dependencies(board)?;
    validate_dag(board)?;
    Ok(())
}

fn ensure_unique_ids(board: &RawBoardFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in &board.tasks {
        if !seen.insert(task.id) {
            return Err(TaskdepsError::DuplicateTask(task.id));
        }
    }

    let mut seen = HashSet::new();
    for edge in &board.dependencies {
        if !seen.insert(edge.id) {
            return Err(TaskdepsError::DuplicateEdge(edge.id));
        }
    }
    Ok(())
}

/// Report a problem according to `[config].on_invalid`.
fn flag(policy: InvalidSnapshotPolicy, problem: TaskdepsError) -> Result<()> {
    match policy {
        InvalidSnapshotPolicy::Reject => Err(problem),
        InvalidSnapshotPolicy::Warn => {
            warn!(%problem, "board file problem; continuing");
            Ok(())
        }
    }
}

fn validate_dependencies(board: &RawBoardFile) -> Result<()> {
    let policy = board.config.on_invalid;
    let known: HashSet<_> = board.tasks.iter().map(|t| t.id).collect();

    for edge in &board.dependencies {
        for endpoint in [edge.task, edge.depends_on] {
            if !known.contains(&endpoint) {
                flag(
                    policy,
                    TaskdepsError::ConfigError(format!(
                        "dependency #{} references unknown task {}",
                        edge.id, endpoint
                    )),
                )?;
            }
        }
        if edge.task == edge.depends_on {
            flag(
                policy,
                TaskdepsError::ConfigError(format!(
                    "dependency #{}: task {} cannot depend on itself",
                    edge.id, edge.task
                )),
            )?;
        }
    }
    Ok(())
}

fn validate_dag(board: &RawBoardFile) -> Result<()> {
    let graph = DependencyGraph::build(board.tasks.iter().map(|t| t.id), &board.dependencies);

    match graph.find_cycle() {
        None => Ok(()),
        Some(members) => flag(
            board.config.on_invalid,
            TaskdepsError::DagCycle(format!(
                "cycle detected among tasks {:?}",
                members
            )),
        ),
    }
}
