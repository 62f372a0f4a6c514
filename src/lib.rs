// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod store;
pub mod types;

use std::fmt::Write as _;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::default_board_path;
use crate::dag::to_dot;
use crate::engine::{DependencyGraphModel, EdgeRef};
use crate::errors::{GraphError, TaskdepsError};
use crate::model::Snapshot;
use crate::store::FileStore;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - board file resolution
/// - the file-backed store
/// - the dependency-graph model
/// - the requested subcommand
pub async fn run(args: CliArgs) -> Result<()> {
    let path = args.file.clone().unwrap_or_else(default_board_path);
    info!(path = ?path, "using board file");

    let store = FileStore::new(path);
    let mut model = DependencyGraphModel::load(store).await?;

    match args.command {
        Command::Show => print!("{}", render_listing(&model.snapshot())),
        Command::Check => {
            let snapshot = model.snapshot();
            print!("{}", render_check(&snapshot));
            if let Some(members) = snapshot.graph().find_cycle() {
                return Err(TaskdepsError::DagCycle(format!(
                    "cycle detected among tasks {members:?}"
                ))
                .into());
            }
        }
        Command::Targets { source } => {
            let snapshot = model.snapshot();
            if !snapshot.contains_task(source) {
                return Err(GraphError::MissingSelection.into());
            }
            for task in model.valid_targets_for(source) {
                println!("{}\t{}", task.id, task.name);
            }
        }
        Command::Dependents { task } => {
            let snapshot = model.snapshot();
            for id in model.reachable_dependents(task) {
                let name = snapshot.task(id).map(|t| t.name.as_str()).unwrap_or("?");
                println!("{id}\t{name}");
            }
        }
        Command::Add { task, depends_on } => {
            let added = model.add_edge(Some(task), Some(depends_on)).await?;
            if added.already_exists {
                println!("Dependency already exists: {task} -> {depends_on}");
            } else {
                println!("Dependency added: {task} -> {depends_on}");
            }
        }
        Command::Remove {
            task,
            depends_on,
            edge,
        } => {
            let target = match (edge, task, depends_on) {
                (Some(id), _, _) => EdgeRef::Id(id),
                (None, Some(task), Some(depends_on)) => EdgeRef::Pair { task, depends_on },
                _ => return Err(GraphError::MissingSelection.into()),
            };
            model.remove_edge(target).await?;
            println!("Dependency removed: {target}");
        }
        Command::Dot => print!("{}", to_dot(&model.snapshot())),
    }

    debug!("command complete");
    Ok(())
}

/// Human-readable listing of a snapshot: tasks, then dependencies.
pub fn render_listing(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "tasks ({}):", snapshot.tasks().len());
    for task in snapshot.tasks() {
        let _ = writeln!(
            out,
            "  #{} {} [{}, priority {}]",
            task.id,
            task.name,
            task.status_label(),
            task.priority
        );
        if let (Some(start), end) = (&task.start_date, &task.end_date) {
            let _ = writeln!(
                out,
                "      dates: {} .. {}",
                start,
                end.as_deref().unwrap_or("open")
            );
        }
        let deps = snapshot.graph().dependencies_of(task.id);
        if !deps.is_empty() {
            let _ = writeln!(out, "      depends on: {:?}", deps);
        }
    }

    let _ = writeln!(out, "dependencies ({}):", snapshot.edges().len());
    for edge in snapshot.edges() {
        let _ = writeln!(out, "  {edge}");
    }

    out
}

/// Summary printed by `taskdeps check`.
pub fn render_check(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let graph = snapshot.graph();

    let _ = writeln!(
        out,
        "{} tasks, {} dependencies ({} distinct)",
        snapshot.tasks().len(),
        snapshot.edges().len(),
        graph.edge_count()
    );
    if snapshot.dropped_edges() > 0 {
        let _ = writeln!(
            out,
            "{} dependencies reference unknown tasks and were ignored",
            snapshot.dropped_edges()
        );
    }
    match graph.find_cycle() {
        Some(members) => {
            let _ = writeln!(out, "cycle: {members:?}");
        }
        None => {
            let _ = writeln!(out, "no cycles");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyEdge, Task};

    fn snapshot() -> Snapshot {
        let mut design = Task::new(1, "Design");
        design.start_date = Some("2025-01-06".to_string());
        Snapshot::new(
            vec![design, Task::new(2, "Build")],
            vec![DependencyEdge::new(1, 2, 1), DependencyEdge::new(2, 3, 1)],
        )
    }

    #[test]
    fn listing_shows_tasks_and_edges() {
        let out = render_listing(&snapshot());
        assert!(out.contains("tasks (2):"));
        assert!(out.contains("#1 Design [in-progress, priority Medium]"));
        assert!(out.contains("dates: 2025-01-06 .. open"));
        assert!(out.contains("depends on: {1}"));
        assert!(out.contains("#1: 2 -> 1"));
    }

    #[test]
    fn check_reports_dropped_records() {
        let out = render_check(&snapshot());
        assert!(out.contains("2 tasks, 1 dependencies (1 distinct)"));
        assert!(out.contains("1 dependencies reference unknown tasks"));
        assert!(out.contains("no cycles"));
    }
}
