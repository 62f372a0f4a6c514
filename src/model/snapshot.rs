// src/model/snapshot.rs

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dag::DependencyGraph;
use crate::model::{DependencyEdge, EdgeRef, Task};
use crate::types::{EdgeId, TaskId};

/// Immutable view of the store's tasks and dependencies at one point in
/// time, plus the adjacency index derived from them.
///
/// A snapshot is never edited; a refresh builds a new one and swaps it in.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    tasks: Vec<Task>,
    edges: Vec<DependencyEdge>,
    graph: DependencyGraph,
    dropped_edges: usize,
}

impl Snapshot {
    /// Build a snapshot from the two lists returned by the store.
    ///
    /// Edges that reference a task missing from `tasks` cannot be drawn or
    /// reasoned about, so they are dropped here.
    pub fn new(tasks: Vec<Task>, edges: Vec<DependencyEdge>) -> Self {
        let known: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
        let total = edges.len();

        let edges: Vec<DependencyEdge> = edges
            .into_iter()
            .filter(|edge| {
                let ok = known.contains(&edge.task) && known.contains(&edge.depends_on);
                if !ok {
                    warn!(
                        edge = edge.id,
                        task = edge.task,
                        depends_on = edge.depends_on,
                        "dependency references an unknown task; dropping from snapshot"
                    );
                }
                ok
            })
            .collect();

        let graph = DependencyGraph::build(known.iter().copied(), &edges);
        let dropped_edges = total - edges.len();

        debug!(
            tasks = tasks.len(),
            edges = edges.len(),
            dropped_edges,
            "built dependency snapshot"
        );

        Self {
            tasks,
            edges,
            graph,
            dropped_edges,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Number of store records left out because an endpoint was unknown.
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains_task(&self, id: TaskId) -> bool {
        self.graph.contains(id)
    }

    pub fn edge_by_id(&self, id: EdgeId) -> Option<&DependencyEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edge_between(&self, task: TaskId, depends_on: TaskId) -> Option<&DependencyEdge> {
        self.edges.iter().find(|e| e.connects(task, depends_on))
    }

    /// Look up an edge by whichever reference the caller holds.
    pub fn find_edge(&self, edge: EdgeRef) -> Option<&DependencyEdge> {
        match edge {
            EdgeRef::Id(id) => self.edge_by_id(id),
            EdgeRef::Pair { task, depends_on } => self.edge_between(task, depends_on),
        }
    }
}
