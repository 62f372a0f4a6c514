// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::trace;

use crate::model::DependencyEdge;
use crate::types::TaskId;

static NO_NEIGHBOURS: BTreeSet<TaskId> = BTreeSet::new();

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct TaskNode {
    /// Tasks this one depends on (`task -> depends_on`).
    deps: BTreeSet<TaskId>,
    /// Tasks that depend on this one.
    dependents: BTreeSet<TaskId>,
}

/// Which way to follow edges during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// From a task to the tasks it depends on.
    Dependencies,
    /// From a task to the tasks that depend on it.
    Dependents,
}

/// Adjacency index over a snapshot's tasks, keyed by task id.
///
/// Edge `(A, B)` means "A depends on B". Neighbour sets are sets, so
/// duplicate records for the same ordered pair collapse into one edge.
///
/// Nothing here assumes the edges are acyclic: every traversal carries a
/// visited set, so a bad snapshot produces a finite answer instead of a hang.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<TaskId, TaskNode>,
}

impl DependencyGraph {
    /// Build the index from the task ids and edges of a snapshot.
    ///
    /// Edges whose endpoints are not in `task_ids` are ignored.
    pub fn build(task_ids: impl IntoIterator<Item = TaskId>, edges: &[DependencyEdge]) -> Self {
        let mut nodes: BTreeMap<TaskId, TaskNode> = task_ids
            .into_iter()
            .map(|id| (id, TaskNode::default()))
            .collect();

        for edge in edges {
            if !nodes.contains_key(&edge.task) || !nodes.contains_key(&edge.depends_on) {
                continue;
            }
            if let Some(node) = nodes.get_mut(&edge.task) {
                node.deps.insert(edge.depends_on);
            }
            if let Some(node) = nodes.get_mut(&edge.depends_on) {
                node.dependents.insert(edge.task);
            }
        }

        Self { nodes }
    }

    /// All task ids, in ascending order.
    pub fn tasks(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.nodes.contains_key(&task)
    }

    /// Number of distinct `(task, depends_on)` pairs.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.deps.len()).sum()
    }

    /// Immediate dependencies of a task.
    pub fn dependencies_of(&self, task: TaskId) -> &BTreeSet<TaskId> {
        self.nodes
            .get(&task)
            .map(|n| &n.deps)
            .unwrap_or(&NO_NEIGHBOURS)
    }

    /// Immediate dependents of a task.
    pub fn dependents_of(&self, task: TaskId) -> &BTreeSet<TaskId> {
        self.nodes
            .get(&task)
            .map(|n| &n.dependents)
            .unwrap_or(&NO_NEIGHBOURS)
    }

    /// Every task that transitively depends on `task`.
    ///
    /// If `task` were made to depend on any member of this set, the new edge
    /// would close a loop. The result never contains `task` itself, even
    /// when the snapshot already has a cycle through it.
    pub fn reachable_dependents(&self, task: TaskId) -> BTreeSet<TaskId> {
        self.walk(task, Direction::Dependents)
    }

    /// Every task that `task` transitively depends on.
    pub fn transitive_dependencies(&self, task: TaskId) -> BTreeSet<TaskId> {
        self.walk(task, Direction::Dependencies)
    }

    /// Whether adding the edge `task -> depends_on` would make the graph
    /// cyclic.
    pub fn would_create_cycle(&self, task: TaskId, depends_on: TaskId) -> bool {
        task == depends_on || self.reachable_dependents(task).contains(&depends_on)
    }

    /// Return the members of one cycle, if the graph has any.
    ///
    /// Self-loops count. Members are sorted by id.
    pub fn find_cycle(&self) -> Option<Vec<TaskId>> {
        let graph = self.to_graphmap();

        for mut component in tarjan_scc(&graph) {
            let cyclic = match component.as_slice() {
                [only] => graph.contains_edge(*only, *only),
                _ => true,
            };
            if cyclic {
                component.sort_unstable();
                return Some(component);
            }
        }

        None
    }

    pub fn is_acyclic(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// Convert to a `petgraph` graph map with edges `task -> depends_on`.
    pub(crate) fn to_graphmap(&self) -> DiGraphMap<TaskId, ()> {
        let mut graph = DiGraphMap::new();
        for (&id, node) in &self.nodes {
            graph.add_node(id);
            for &dep in &node.deps {
                graph.add_edge(id, dep, ());
            }
        }
        graph
    }

    fn neighbours(&self, task: TaskId, direction: Direction) -> &BTreeSet<TaskId> {
        match direction {
            Direction::Dependencies => self.dependencies_of(task),
            Direction::Dependents => self.dependents_of(task),
        }
    }

    fn walk(&self, start: TaskId, direction: Direction) -> BTreeSet<TaskId> {
        let mut stack: Vec<TaskId> = self.neighbours(start, direction).iter().copied().collect();
        let mut found: BTreeSet<TaskId> = BTreeSet::new();

        while let Some(id) = stack.pop() {
            if id == start || !found.insert(id) {
                continue;
            }
            stack.extend(self.neighbours(id, direction).iter().copied());
        }

        trace!(task = start, ?direction, reached = found.len(), "graph walk finished");
        found
    }
}
