// src/dag/export.rs

//! Graphviz DOT export of a snapshot.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::Snapshot;
use crate::types::TaskId;

/// Render the snapshot as a DOT digraph.
///
/// Nodes are labelled `#<id> <name>`; an arrow `A -> B` reads "A depends
/// on B". Duplicate edge records are drawn once.
pub fn to_dot(snapshot: &Snapshot) -> String {
    let mut graph: DiGraph<String, &str> = DiGraph::new();
    let mut index: HashMap<TaskId, NodeIndex> = HashMap::new();

    for task in snapshot.tasks() {
        if index.contains_key(&task.id) {
            continue;
        }
        let marker = if task.is_completed { " (done)" } else { "" };
        let node = graph.add_node(format!("#{} {}{}", task.id, task.name, marker));
        index.insert(task.id, node);
    }

    for id in snapshot.graph().tasks() {
        for &dep in snapshot.graph().dependencies_of(id) {
            if let (Some(&from), Some(&to)) = (index.get(&id), index.get(&dep)) {
                graph.add_edge(from, to, "");
            }
        }
    }

    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}
