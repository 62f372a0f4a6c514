// src/dag/mod.rs

//! Dependency graph representation and cycle-safety rules.
//!
//! - [`graph`] holds the adjacency index, reachability and cycle detection.
//! - [`validate`] contains the pure edge-proposal and removal checks.
//! - [`export`] renders a snapshot as Graphviz DOT.

pub mod export;
pub mod graph;
pub mod validate;

pub use export::to_dot;
pub use graph::DependencyGraph;
pub use validate::{ProposedEdge, propose_edge, resolve_removal, valid_targets_for};
