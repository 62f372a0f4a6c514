// src/engine/mod.rs

//! The dependency-graph model.
//!
//! The pure, synchronous rules (reachability, target filtering, proposal
//! validation) live in [`crate::dag`] and take a snapshot as a parameter.
//! [`model::DependencyGraphModel`] is the async shell around them: it owns
//! the current snapshot, calls the store, and swaps in a new snapshot after
//! every successful mutation.

pub mod model;

pub use crate::dag::ProposedEdge;
pub use crate::model::EdgeRef;
pub use model::DependencyGraphModel;
