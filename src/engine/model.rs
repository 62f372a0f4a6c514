// src/engine/model.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dag::validate::{propose_edge, resolve_removal, valid_targets_for};
use crate::dag::ProposedEdge;
use crate::errors::GraphError;
use crate::model::{EdgeRef, Snapshot, Task};
use crate::store::DependencyStore;
use crate::types::TaskId;

/// The dependency-graph view's model: the latest snapshot plus the store it
/// came from.
///
/// Reads (`snapshot`, `valid_targets_for`, `propose_edge`) are synchronous
/// and run against whatever snapshot was installed last. Mutations take
/// `&mut self`, so only one can be in flight per model; each one validates,
/// calls the store once, and on success installs a freshly fetched snapshot.
/// On any failure the previous snapshot stays in place.
pub struct DependencyGraphModel<S> {
    store: S,
    snapshot: Arc<Snapshot>,
}

impl<S> std::fmt::Debug for DependencyGraphModel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraphModel")
            .field("tasks", &self.snapshot.tasks().len())
            .field("edges", &self.snapshot.edges().len())
            .finish()
    }
}

impl<S: DependencyStore> DependencyGraphModel<S> {
    /// Create a model and fetch its first snapshot.
    pub async fn load(store: S) -> Result<Self, GraphError> {
        let snapshot = fetch_snapshot(&store).await?;
        Ok(Self {
            store,
            snapshot: Arc::new(snapshot),
        })
    }

    /// Create a model with an empty snapshot; call [`refresh`](Self::refresh)
    /// to populate it.
    pub fn with_empty_snapshot(store: S) -> Self {
        Self {
            store,
            snapshot: Arc::new(Snapshot::default()),
        }
    }

    /// Current snapshot, for rendering.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-fetch tasks and dependencies and replace the snapshot wholesale.
    pub async fn refresh(&mut self) -> Result<(), GraphError> {
        let snapshot = fetch_snapshot(&self.store).await?;
        self.snapshot = Arc::new(snapshot);
        Ok(())
    }

    /// Every task that transitively depends on `task`.
    pub fn reachable_dependents(&self, task: TaskId) -> BTreeSet<TaskId> {
        self.snapshot.graph().reachable_dependents(task)
    }

    /// Tasks that `source` may be made to depend on without creating a cycle.
    pub fn valid_targets_for(&self, source: TaskId) -> Vec<Task> {
        valid_targets_for(&self.snapshot, source)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Validate `source -> target` without touching the store.
    pub fn propose_edge(
        &self,
        source: Option<TaskId>,
        target: Option<TaskId>,
    ) -> Result<ProposedEdge, GraphError> {
        propose_edge(&self.snapshot, source, target)
    }

    /// Validate, create `source -> target` in the store, then refresh.
    pub async fn add_edge(
        &mut self,
        source: Option<TaskId>,
        target: Option<TaskId>,
    ) -> Result<ProposedEdge, GraphError> {
        let proposal = self.propose_edge(source, target)?;

        if proposal.already_exists {
            debug!(
                task = proposal.task,
                depends_on = proposal.depends_on,
                "dependency already present in snapshot; submitting anyway"
            );
        }

        self.store
            .create_dependency(proposal.task, proposal.depends_on)
            .await
            .inspect_err(|err| warn!(%err, "store failed to create dependency"))?;

        info!(
            task = proposal.task,
            depends_on = proposal.depends_on,
            "dependency added"
        );
        self.refresh().await?;
        Ok(proposal)
    }

    /// Delete an edge from the store, then refresh.
    ///
    /// Fails with [`GraphError::NotFound`] if the edge is not in the current
    /// snapshot.
    pub async fn remove_edge(&mut self, edge: EdgeRef) -> Result<(), GraphError> {
        let found = resolve_removal(&self.snapshot, edge)?;

        self.store
            .delete_dependency(found.task, found.depends_on)
            .await
            .inspect_err(|err| warn!(%err, "store failed to delete dependency"))?;

        info!(edge = found.id, task = found.task, depends_on = found.depends_on, "dependency removed");
        self.refresh().await
    }

    /// React to a task being deleted elsewhere: its edges are gone from the
    /// store too, so resynchronize.
    pub async fn task_deleted(&mut self, task: TaskId) -> Result<(), GraphError> {
        debug!(task, "task deleted externally; refreshing snapshot");
        self.refresh().await
    }
}

async fn fetch_snapshot<S: DependencyStore>(store: &S) -> Result<Snapshot, GraphError> {
    let tasks = store.list_tasks().await?;
    let edges = store.list_dependencies().await?;
    Ok(Snapshot::new(tasks, edges))
}
