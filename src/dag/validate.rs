// src/dag/validate.rs

//! Pure edge validation over a [`Snapshot`].
//!
//! These functions hold no state: each call reads whatever snapshot it is
//! given and returns a plain value or a [`GraphError`]. The model in
//! [`crate::engine`] calls them before talking to the store.

use tracing::debug;

use crate::errors::GraphError;
use crate::model::{DependencyEdge, EdgeRef, Snapshot, Task};
use crate::types::TaskId;

/// An edge that passed validation and may be sent to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedEdge {
    pub task: TaskId,
    pub depends_on: TaskId,
    /// The snapshot already holds this exact pair.
    pub already_exists: bool,
}

/// Tasks that `source` may be made to depend on without closing a cycle.
///
/// Excludes `source` and every task that already (transitively) depends on
/// it. Order follows the snapshot's task list.
pub fn valid_targets_for(snapshot: &Snapshot, source: TaskId) -> Vec<&Task> {
    let blocked = snapshot.graph().reachable_dependents(source);

    snapshot
        .tasks()
        .iter()
        .filter(|task| task.id != source && !blocked.contains(&task.id))
        .collect()
}

/// Validate a proposed `source -> target` edge against the snapshot.
///
/// Checked in order: self-dependency, missing selection (unset or unknown
/// id), cycle.
pub fn propose_edge(
    snapshot: &Snapshot,
    source: Option<TaskId>,
    target: Option<TaskId>,
) -> Result<ProposedEdge, GraphError> {
    if let (Some(s), Some(t)) = (source, target) {
        if s == t {
            return Err(GraphError::SelfDependency);
        }
    }

    let (task, depends_on) = match (source, target) {
        (Some(s), Some(t)) if snapshot.contains_task(s) && snapshot.contains_task(t) => (s, t),
        _ => return Err(GraphError::MissingSelection),
    };

    if snapshot.graph().reachable_dependents(task).contains(&depends_on) {
        debug!(task, depends_on, "rejecting dependency that would close a cycle");
        return Err(GraphError::CyclicDependency { task, depends_on });
    }

    Ok(ProposedEdge {
        task,
        depends_on,
        already_exists: snapshot.edge_between(task, depends_on).is_some(),
    })
}

/// Resolve an edge reference to the record it names in the snapshot.
///
/// Removing an edge can never create a cycle, so the only failure is that
/// the edge is not there.
pub fn resolve_removal(snapshot: &Snapshot, edge: EdgeRef) -> Result<DependencyEdge, GraphError> {
    snapshot
        .find_edge(edge)
        .copied()
        .ok_or_else(|| GraphError::NotFound(edge.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ids: &[TaskId], pairs: &[(TaskId, TaskId)]) -> Snapshot {
        let tasks = ids.iter().map(|&id| Task::new(id, format!("t{id}"))).collect();
        let edges = pairs
            .iter()
            .enumerate()
            .map(|(i, &(t, d))| DependencyEdge::new(i as i64 + 1, t, d))
            .collect();
        Snapshot::new(tasks, edges)
    }

    fn ids(tasks: Vec<&Task>) -> Vec<TaskId> {
        tasks.into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn self_dependency_wins_over_everything() {
        let snap = snapshot(&[1], &[]);
        assert!(matches!(
            propose_edge(&snap, Some(1), Some(1)),
            Err(GraphError::SelfDependency)
        ));
        // Even for an id the snapshot does not know.
        assert!(matches!(
            propose_edge(&snap, Some(9), Some(9)),
            Err(GraphError::SelfDependency)
        ));
    }

    #[test]
    fn unset_or_unknown_selection_is_missing() {
        let snap = snapshot(&[1, 2], &[]);
        for (s, t) in [(None, Some(1)), (Some(1), None), (None, None), (Some(1), Some(7))] {
            assert!(matches!(
                propose_edge(&snap, s, t),
                Err(GraphError::MissingSelection)
            ));
        }
    }

    #[test]
    fn cycle_is_rejected() {
        let snap = snapshot(&[1, 2, 3], &[(2, 1), (3, 2)]);
        match propose_edge(&snap, Some(1), Some(3)) {
            Err(GraphError::CyclicDependency { task, depends_on }) => {
                assert_eq!((task, depends_on), (1, 3));
            }
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn existing_edge_is_flagged_not_rejected() {
        let snap = snapshot(&[1, 2], &[(2, 1)]);
        let proposal = propose_edge(&snap, Some(2), Some(1)).unwrap();
        assert!(proposal.already_exists);
    }

    #[test]
    fn valid_targets_exclude_source_and_dependents() {
        let snap = snapshot(&[1, 2, 3, 4], &[(2, 1), (3, 2)]);
        assert_eq!(ids(valid_targets_for(&snap, 1)), vec![4]);
        assert_eq!(ids(valid_targets_for(&snap, 3)), vec![1, 2, 4]);
        assert_eq!(ids(valid_targets_for(&snap, 9)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn removal_of_missing_edge_is_not_found() {
        let snap = snapshot(&[1, 2], &[(2, 1)]);
        assert_eq!(
            resolve_removal(&snap, EdgeRef::Pair { task: 2, depends_on: 1 })
                .unwrap()
                .id,
            1
        );
        assert!(matches!(
            resolve_removal(&snap, EdgeRef::Pair { task: 1, depends_on: 2 }),
            Err(GraphError::NotFound(_))
        ));
    }
}
