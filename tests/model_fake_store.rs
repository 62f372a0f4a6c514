// tests/model_fake_store.rs

mod common;
use crate::common::builders::BoardBuilder;
use crate::common::{init_tracing, with_timeout};

use std::collections::BTreeSet;

use taskdeps::engine::{DependencyGraphModel, EdgeRef};
use taskdeps::errors::{GraphError, StoreError};
use taskdeps::types::TaskId;
use taskdeps_test_utils::fake_store::{FakeStore, Failures, StoreCall};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Tasks 1..=4; 2 depends on 1, 3 depends on 2.
fn chain_store() -> FakeStore {
    FakeStore::new(
        BoardBuilder::new()
            .with_tasks(&[1, 2, 3, 4])
            .depends(2, 1)
            .depends(3, 2)
            .build_store(),
    )
}

fn edge_pairs(model: &DependencyGraphModel<FakeStore>) -> BTreeSet<(TaskId, TaskId)> {
    model
        .snapshot()
        .edges()
        .iter()
        .map(|e| (e.task, e.depends_on))
        .collect()
}

#[tokio::test]
async fn load_fetches_initial_snapshot() -> TestResult {
    init_tracing();
    let store = chain_store();

    let model = with_timeout(DependencyGraphModel::load(store.clone())).await?;

    assert_eq!(model.snapshot().tasks().len(), 4);
    assert_eq!(edge_pairs(&model), BTreeSet::from([(2, 1), (3, 2)]));
    assert_eq!(
        store.calls(),
        vec![StoreCall::ListTasks, StoreCall::ListDependencies]
    );
    Ok(())
}

#[tokio::test]
async fn add_edge_creates_then_refreshes() -> TestResult {
    init_tracing();
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;
    store.clear_calls();

    let proposal = with_timeout(model.add_edge(Some(4), Some(3))).await?;

    assert_eq!((proposal.task, proposal.depends_on), (4, 3));
    assert_eq!(
        store.calls(),
        vec![
            StoreCall::Create { task: 4, depends_on: 3 },
            StoreCall::ListTasks,
            StoreCall::ListDependencies,
        ]
    );
    assert!(edge_pairs(&model).contains(&(4, 3)));
    assert_eq!(model.reachable_dependents(1), BTreeSet::from([2, 3, 4]));
    Ok(())
}

#[tokio::test]
async fn rejected_proposals_never_reach_the_store() -> TestResult {
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;

    let cyclic = model.add_edge(Some(1), Some(3)).await;
    assert!(matches!(
        cyclic,
        Err(GraphError::CyclicDependency { task: 1, depends_on: 3 })
    ));

    let selfdep = model.add_edge(Some(2), Some(2)).await;
    assert!(matches!(selfdep, Err(GraphError::SelfDependency)));

    let missing = model.add_edge(None, Some(2)).await;
    assert!(matches!(missing, Err(GraphError::MissingSelection)));

    let unknown = model.add_edge(Some(1), Some(42)).await;
    assert!(matches!(unknown, Err(GraphError::MissingSelection)));

    assert!(store.mutations().is_empty());
    Ok(())
}

#[tokio::test]
async fn remove_edge_by_pair_and_by_id() -> TestResult {
    init_tracing();
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;

    model
        .remove_edge(EdgeRef::Pair { task: 3, depends_on: 2 })
        .await?;
    assert_eq!(edge_pairs(&model), BTreeSet::from([(2, 1)]));

    let id = model.snapshot().edges()[0].id;
    model.remove_edge(EdgeRef::Id(id)).await?;
    assert!(model.snapshot().edges().is_empty());

    assert_eq!(
        store.mutations(),
        vec![
            StoreCall::Delete { task: 3, depends_on: 2 },
            StoreCall::Delete { task: 2, depends_on: 1 },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn removing_unknown_edge_is_not_found() -> TestResult {
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;

    let res = model
        .remove_edge(EdgeRef::Pair { task: 1, depends_on: 2 })
        .await;
    assert!(matches!(res, Err(GraphError::NotFound(_))));

    let res = model.remove_edge(EdgeRef::Id(77)).await;
    assert!(matches!(res, Err(GraphError::NotFound(_))));

    assert!(store.mutations().is_empty());
    Ok(())
}

#[tokio::test]
async fn store_failure_passes_through_and_keeps_snapshot() -> TestResult {
    init_tracing();
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;
    let before = model.snapshot();

    store.set_failures(Failures {
        create: true,
        delete: true,
        ..Failures::default()
    });

    let err = model.add_edge(Some(4), Some(1)).await.unwrap_err();
    assert!(!err.is_validation());
    match &err {
        GraphError::Persistence(StoreError::Backend(inner)) => {
            assert!(inner.to_string().contains("create_dependency"));
        }
        other => panic!("expected Persistence(Backend), got {other:?}"),
    }
    assert_eq!(err.to_string(), "backend unavailable during create_dependency");

    let err = model
        .remove_edge(EdgeRef::Pair { task: 2, depends_on: 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::Persistence(_)));

    assert!(std::sync::Arc::ptr_eq(&before, &model.snapshot()));
    Ok(())
}

#[tokio::test]
async fn refresh_failure_after_mutation_keeps_old_snapshot() -> TestResult {
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;

    store.set_failures(Failures {
        list: true,
        ..Failures::default()
    });

    let res = model.add_edge(Some(4), Some(1)).await;
    assert!(matches!(res, Err(GraphError::Persistence(_))));

    // The store has the edge; the model still shows the old snapshot until
    // a refresh succeeds.
    assert!(!edge_pairs(&model).contains(&(4, 1)));
    store.set_failures(Failures::default());
    model.refresh().await?;
    assert!(edge_pairs(&model).contains(&(4, 1)));
    Ok(())
}

#[tokio::test]
async fn external_task_deletion_resynchronizes() -> TestResult {
    init_tracing();
    let store = chain_store();
    let mut model = DependencyGraphModel::load(store.clone()).await?;

    // Nothing may be made a dependency of 1 except 4 while 2 and 3 hang off it.
    let targets: Vec<TaskId> = model.valid_targets_for(1).iter().map(|t| t.id).collect();
    assert_eq!(targets, vec![4]);

    store.inner().delete_task(2)?;
    model.task_deleted(2).await?;

    let snap = model.snapshot();
    assert!(snap.task(2).is_none());
    assert!(snap.edges().is_empty());
    let targets: Vec<TaskId> = model.valid_targets_for(1).iter().map(|t| t.id).collect();
    assert_eq!(targets, vec![3, 4]);
    Ok(())
}

#[tokio::test]
async fn empty_model_fills_on_refresh() -> TestResult {
    let store = chain_store();
    let mut model = DependencyGraphModel::with_empty_snapshot(store.clone());

    assert!(model.snapshot().is_empty());
    assert!(matches!(
        model.propose_edge(Some(4), Some(1)),
        Err(GraphError::MissingSelection)
    ));

    model.refresh().await?;
    assert!(model.propose_edge(Some(4), Some(1)).is_ok());
    Ok(())
}
