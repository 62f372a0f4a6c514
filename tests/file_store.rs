// tests/file_store.rs

mod common;
use crate::common::{board_file, init_tracing};

use taskdeps::config::load_and_validate;
use taskdeps::engine::{DependencyGraphModel, EdgeRef};
use taskdeps::errors::{GraphError, StoreError};
use taskdeps::store::{DependencyStore, FileStore};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const BOARD: &str = r#"
[config]
on_invalid = "warn"

[[task]]
id = 1
name = "Design"
priority = 3
is_completed = true

[[task]]
id = 2
name = "Build"
start_date = "2025-02-01"

[[task]]
id = 3
name = "Release"

[[dependency]]
id = 1
task = 2
depends_on = 1
"#;

#[tokio::test]
async fn add_and_remove_persist_to_disk() -> TestResult {
    init_tracing();
    let file = board_file(BOARD, "toml");
    let mut model = DependencyGraphModel::load(FileStore::new(file.path())).await?;

    model.add_edge(Some(3), Some(2)).await?;
    let on_disk = load_and_validate(file.path())?;
    assert_eq!(on_disk.dependencies.len(), 2);
    assert!(on_disk.dependencies.iter().any(|e| e.connects(3, 2) && e.id == 2));

    // Untouched records and config survive the rewrite.
    assert_eq!(on_disk.tasks.len(), 3);
    assert!(on_disk.tasks[0].is_completed);
    assert_eq!(on_disk.tasks[1].start_date.as_deref(), Some("2025-02-01"));

    model
        .remove_edge(EdgeRef::Pair { task: 2, depends_on: 1 })
        .await?;
    let on_disk = load_and_validate(file.path())?;
    assert_eq!(on_disk.dependencies.len(), 1);
    assert_eq!(model.snapshot().edges().len(), 1);
    Ok(())
}

#[tokio::test]
async fn cycle_is_refused_before_writing() -> TestResult {
    let file = board_file(BOARD, "toml");
    let before = std::fs::read_to_string(file.path())?;
    let mut model = DependencyGraphModel::load(FileStore::new(file.path())).await?;

    let res = model.add_edge(Some(1), Some(2)).await;
    assert!(matches!(res, Err(GraphError::CyclicDependency { .. })));
    assert_eq!(std::fs::read_to_string(file.path())?, before);
    Ok(())
}

#[tokio::test]
async fn creating_existing_pair_leaves_file_alone() -> TestResult {
    let file = board_file(BOARD, "toml");
    let before = std::fs::read_to_string(file.path())?;
    let mut store = FileStore::new(file.path());

    store.create_dependency(2, 1).await?;
    assert_eq!(std::fs::read_to_string(file.path())?, before);
    Ok(())
}

#[tokio::test]
async fn store_level_errors() -> TestResult {
    let file = board_file(BOARD, "toml");
    let mut store = FileStore::new(file.path());

    assert!(matches!(
        store.create_dependency(1, 9).await,
        Err(StoreError::UnknownTask(9))
    ));
    assert!(matches!(
        store.delete_dependency(1, 2).await,
        Err(StoreError::MissingEdge { task: 1, depends_on: 2 })
    ));
    Ok(())
}

#[tokio::test]
async fn json_board_with_rest_field_names() -> TestResult {
    init_tracing();
    let file = board_file(
        r#"{
            "tasks": [
                {"id": 10, "name": "API", "isCompleted": false, "priority": 2, "projectId": 1},
                {"id": 11, "name": "UI", "project": {"id": 1, "name": "Web"}}
            ],
            "dependencies": [
                {"id": 5, "taskId": 11, "dependentOnTaskId": 10, "created_at": "2025-01-01T10:00:00Z"}
            ]
        }"#,
        "json",
    );
    let mut model = DependencyGraphModel::load(FileStore::new(file.path())).await?;

    assert_eq!(model.snapshot().edges()[0].task, 11);
    assert!(model.valid_targets_for(10).is_empty());

    model.remove_edge(EdgeRef::Id(5)).await?;
    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
    assert_eq!(raw["dependency"], serde_json::json!([]));
    assert_eq!(raw["task"][1]["project"], serde_json::json!(1));
    Ok(())
}

#[tokio::test]
async fn missing_file_is_a_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nope.toml"));

    let err = DependencyGraphModel::load(store).await.unwrap_err();
    assert!(matches!(err, GraphError::Persistence(StoreError::Backend(_))));
    assert!(err.to_string().contains("reading board file"));
}
