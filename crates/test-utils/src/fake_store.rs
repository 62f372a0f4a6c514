use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use taskdeps::errors::StoreError;
use taskdeps::model::{DependencyEdge, Task};
use taskdeps::store::{DependencyStore, MemoryStore, StoreFuture};
use taskdeps::types::TaskId;

/// One call made against a [`FakeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    ListTasks,
    ListDependencies,
    Create { task: TaskId, depends_on: TaskId },
    Delete { task: TaskId, depends_on: TaskId },
}

/// Which operations should fail, as a backend outage would.
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub list: bool,
    pub create: bool,
    pub delete: bool,
}

/// A store that:
/// - keeps its records in a [`MemoryStore`]
/// - records every call it receives
/// - can be told to fail selected operations with a backend error.
#[derive(Debug, Clone)]
pub struct FakeStore {
    inner: MemoryStore,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failures: Arc<Mutex<Failures>>,
}

impl FakeStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(Failures::default())),
        }
    }

    /// The shared backing store, e.g. to mutate records out of band.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than listing.
    pub fn mutations(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, StoreCall::Create { .. } | StoreCall::Delete { .. }))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn set_failures(&self, failures: Failures) {
        *self.failures.lock().unwrap() = failures;
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failures(&self) -> Failures {
        *self.failures.lock().unwrap()
    }
}

fn outage<'a, T: Send + 'a>(op: &str) -> StoreFuture<'a, T> {
    let err = StoreError::Backend(anyhow!("backend unavailable during {op}"));
    Box::pin(std::future::ready(Err(err)))
}

impl DependencyStore for FakeStore {
    fn list_tasks(&self) -> StoreFuture<'_, Vec<Task>> {
        self.record(StoreCall::ListTasks);
        if self.failures().list {
            return outage("list_tasks");
        }
        self.inner.list_tasks()
    }

    fn list_dependencies(&self) -> StoreFuture<'_, Vec<DependencyEdge>> {
        self.record(StoreCall::ListDependencies);
        if self.failures().list {
            return outage("list_dependencies");
        }
        self.inner.list_dependencies()
    }

    fn create_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        self.record(StoreCall::Create { task, depends_on });
        if self.failures().create {
            return outage("create_dependency");
        }
        self.inner.create_dependency(task, depends_on)
    }

    fn delete_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        self.record(StoreCall::Delete { task, depends_on });
        if self.failures().delete {
            return outage("delete_dependency");
        }
        self.inner.delete_dependency(task, depends_on)
    }
}
