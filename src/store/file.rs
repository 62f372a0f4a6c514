// src/store/file.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::config::loader::{parse_board, render_board};
use crate::config::{BoardFile, BoardFormat};
use crate::errors::{StoreError, StoreResult};
use crate::model::{DependencyEdge, Task};
use crate::store::{Board, DependencyStore, StoreFuture};
use crate::types::TaskId;

/// Store backed by a board file on disk.
///
/// Every operation re-reads the file, so edits made by other processes are
/// picked up on the next refresh. Mutations rewrite the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: BoardFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = BoardFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_board(&self) -> StoreResult<BoardFile> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading board file {:?}", self.path))?;

        let raw = parse_board(&contents, self.format).map_err(anyhow::Error::from)?;
        let board = BoardFile::try_from(raw).map_err(anyhow::Error::from)?;
        Ok(board)
    }

    async fn write_board(&self, board: &BoardFile) -> StoreResult<()> {
        let contents = render_board(board, self.format).map_err(anyhow::Error::from)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("writing board file {:?}", self.path))?;
        debug!(path = ?self.path, "board file written");
        Ok(())
    }

    /// Read, apply `change` to the records, and write back if it succeeded.
    async fn update<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Board) -> StoreResult<bool>,
    {
        let file = self.read_board().await?;
        let (config, mut board) = file.into_parts();

        if change(&mut board)? {
            self.write_board(&BoardFile::from_parts(config, board)).await?;
        }
        Ok(())
    }
}

impl DependencyStore for FileStore {
    fn list_tasks(&self) -> StoreFuture<'_, Vec<Task>> {
        Box::pin(async move { Ok(self.read_board().await?.tasks) })
    }

    fn list_dependencies(&self) -> StoreFuture<'_, Vec<DependencyEdge>> {
        Box::pin(async move { Ok(self.read_board().await?.dependencies) })
    }

    fn create_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.update(|board| board.create_dependency(task, depends_on))
                .await
        })
    }

    fn delete_dependency(&mut self, task: TaskId, depends_on: TaskId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.update(|board| board.delete_dependency(task, depends_on).map(|()| true))
                .await
        })
    }
}
