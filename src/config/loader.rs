// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{BoardFile, BoardFormat, RawBoardFile};
use crate::errors::Result;

/// Environment variable overriding [`default_board_path`].
pub const BOARD_PATH_ENV: &str = "TASKDEPS_FILE";

/// Parse board file contents without semantic validation.
pub fn parse_board(contents: &str, format: BoardFormat) -> Result<RawBoardFile> {
    let raw = match format {
        BoardFormat::Toml => toml::from_str(contents)?,
        BoardFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(raw)
}

/// Serialize a board file in the given format.
pub fn render_board(board: &BoardFile, format: BoardFormat) -> Result<String> {
    let out = match format {
        BoardFormat::Toml => toml::to_string(board)?,
        BoardFormat::Json => serde_json::to_string_pretty(board)?,
    };
    Ok(out)
}

/// Load a board file from a given path and return the raw `RawBoardFile`.
///
/// This only performs deserialization; it does **not** check ids, endpoints
/// or cycles. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBoardFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_board(&contents, BoardFormat::from_path(path))
}

/// Load a board file from path and validate it.
///
/// - Reads TOML or JSON (by extension).
/// - Normalizes every dependency record into one edge shape.
/// - Checks for duplicate ids, unknown endpoints, self-dependencies and
///   cycles, honouring `[config].on_invalid`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BoardFile> {
    let raw = load_from_path(&path)?;
    let board = BoardFile::try_from(raw)?;
    Ok(board)
}

/// Write a board file, creating parent directories as needed.
pub fn save_to_path(path: impl AsRef<Path>, board: &BoardFile) -> Result<()> {
    let path = path.as_ref();
    let contents = render_board(board, BoardFormat::from_path(path))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Board file used when `--file` is not given: `$TASKDEPS_FILE`, or
/// `Taskdeps.toml` in the current working directory.
pub fn default_board_path() -> PathBuf {
    std::env::var_os(BOARD_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Taskdeps.toml"))
}
