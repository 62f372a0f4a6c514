// src/config/mod.rs

//! Board file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML/JSON-backed data model (`model.rs`).
//! - Load and save a board file (`loader.rs`).
//! - Validate ids, endpoints and acyclicity on load (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_board_path, load_and_validate, load_from_path, save_to_path};
pub use model::{BoardFile, BoardFormat, ConfigSection, RawBoardFile};
