#![allow(dead_code)]

use std::io::Write;

use tempfile::{Builder, NamedTempFile};

pub use taskdeps_test_utils::builders;
pub use taskdeps_test_utils::{init_tracing, with_timeout};

/// Write `contents` to a temporary board file with the given extension
/// (`"toml"` or `"json"`).
pub fn board_file(contents: &str, ext: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("board")
        .suffix(&format!(".{ext}"))
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file
}
