// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{EdgeId, TaskId};

/// Command-line arguments for `taskdeps`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdeps",
    version,
    about = "Inspect and edit task dependencies without creating cycles.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the board file (TOML, or JSON by extension).
    ///
    /// Default: `$TASKDEPS_FILE`, else `Taskdeps.toml` in the current
    /// working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDEPS_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List tasks and dependencies.
    Show,

    /// Report dropped records and cycles; fails if the graph is cyclic.
    Check,

    /// List the tasks SOURCE may depend on without creating a cycle.
    Targets {
        source: TaskId,
    },

    /// List every task that (transitively) depends on TASK.
    Dependents {
        task: TaskId,
    },

    /// Make TASK depend on DEPENDS_ON.
    Add {
        task: TaskId,
        depends_on: TaskId,
    },

    /// Remove a dependency, by endpoints or by `--edge ID`.
    Remove {
        #[arg(required_unless_present = "edge")]
        task: Option<TaskId>,
        #[arg(required_unless_present = "edge")]
        depends_on: Option<TaskId>,
        #[arg(long, value_name = "ID", conflicts_with_all = ["task", "depends_on"])]
        edge: Option<EdgeId>,
    },

    /// Print the graph in Graphviz DOT format.
    Dot,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_accepts_pair_or_edge_id() {
        let args = CliArgs::try_parse_from(["taskdeps", "remove", "2", "1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Remove { task: Some(2), depends_on: Some(1), edge: None }
        ));

        let args = CliArgs::try_parse_from(["taskdeps", "remove", "--edge", "7"]).unwrap();
        assert!(matches!(args.command, Command::Remove { edge: Some(7), .. }));

        assert!(CliArgs::try_parse_from(["taskdeps", "remove", "--edge", "7", "2", "1"]).is_err());
        assert!(CliArgs::try_parse_from(["taskdeps", "remove"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args =
            CliArgs::try_parse_from(["taskdeps", "show", "--file", "b.json", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("b.json")));
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
