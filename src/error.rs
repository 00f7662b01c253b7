use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LearnboardError {
    #[error("Snapshot file not found: {0}")]
    SnapshotNotFound(PathBuf),

    #[error("Invalid snapshot {path}: {source}")]
    InvalidSnapshot {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Unknown project group: {0}")]
    UnknownGroup(String),

    #[error("Project {project_id} is not a variant of {group}")]
    NotInGroup { group: String, project_id: String },

    #[error("Session file error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shape errors in data handed over by the fetch layer.
///
/// Raised while loading snapshots so that bad rows never turn into
/// nonsensical percentages further down.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("duplicate task id '{0}'")]
    DuplicateTask(String),

    #[error("duplicate project id '{0}' in catalog")]
    DuplicateProject(String),

    #[error(
        "task '{task_id}' reports {passed} passed + {failed} failed + {not_run} not run, \
         expected {total} tests"
    )]
    CountMismatch {
        task_id: String,
        passed: u32,
        failed: u32,
        not_run: u32,
        total: u32,
    },

    #[error("task '{0}' supplies only some of its test counts")]
    PartialCounts(String),
}

pub type Result<T> = std::result::Result<T, LearnboardError>;
