//! Progress command handler.
//!
//! Shows per-task test results and the project completion percentage.

use super::OutputFormat;
use crate::aggregate::{summarize_records, task_breakdown, ProjectProgress, TaskRow};
use crate::config::Config;
use crate::error::Result;
use crate::output::print_project_progress;
use crate::snapshot::ProgressSnapshot;
use serde::Serialize;
use std::path::Path;

/// Everything the progress view displays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub project_id: String,
    pub project_name: String,
    pub tasks: Vec<TaskRow>,
    pub completion: ProjectProgress,
}

/// Compute the view for a loaded snapshot.
pub fn progress_view(snapshot: &ProgressSnapshot) -> ProgressView {
    ProgressView {
        project_id: snapshot.project_id.clone(),
        project_name: snapshot.display_name().to_string(),
        tasks: task_breakdown(&snapshot.tasks, &snapshot.outcomes),
        completion: summarize_records(&snapshot.tasks, &snapshot.outcomes),
    }
}

/// Display task progress for the snapshot at `file`.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(LearnboardError)` if the snapshot is missing or invalid
pub fn progress_command(config: &Config, file: &Path, format: OutputFormat) -> Result<()> {
    let snapshot = ProgressSnapshot::load(&config.resolve_input(file))?;
    let view = progress_view(&snapshot);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print_project_progress(
            &view.project_name,
            &view.tasks,
            &view.completion,
            usize::from(config.progress_bar_width),
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TaskStatus;
    use crate::error::LearnboardError;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "projectId": "redis",
        "tasks": [
            {"taskId": "set", "taskName": "SET", "position": 2, "totalTests": 2},
            {"taskId": "ping", "taskName": "PING", "position": 1, "totalTests": 1}
        ],
        "outcomes": [
            {"testId": "p1", "taskId": "ping", "projectId": "redis", "status": "passed", "timestamp": "2024-05-01T10:00:00Z"},
            {"testId": "s1", "taskId": "set", "projectId": "redis", "status": "failed", "timestamp": "2024-05-01T10:00:00Z"},
            {"testId": "s2", "taskId": "set", "projectId": "redis", "status": "passed", "timestamp": "2024-05-01T10:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_progress_view_orders_and_rolls_up() {
        let snapshot = ProgressSnapshot::from_json(SNAPSHOT).unwrap();
        let view = progress_view(&snapshot);

        assert_eq!(view.project_name, "redis");
        assert_eq!(view.tasks[0].task_id, "ping");
        assert_eq!(view.tasks[0].progress.status, TaskStatus::Passed);
        assert_eq!(view.tasks[1].progress.status, TaskStatus::Failed);
        assert_eq!(view.completion.passed, 2);
        assert_eq!(view.completion.total, 3);
        assert_eq!(view.completion.percent, 67);
    }

    #[test]
    fn test_progress_command_reads_from_data_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("redis.json"), SNAPSHOT).unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        progress_command(&config, Path::new("redis.json"), OutputFormat::Text).unwrap();
        progress_command(&config, Path::new("redis.json"), OutputFormat::Json).unwrap();
    }

    #[test]
    fn test_progress_command_missing_file() {
        let err = progress_command(
            &Config::default(),
            Path::new("/nonexistent/snapshot.json"),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(matches!(err, LearnboardError::SnapshotNotFound(_)));
    }
}
