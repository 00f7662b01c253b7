//! Show command handler.
//!
//! Displays a single task's progress together with its write-up.

use crate::aggregate::task_breakdown;
use crate::config::Config;
use crate::content::ContentRegistry;
use crate::error::{LearnboardError, Result};
use crate::output::print_task_detail;
use crate::snapshot::ProgressSnapshot;
use std::path::Path;

/// Display `task_id` from the snapshot at `file`.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(LearnboardError::UnknownTask)` if the snapshot has no such task
pub fn show_command(config: &Config, file: &Path, task_id: &str) -> Result<()> {
    let snapshot = ProgressSnapshot::load(&config.resolve_input(file))?;
    let rows = task_breakdown(&snapshot.tasks, &snapshot.outcomes);
    let row = rows
        .iter()
        .find(|r| r.task_id == task_id)
        .ok_or_else(|| LearnboardError::UnknownTask(task_id.to_string()))?;

    let registry = match config.content_dir() {
        Some(dir) => ContentRegistry::load(&dir)?,
        None => ContentRegistry::new(),
    };

    print_task_detail(row, registry.get(task_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "projectId": "redis",
        "tasks": [{"taskId": "ping", "taskName": "PING", "position": 1, "totalTests": 1}]
    }"#;

    #[test]
    fn test_show_known_task_with_content() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("redis.json"), SNAPSHOT).unwrap();
        std::fs::create_dir(dir.path().join("content")).unwrap();
        std::fs::write(dir.path().join("content").join("ping.md"), "# PING").unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        show_command(&config, Path::new("redis.json"), "ping").unwrap();
    }

    #[test]
    fn test_show_unknown_task_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("redis.json");
        std::fs::write(&file, SNAPSHOT).unwrap();

        let err = show_command(&Config::default(), &file, "nope").unwrap_err();
        assert!(matches!(err, LearnboardError::UnknownTask(_)));
    }
}
