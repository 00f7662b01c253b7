use crate::error::{LearnboardError, Result, ValidationError};
use crate::model::{ProjectVariant, TaskRecord, TestOutcome};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tasks and raw outcomes for one project, as fetched for a progress view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub outcomes: Vec<TestOutcome>,
}

/// The global catalog plus the rows the current user owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub catalog: Vec<ProjectVariant>,
    #[serde(default)]
    pub owned: Vec<ProjectVariant>,
}

impl ProgressSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        load_validated(path, Self::from_json)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, ValidationError> {
        let snapshot: Self = parse(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        if self.project_name.is_empty() {
            &self.project_id
        } else {
            &self.project_name
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.project_id.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "projectId",
            });
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.task_id.is_empty() {
                return Err(ValidationError::EmptyField { field: "taskId" });
            }
            if !seen.insert(task.task_id.as_str()) {
                return Err(ValidationError::DuplicateTask(task.task_id.clone()));
            }
            validate_counts(task)?;
        }

        for outcome in &self.outcomes {
            if outcome.test_id.is_empty() {
                return Err(ValidationError::EmptyField { field: "testId" });
            }
            if outcome.task_id.is_empty() {
                return Err(ValidationError::EmptyField { field: "taskId" });
            }
        }
        Ok(())
    }
}

fn validate_counts(task: &TaskRecord) -> std::result::Result<(), ValidationError> {
    if task.has_partial_counts() {
        return Err(ValidationError::PartialCounts(task.task_id.clone()));
    }
    if let Some((passed, failed)) = task.reported_counts() {
        let not_run = task
            .not_run_tests
            .unwrap_or_else(|| task.total_tests.saturating_sub(passed.saturating_add(failed)));
        if u64::from(passed) + u64::from(failed) + u64::from(not_run) != u64::from(task.total_tests)
        {
            return Err(ValidationError::CountMismatch {
                task_id: task.task_id.clone(),
                passed,
                failed,
                not_run,
                total: task.total_tests,
            });
        }
    }
    Ok(())
}

impl CatalogSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        load_validated(path, Self::from_json)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, ValidationError> {
        let snapshot: Self = parse(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for variant in &self.catalog {
            check_variant(variant)?;
            if !seen.insert(variant.project_id.as_str()) {
                return Err(ValidationError::DuplicateProject(
                    variant.project_id.clone(),
                ));
            }
        }
        for variant in &self.owned {
            check_variant(variant)?;
        }
        Ok(())
    }
}

fn check_variant(variant: &ProjectVariant) -> std::result::Result<(), ValidationError> {
    if variant.project_id.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "projectId",
        });
    }
    if variant.name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    Ok(())
}

fn parse<T: DeserializeOwned>(content: &str) -> std::result::Result<T, ValidationError> {
    serde_json::from_str(content).map_err(|e| ValidationError::Malformed(e.to_string()))
}

fn load_validated<T>(
    path: &Path,
    from_json: impl FnOnce(&str) -> std::result::Result<T, ValidationError>,
) -> Result<T> {
    if !path.exists() {
        return Err(LearnboardError::SnapshotNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "loading snapshot");
    from_json(&content).map_err(|source| LearnboardError::InvalidSnapshot {
        path: path.to_path_buf(),
        source,
    })
}
