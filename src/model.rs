//! Data contracts handed over by the fetch layer.
//!
//! Everything here is plain data: outcomes and task rows feed the
//! [`aggregate`](crate::aggregate) module, catalog rows feed
//! [`variants`](crate::variants).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result of a single test for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
    #[serde(alias = "notRun", alias = "not-run")]
    NotRun,
}

impl TestStatus {
    /// Ranking used when two outcomes for one test carry the same timestamp.
    pub(crate) fn severity(self) -> u8 {
        match self {
            TestStatus::NotRun => 0,
            TestStatus::Passed => 1,
            TestStatus::Failed => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub test_id: String,
    pub task_id: String,
    pub project_id: String,
    pub status: TestStatus,
    pub timestamp: DateTime<Utc>,
}

/// One task as the aggregator sees it: identity, ordering and the
/// authoritative expected test count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub task_id: String,
    pub task_name: String,
    pub position: u32,
    pub total_tests: u32,
}

/// A task row as delivered by the fetch layer.
///
/// Some endpoints pre-aggregate the counts; when `passed_tests` and
/// `failed_tests` are both present they take precedence over counting
/// raw outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: String,
    pub task_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: u32,
    pub total_tests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed_tests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_tests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_run_tests: Option<u32>,
}

impl TaskRecord {
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            task_id: self.task_id.clone(),
            task_name: self.task_name.clone(),
            position: self.position,
            total_tests: self.total_tests,
        }
    }

    /// Returns `(passed, failed)` when the row carries pre-aggregated counts.
    pub fn reported_counts(&self) -> Option<(u32, u32)> {
        match (self.passed_tests, self.failed_tests) {
            (Some(passed), Some(failed)) => Some((passed, failed)),
            _ => None,
        }
    }

    pub fn has_partial_counts(&self) -> bool {
        let present = [self.passed_tests, self.failed_tests, self.not_run_tests]
            .iter()
            .filter(|c| c.is_some())
            .count();
        // not_run alone is meaningless without the other two
        present > 0 && self.reported_counts().is_none()
    }
}

/// One row of the project catalog: a learning project restricted to one
/// technology stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVariant {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(
        default,
        deserialize_with = "deserialize_technologies",
        serialize_with = "serialize_technologies"
    )]
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_ran: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_owned: bool,
}

/// Split a comma-separated technology list, dropping blanks.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn deserialize_technologies<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(parse_technologies).unwrap_or_default())
}

fn serialize_technologies<S>(technologies: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&technologies.join(","))
}
