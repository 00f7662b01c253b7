//! Completion aggregation.
//!
//! Turns flat per-test outcome lists into per-task and per-project
//! completion metrics. All functions are pure; callers recompute from
//! scratch whenever a fresh snapshot arrives.

use crate::model::{TaskRecord, TaskSummary, TestOutcome, TestStatus};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Task-level status derived from its test counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotAttempted,
    Failed,
    Passed,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotAttempted => "not attempted",
            TaskStatus::Failed => "failed",
            TaskStatus::Passed => "passed",
        }
    }
}

/// Counts for one task. `passed + failed + not_run` always equals the
/// task's expected total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    pub passed: u32,
    pub failed: u32,
    pub not_run: u32,
    pub status: TaskStatus,
}

impl TaskProgress {
    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.not_run
    }
}

/// Project-wide roll-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    pub passed: u64,
    pub total: u64,
    pub percent: u8,
}

/// A task paired with its progress, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub task_id: String,
    pub task_name: String,
    pub description: String,
    pub position: u32,
    pub total_tests: u32,
    pub progress: TaskProgress,
    /// Whether the counts came pre-aggregated from the fetch layer.
    pub reported: bool,
}

/// Derive the task status from clamped counts.
///
/// Insufficient runs are checked before failures, so a task that failed a
/// test but has not had every test run reports `NotAttempted`.
pub fn derive_status(passed: u32, failed: u32, total_tests: u32) -> TaskStatus {
    let runs = passed.saturating_add(failed);
    if runs == 0 || runs < total_tests {
        TaskStatus::NotAttempted
    } else if failed > 0 {
        TaskStatus::Failed
    } else {
        TaskStatus::Passed
    }
}

/// Rounded completion percentage. A zero total reports 0%.
pub fn completion_percent(passed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let passed = passed.min(total);
    ((passed * 100 + total / 2) / total) as u8
}

/// Summarise one task from raw outcomes.
///
/// Outcomes for other tasks are skipped. Duplicate rows for one test are
/// collapsed to the latest timestamp before counting.
pub fn summarize_task(task: &TaskSummary, outcomes: &[TestOutcome]) -> TaskProgress {
    let matching = outcomes.iter().filter(|o| o.task_id == task.task_id);
    tally(task.total_tests, matching)
}

/// Summarise a fetched task row, preferring its pre-aggregated counts.
pub fn summarize_record(record: &TaskRecord, outcomes: &[TestOutcome]) -> TaskProgress {
    match record.reported_counts() {
        Some((passed, failed)) => clamp(passed, failed, record.total_tests),
        None => summarize_task(&record.summary(), outcomes),
    }
}

/// Roll up every task of a project.
pub fn summarize_project(tasks: &[TaskSummary], outcomes: &[TestOutcome]) -> ProjectProgress {
    let by_task = index_outcomes(tasks.iter().map(|t| t.task_id.as_str()), outcomes);
    let per_task = tasks.iter().map(|task| {
        let progress = tally(
            task.total_tests,
            by_task.get(task.task_id.as_str()).into_iter().flatten().copied(),
        );
        (task.total_tests, progress.passed)
    });
    roll_up(per_task)
}

/// Roll up fetched task rows, mixing pre-aggregated and raw counts.
pub fn summarize_records(records: &[TaskRecord], outcomes: &[TestOutcome]) -> ProjectProgress {
    let rows = task_breakdown(records, outcomes);
    roll_up(rows.iter().map(|r| (r.total_tests, r.progress.passed)))
}

/// Per-task rows ordered by `position`, ties broken on `task_id`.
pub fn task_breakdown(records: &[TaskRecord], outcomes: &[TestOutcome]) -> Vec<TaskRow> {
    let by_task = index_outcomes(records.iter().map(|r| r.task_id.as_str()), outcomes);

    let mut rows: Vec<TaskRow> = records
        .iter()
        .map(|record| {
            let (progress, reported) = match record.reported_counts() {
                Some((passed, failed)) => (clamp(passed, failed, record.total_tests), true),
                None => (
                    tally(
                        record.total_tests,
                        by_task
                            .get(record.task_id.as_str())
                            .into_iter()
                            .flatten()
                            .copied(),
                    ),
                    false,
                ),
            };
            TaskRow {
                task_id: record.task_id.clone(),
                task_name: record.task_name.clone(),
                description: record.description.clone(),
                position: record.position,
                total_tests: record.total_tests,
                progress,
                reported,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
    rows
}

fn roll_up(per_task: impl Iterator<Item = (u32, u32)>) -> ProjectProgress {
    let (total, passed) = per_task.fold((0u64, 0u64), |(total, passed), (t, p)| {
        (total + u64::from(t), passed + u64::from(p))
    });
    ProjectProgress {
        passed,
        total,
        percent: completion_percent(passed, total),
    }
}

/// Bucket outcomes by known task id. Unknown task ids are dropped.
fn index_outcomes<'a, 'o>(
    task_ids: impl Iterator<Item = &'a str>,
    outcomes: &'o [TestOutcome],
) -> HashMap<&'o str, Vec<&'o TestOutcome>> {
    let known: HashSet<&str> = task_ids.collect();
    let mut by_task: HashMap<&str, Vec<&TestOutcome>> = HashMap::new();
    let mut ignored = 0usize;

    for outcome in outcomes {
        if known.contains(outcome.task_id.as_str()) {
            by_task
                .entry(outcome.task_id.as_str())
                .or_default()
                .push(outcome);
        } else {
            ignored += 1;
        }
    }

    if ignored > 0 {
        debug!(ignored, "skipping outcomes that reference unknown tasks");
    }
    by_task
}

fn tally<'o>(total_tests: u32, outcomes: impl Iterator<Item = &'o TestOutcome>) -> TaskProgress {
    let mut latest: HashMap<&str, &TestOutcome> = HashMap::new();
    for outcome in outcomes {
        latest
            .entry(outcome.test_id.as_str())
            .and_modify(|current| {
                if supersedes(outcome, *current) {
                    *current = outcome;
                }
            })
            .or_insert(outcome);
    }

    let (passed, failed) = latest
        .values()
        .fold((0u32, 0u32), |(p, f), outcome| match outcome.status {
            TestStatus::Passed => (p + 1, f),
            TestStatus::Failed => (p, f + 1),
            TestStatus::NotRun => (p, f),
        });

    clamp(passed, failed, total_tests)
}

// Ties on timestamp resolve by severity so input order never matters.
fn supersedes(candidate: &TestOutcome, current: &TestOutcome) -> bool {
    (candidate.timestamp, candidate.status.severity())
        > (current.timestamp, current.status.severity())
}

/// Fit counts into the expected total, keeping failures first.
fn clamp(passed: u32, failed: u32, total_tests: u32) -> TaskProgress {
    let failed = failed.min(total_tests);
    let passed = passed.min(total_tests - failed);
    TaskProgress {
        passed,
        failed,
        not_run: total_tests - passed - failed,
        status: derive_status(passed, failed, total_tests),
    }
}
