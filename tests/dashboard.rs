//! End-to-end checks of the public API against the documented scenarios.

use chrono::{TimeZone, Utc};
use learnboard::aggregate::task_breakdown;
use learnboard::{
    group_projects, select_variant, summarize_project, summarize_task, CatalogSnapshot,
    ProgressSnapshot, ProjectVariant, SessionStore, TaskStatus, TaskSummary, TestOutcome,
    TestStatus,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn outcomes(task_id: &str, statuses: &[TestStatus]) -> Vec<TestOutcome> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| TestOutcome {
            test_id: format!("{}-{}", task_id, i),
            task_id: task_id.to_string(),
            project_id: "proj".to_string(),
            status: *status,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, i as u32).unwrap(),
        })
        .collect()
}

fn task(task_id: &str, total: u32) -> TaskSummary {
    TaskSummary {
        task_id: task_id.to_string(),
        task_name: task_id.to_uppercase(),
        position: 1,
        total_tests: total,
    }
}

#[test]
fn partial_run_with_failure_is_not_attempted() {
    use TestStatus::*;
    let progress = summarize_task(&task("t", 5), &outcomes("t", &[Passed, Passed, Passed, Failed]));
    assert_eq!(
        (progress.passed, progress.failed, progress.not_run),
        (3, 1, 1)
    );
    assert_eq!(progress.status, TaskStatus::NotAttempted);
}

#[test]
fn fully_passed_task_reaches_one_hundred_percent() {
    use TestStatus::*;
    let results = outcomes("t", &[Passed, Passed, Passed]);
    assert_eq!(summarize_task(&task("t", 3), &results).status, TaskStatus::Passed);
    assert_eq!(summarize_project(&[task("t", 3)], &results).percent, 100);
}

#[test]
fn empty_task_does_not_dilute_project_percent() {
    use TestStatus::*;
    let results = outcomes("a", &[Passed; 5]);
    let project = summarize_project(&[task("a", 5), task("b", 0)], &results);
    assert_eq!((project.passed, project.total, project.percent), (5, 5, 100));
}

#[test]
fn owned_variant_is_default_and_pin_overrides_it() {
    let catalog = CatalogSnapshot::from_json(
        r#"{
            "catalog": [
                {"projectId": "a", "name": "Lib", "createdAt": "2024-01-01T00:00:00Z"},
                {"projectId": "b", "name": "Lib", "createdAt": "2023-01-01T00:00:00Z"}
            ],
            "owned": [
                {"projectId": "b", "name": "Lib", "createdAt": "2023-01-01T00:00:00Z", "lastRan": "2024-02-01T00:00:00Z"}
            ]
        }"#,
    )
    .unwrap();

    let groups = group_projects(&catalog.catalog, &catalog.owned);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].selected().project_id, "b");
    assert_eq!(select_variant(&groups[0], Some("a")).project_id, "a");
    assert_eq!(
        select_variant(&groups[0], Some("nonexistent-id")).project_id,
        "b"
    );
}

#[test]
fn grouping_partitions_the_whole_catalog() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let all: Vec<ProjectVariant> = ["Lib", "Cache", "Lib", "Queue", "Cache"]
        .iter()
        .enumerate()
        .map(|(i, name)| ProjectVariant {
            project_id: format!("p{}", i),
            name: name.to_string(),
            difficulty: String::new(),
            technologies: Vec::new(),
            created_at: at,
            last_ran: None,
            is_owned: false,
        })
        .collect();

    let groups = group_projects(&all, &[]);
    let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(sizes.iter().sum::<usize>(), all.len());
}

#[test]
fn pinned_selection_survives_reload_and_logout_clears_it() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path().to_path_buf());

    store
        .update(|s| {
            s.selections.pin("Lib", "a");
        })
        .unwrap();
    assert_eq!(store.init_on_load().unwrap().selections.pinned("Lib"), Some("a"));

    store.clear_on_logout().unwrap();
    assert_eq!(store.init_on_load().unwrap().selections.pinned("Lib"), None);
}

#[test]
fn snapshot_mixes_reported_and_raw_counts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(
        &path,
        r#"{
            "projectId": "kv",
            "projectName": "Key-value store",
            "tasks": [
                {"taskId": "persist", "taskName": "Persistence", "position": 2, "totalTests": 4,
                 "passedTests": 4, "failedTests": 0, "notRunTests": 0},
                {"taskId": "get", "taskName": "GET", "position": 1, "totalTests": 2}
            ],
            "outcomes": [
                {"testId": "g1", "taskId": "get", "projectId": "kv", "status": "passed", "timestamp": "2024-05-01T10:00:00Z"},
                {"testId": "g2", "taskId": "get", "projectId": "kv", "status": "failed", "timestamp": "2024-05-01T10:00:00Z"},
                {"testId": "g2", "taskId": "get", "projectId": "kv", "status": "passed", "timestamp": "2024-05-02T10:00:00Z"},
                {"testId": "x1", "taskId": "retired", "projectId": "kv", "status": "failed", "timestamp": "2024-05-01T10:00:00Z"}
            ]
        }"#,
    )
    .unwrap();

    let snapshot = ProgressSnapshot::load(&path).unwrap();
    let rows = task_breakdown(&snapshot.tasks, &snapshot.outcomes);
    assert_eq!(rows[0].task_id, "get");
    assert_eq!(rows[0].progress.status, TaskStatus::Passed);
    assert!(rows[1].reported);

    let project = learnboard::aggregate::summarize_records(&snapshot.tasks, &snapshot.outcomes);
    assert_eq!((project.passed, project.total, project.percent), (6, 6, 100));
}
