//! Progress display.
//!
//! Progress bars, per-task rows and the project roll-up line.

use crate::aggregate::{ProjectProgress, TaskRow, TaskStatus};

use super::colors::*;

/// Make a progress bar string.
pub fn make_progress_bar(completed: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return format!("{GRAY}{}{RESET}", "░".repeat(width));
    }
    let filled = (completed.min(total) * width) / total;
    let empty = width - filled;
    format!(
        "{GREEN}{}{RESET}{GRAY}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

/// Colored status label for a task.
pub fn status_badge(status: TaskStatus) -> String {
    let color = match status {
        TaskStatus::Passed => GREEN,
        TaskStatus::Failed => RED,
        TaskStatus::NotAttempted => GRAY,
    };
    format!("{color}[{}]{RESET}", status.label())
}

/// Counts column: `3 passed, 1 failed, 1 not run`.
pub fn format_counts(row: &TaskRow) -> String {
    let p = &row.progress;
    let mut parts = vec![format!("{} passed", p.passed)];
    if p.failed > 0 {
        parts.push(format!("{RED}{} failed{RESET}", p.failed));
    }
    if p.not_run > 0 {
        parts.push(format!("{} not run", p.not_run));
    }
    parts.join(", ")
}

/// Print the per-task table followed by the project roll-up.
pub fn print_project_progress(
    project_name: &str,
    rows: &[TaskRow],
    project: &ProjectProgress,
    bar_width: usize,
) {
    println!("{BOLD}{}{RESET}", project_name);
    println!("{GRAY}{}{RESET}", "-".repeat(57));

    if rows.is_empty() {
        println!("{GRAY}No tasks defined for this project.{RESET}");
    }

    for row in rows {
        let bar = make_progress_bar(
            row.progress.passed as usize,
            row.total_tests as usize,
            bar_width,
        );
        println!(
            "{BOLD}{:>3}.{RESET} {} {}",
            row.position,
            row.task_name,
            status_badge(row.progress.status)
        );
        println!(
            "     [{}] {}/{}  {GRAY}{}{RESET}",
            bar,
            row.progress.passed,
            row.total_tests,
            format_counts(row)
        );
    }

    println!("{GRAY}{}{RESET}", "-".repeat(57));
    println!(
        "{BLUE}Completion:{RESET} [{}] {}% ({}/{} tests passed)",
        make_progress_bar(project.passed as usize, project.total as usize, bar_width),
        project.percent,
        project.passed,
        project.total
    );
}

/// Print one task with its write-up, if any.
pub fn print_task_detail(row: &TaskRow, content: Option<&str>) {
    println!(
        "{BOLD}{}{RESET} {GRAY}({}){RESET} {}",
        row.task_name,
        row.task_id,
        status_badge(row.progress.status)
    );
    if !row.description.is_empty() {
        println!("{}", row.description);
    }
    println!(
        "{BLUE}Tests:{RESET}   {}/{}  {GRAY}{}{RESET}",
        row.progress.passed,
        row.total_tests,
        format_counts(row)
    );
    if row.reported {
        println!("{DIM}Counts reported by server{RESET}");
    }
    println!();
    match content {
        Some(text) => println!("{}", text.trim_end()),
        None => println!("{GRAY}No write-up available for this task.{RESET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TaskProgress;

    fn row(passed: u32, failed: u32, not_run: u32, status: TaskStatus) -> TaskRow {
        TaskRow {
            task_id: "ping".into(),
            task_name: "PING".into(),
            description: "Respond to PING".into(),
            position: 1,
            total_tests: passed + failed + not_run,
            progress: TaskProgress {
                passed,
                failed,
                not_run,
                status,
            },
            reported: false,
        }
    }

    fn visible_cells(bar: &str, glyph: char) -> usize {
        bar.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn test_progress_bar_fills_proportionally() {
        let bar = make_progress_bar(1, 4, 8);
        assert_eq!(visible_cells(&bar, '█'), 2);
        assert_eq!(visible_cells(&bar, '░'), 6);
    }

    #[test]
    fn test_progress_bar_with_zero_total_is_empty() {
        let bar = make_progress_bar(0, 0, 5);
        assert_eq!(visible_cells(&bar, '█'), 0);
        assert_eq!(visible_cells(&bar, '░'), 5);
    }

    #[test]
    fn test_progress_bar_never_overflows() {
        let bar = make_progress_bar(9, 3, 6);
        assert_eq!(visible_cells(&bar, '█'), 6);
        assert_eq!(visible_cells(&bar, '░'), 0);
    }

    #[test]
    fn test_status_badge_labels() {
        assert!(status_badge(TaskStatus::Passed).contains("[passed]"));
        assert!(status_badge(TaskStatus::Failed).contains("[failed]"));
        assert!(status_badge(TaskStatus::NotAttempted).contains("[not attempted]"));
    }

    #[test]
    fn test_format_counts_omits_zero_columns() {
        let clean = format_counts(&row(3, 0, 0, TaskStatus::Passed));
        assert_eq!(clean, "3 passed");

        let mixed = format_counts(&row(3, 1, 1, TaskStatus::NotAttempted));
        assert!(mixed.contains("1 failed"));
        assert!(mixed.ends_with("1 not run"));
    }

    #[test]
    fn test_print_helpers_smoke() {
        let rows = vec![row(2, 1, 0, TaskStatus::Failed)];
        let project = ProjectProgress {
            passed: 2,
            total: 3,
            percent: 67,
        };
        print_project_progress("Redis", &rows, &project, 10);
        print_project_progress("Empty", &[], &ProjectProgress { passed: 0, total: 0, percent: 0 }, 10);
        print_task_detail(&rows[0], Some("# PING\n"));
        print_task_detail(&rows[0], None);
    }
}
