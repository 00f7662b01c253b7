//! CLI command handlers for learnboard.
//!
//! Each command has its own module with handler functions.
//!
//! - [`progress`] - Per-task progress and project completion
//! - [`projects`] - Catalog grouped by project, with the displayed variant
//! - [`select`] - Pin or unpin a variant for a project group
//! - [`show`] - One task with its write-up
//! - [`config`] - Display, modify and reset configuration
//! - [`session`] - Sign in, show or clear the local session

mod config;
mod progress;
mod projects;
mod select;
mod session;
mod show;

pub use config::{config_display_command, config_reset_command, config_set_command};
pub use progress::{progress_command, progress_view, ProgressView};
pub use projects::{projects_command, projects_view, GroupView};
pub use select::{select_command, unselect_command};
pub use session::{login_command, logout_command, session_command, welcome_once};
pub use show::show_command;

/// Output format shared by the read-only commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
