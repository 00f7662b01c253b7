//! Terminal output formatting for learnboard.
//!
//! Functions are organized by domain:
//!
//! - [`messages`] - Error, warning, and info messages
//! - [`progress`] - Progress bars, task tables and project roll-ups
//! - [`projects`] - Variant groups of the project catalog
//! - [`settings`] - Session and configuration display

pub mod messages;
pub mod progress;
pub mod projects;
pub mod settings;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use messages::{print_error, print_info, print_success, print_warning};
pub use progress::{make_progress_bar, print_project_progress, print_task_detail, status_badge};
pub use projects::{format_technologies, print_variant_groups};
pub use settings::{print_config, print_session};
