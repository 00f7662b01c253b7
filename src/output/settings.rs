//! Session and configuration display.

use crate::config::Config;
use crate::session::Session;
use std::path::Path;

use super::colors::*;

/// Print the effective configuration.
pub fn print_config(config: &Config, path: &Path) {
    println!("{BOLD}Configuration{RESET} {GRAY}({}){RESET}", path.display());
    println!(
        "{BLUE}progress_bar_width:{RESET} {}",
        config.progress_bar_width
    );
    println!("{BLUE}log_level:{RESET}          {}", config.log_level);
    println!(
        "{BLUE}data_dir:{RESET}           {}",
        display_path(config.data_dir.as_deref())
    );
    println!(
        "{BLUE}content_dir:{RESET}        {}",
        display_path(config.content_dir().as_deref())
    );
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("{GRAY}(not set){RESET}"))
}

/// Print who is signed in and the pinned variant choices.
pub fn print_session(session: &Session) {
    match &session.user_id {
        Some(user) => println!("{BLUE}Signed in as:{RESET} {}", user),
        None => println!("{GRAY}Not signed in.{RESET}"),
    }
    if session.selections.is_empty() {
        println!("{GRAY}No pinned variants.{RESET}");
        return;
    }
    println!("{BOLD}Pinned variants:{RESET}");
    for (group, project_id) in session.selections.iter() {
        println!("  {} {GRAY}->{RESET} {}", group, project_id);
    }
}
