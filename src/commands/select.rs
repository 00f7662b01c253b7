//! Select command handler.
//!
//! Pins the stack variant shown for a project group, or removes the pin.

use crate::config::Config;
use crate::error::{LearnboardError, Result};
use crate::output::{format_technologies, print_success, print_warning};
use crate::session::SessionStore;
use crate::snapshot::CatalogSnapshot;
use crate::variants::group_projects;
use std::path::Path;

/// Pin `project_id` as the displayed variant of `group_key`.
///
/// The catalog is checked first so only real variants get pinned.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(LearnboardError::UnknownGroup)` if no group has that name
/// * `Err(LearnboardError::NotInGroup)` if the project is not a variant of it
pub fn select_command(
    config: &Config,
    store: &SessionStore,
    file: &Path,
    group_key: &str,
    project_id: &str,
) -> Result<()> {
    let snapshot = CatalogSnapshot::load(&config.resolve_input(file))?;
    let groups = group_projects(&snapshot.catalog, &snapshot.owned);

    let group = groups
        .iter()
        .find(|g| g.key == group_key)
        .ok_or_else(|| LearnboardError::UnknownGroup(group_key.to_string()))?;
    let variant = group
        .find(project_id)
        .ok_or_else(|| LearnboardError::NotInGroup {
            group: group_key.to_string(),
            project_id: project_id.to_string(),
        })?;

    store.update(|session| {
        session.selections.pin(group_key, project_id);
    })?;

    print_success(&format!(
        "{} now shows {} ({})",
        group_key,
        format_technologies(variant),
        project_id
    ));
    Ok(())
}

/// Remove the pin for `group_key`, restoring the default variant.
pub fn unselect_command(store: &SessionStore, group_key: &str) -> Result<()> {
    let mut removed = None;
    store.update(|session| {
        removed = session.selections.unpin(group_key);
    })?;

    match removed {
        Some(project_id) => print_success(&format!(
            "Unpinned {} from {}; the default variant is shown again",
            project_id, group_key
        )),
        None => print_warning(&format!("No variant pinned for {}", group_key)),
    }
    Ok(())
}
