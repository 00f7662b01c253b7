//! Projects command handler.
//!
//! Lists the catalog grouped by project name, showing which stack variant
//! is displayed for each group.

use super::session::welcome_once;
use super::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::model::ProjectVariant;
use crate::output::print_variant_groups;
use crate::session::SessionStore;
use crate::snapshot::CatalogSnapshot;
use crate::variants::{group_projects, VariantGroup, VariantSelections};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// JSON shape of one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView<'a> {
    pub key: &'a str,
    pub selected: &'a ProjectVariant,
    pub pinned: bool,
    pub variants: &'a [ProjectVariant],
}

pub fn projects_view<'g>(
    groups: &'g [VariantGroup],
    selections: &VariantSelections,
) -> Vec<GroupView<'g>> {
    groups
        .iter()
        .map(|group| {
            let selected = selections.resolve(group);
            GroupView {
                key: &group.key,
                selected,
                pinned: selections.pinned(&group.key) == Some(selected.project_id.as_str()),
                variants: group.variants(),
            }
        })
        .collect()
}

/// Display the project catalog for the snapshot at `file`.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(LearnboardError)` if the snapshot or session cannot be read
pub fn projects_command(
    config: &Config,
    store: &SessionStore,
    file: &Path,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = CatalogSnapshot::load(&config.resolve_input(file))?;
    let session = store.init_on_load()?;
    let groups = group_projects(&snapshot.catalog, &snapshot.owned);

    match format {
        OutputFormat::Json => {
            let view = projects_view(&groups, &session.selections);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Text => {
            welcome_once(store)?;
            print_variant_groups(&groups, &session.selections, Utc::now());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "catalog": [
            {"projectId": "a", "name": "Lib", "technologies": "Rust", "createdAt": "2024-01-01T00:00:00Z"},
            {"projectId": "b", "name": "Lib", "technologies": "Go", "createdAt": "2024-02-01T00:00:00Z"},
            {"projectId": "c", "name": "Cache", "technologies": "Go", "createdAt": "2024-02-01T00:00:00Z"}
        ],
        "owned": [
            {"projectId": "a", "name": "Lib", "createdAt": "2024-01-01T00:00:00Z", "lastRan": "2024-06-01T00:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_projects_view_reports_pins() {
        let snapshot = CatalogSnapshot::from_json(CATALOG).unwrap();
        let groups = group_projects(&snapshot.catalog, &snapshot.owned);
        let mut selections = VariantSelections::new();

        let view = projects_view(&groups, &selections);
        assert_eq!(view[0].selected.project_id, "a");
        assert!(!view[0].pinned);

        selections.pin("Lib", "b");
        selections.pin("Cache", "gone");
        let view = projects_view(&groups, &selections);
        assert_eq!(view[0].selected.project_id, "b");
        assert!(view[0].pinned);
        assert_eq!(view[1].selected.project_id, "c");
        assert!(!view[1].pinned);
    }

    #[test]
    fn test_projects_json_embeds_selected_variant() {
        let snapshot = CatalogSnapshot::from_json(CATALOG).unwrap();
        let groups = group_projects(&snapshot.catalog, &snapshot.owned);
        let json = serde_json::to_value(projects_view(&groups, &VariantSelections::new())).unwrap();

        assert_eq!(json[0]["key"], "Lib");
        assert_eq!(json[0]["selected"]["projectId"], "a");
        assert_eq!(json[0]["selected"]["isOwned"], true);
        assert_eq!(json[1]["selected"]["projectId"], "c");
    }

    #[test]
    fn test_projects_command_runs_in_both_formats() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("catalog.json");
        std::fs::write(&file, CATALOG).unwrap();
        let store = SessionStore::with_dir(dir.path().join("state"));

        projects_command(&Config::default(), &store, &file, OutputFormat::Text).unwrap();
        projects_command(&Config::default(), &store, &file, OutputFormat::Json).unwrap();
        assert!(store.init_on_load().unwrap().seen_welcome);
    }
}
