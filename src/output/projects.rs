//! Project catalog display.

use crate::model::ProjectVariant;
use crate::variants::{VariantGroup, VariantSelections};
use chrono::{DateTime, Utc};

use super::colors::*;

/// `Rust · Postgres`, or a placeholder when the row lists none.
pub fn format_technologies(variant: &ProjectVariant) -> String {
    if variant.technologies.is_empty() {
        "any stack".to_string()
    } else {
        variant.technologies.join(" · ")
    }
}

/// Coarse "time ago" label.
pub fn format_relative(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Print every group with its displayed variant and the alternatives.
pub fn print_variant_groups(
    groups: &[VariantGroup],
    selections: &VariantSelections,
    now: DateTime<Utc>,
) {
    if groups.is_empty() {
        println!("{GRAY}No projects in the catalog.{RESET}");
        return;
    }

    for group in groups {
        let shown = selections.resolve(group);
        let pinned = selections.pinned(&group.key) == Some(shown.project_id.as_str());

        let owned = if group.is_owned() {
            format!(" {GREEN}[started]{RESET}")
        } else {
            String::new()
        };
        println!("{BOLD}{}{RESET}{}", group.key, owned);

        for variant in group.variants() {
            let marker = if variant.project_id == shown.project_id {
                if pinned {
                    format!("{CYAN}*{RESET}")
                } else {
                    format!("{CYAN}>{RESET}")
                }
            } else {
                " ".to_string()
            };
            let last_ran = variant
                .last_ran
                .map(|t| format!(" {GRAY}ran {}{RESET}", format_relative(now, t)))
                .unwrap_or_default();
            let difficulty = if variant.difficulty.is_empty() {
                String::new()
            } else {
                format!(" {GRAY}({}){RESET}", variant.difficulty)
            };
            println!(
                "  {} {} {DIM}{}{RESET}{}{}",
                marker,
                format_technologies(variant),
                variant.project_id,
                difficulty,
                last_ran
            );
        }
        println!();
    }

    let started = groups.iter().filter(|g| g.is_owned()).count();
    println!(
        "{GRAY}({} project{}, {} started, {} pinned){RESET}",
        groups.len(),
        if groups.len() == 1 { "" } else { "s" },
        started,
        selections.len()
    );
}
