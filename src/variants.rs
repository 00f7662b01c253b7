//! Grouping of project variants.
//!
//! The catalog offers the same learning project in several technology
//! stacks. Rows sharing a display name form one [`VariantGroup`]; each group
//! has a default variant, which the user can override by pinning another one.

use crate::model::ProjectVariant;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Variants of one logical project. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub key: String,
    variants: Vec<ProjectVariant>,
    selected: usize,
}

impl VariantGroup {
    fn new(key: String, mut variants: Vec<ProjectVariant>) -> Self {
        variants.sort_by(default_order);
        Self {
            key,
            variants,
            selected: 0,
        }
    }

    /// Variants in default display order.
    pub fn variants(&self) -> &[ProjectVariant] {
        &self.variants
    }

    /// The computed default variant.
    pub fn selected(&self) -> &ProjectVariant {
        &self.variants[self.selected]
    }

    pub fn find(&self, project_id: &str) -> Option<&ProjectVariant> {
        self.variants.iter().find(|v| v.project_id == project_id)
    }

    pub fn is_owned(&self) -> bool {
        self.variants.iter().any(|v| v.is_owned)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Owned variants first, most recently run first; then unowned variants,
/// newest first. A variant that was never run sorts after every run one.
fn default_order(a: &ProjectVariant, b: &ProjectVariant) -> Ordering {
    match (a.is_owned, b.is_owned) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b.last_ran.cmp(&a.last_ran),
        (false, false) => b.created_at.cmp(&a.created_at),
    }
}

/// Partition the catalog into groups keyed by exact project name.
///
/// Ownership and last-run time come from `owned`, matched by project id.
/// Groups keep the order in which their names first appear in `all`.
pub fn group_projects(all: &[ProjectVariant], owned: &[ProjectVariant]) -> Vec<VariantGroup> {
    let last_ran: HashMap<&str, Option<DateTime<Utc>>> = owned
        .iter()
        .map(|v| (v.project_id.as_str(), v.last_ran))
        .collect();

    let mut partitions: IndexMap<&str, Vec<ProjectVariant>> = IndexMap::new();
    for variant in all {
        let mut row = variant.clone();
        match last_ran.get(variant.project_id.as_str()) {
            Some(ran) => {
                row.is_owned = true;
                row.last_ran = *ran;
            }
            None => {
                row.is_owned = false;
                row.last_ran = None;
            }
        }
        partitions.entry(variant.name.as_str()).or_default().push(row);
    }

    debug!(
        variants = all.len(),
        groups = partitions.len(),
        "grouped project catalog"
    );

    partitions
        .into_iter()
        .map(|(key, variants)| VariantGroup::new(key.to_string(), variants))
        .collect()
}

/// Resolve the variant to display: the pinned one if it still belongs to the
/// group, the computed default otherwise.
pub fn select_variant<'g>(group: &'g VariantGroup, pinned: Option<&str>) -> &'g ProjectVariant {
    pinned
        .and_then(|id| group.find(id))
        .unwrap_or_else(|| group.selected())
}

/// Explicit per-group variant choices made by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSelections(BTreeMap<String, String>);

impl VariantSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `project_id` for `group_key`, returning the previous pin.
    pub fn pin(&mut self, group_key: &str, project_id: &str) -> Option<String> {
        self.0.insert(group_key.to_string(), project_id.to_string())
    }

    pub fn unpin(&mut self, group_key: &str) -> Option<String> {
        self.0.remove(group_key)
    }

    pub fn pinned(&self, group_key: &str) -> Option<&str> {
        self.0.get(group_key).map(String::as_str)
    }

    /// The variant to display for `group`.
    pub fn resolve<'g>(&self, group: &'g VariantGroup) -> &'g ProjectVariant {
        select_variant(group, self.pinned(&group.key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
