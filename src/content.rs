//! Task content registry.
//!
//! Task write-ups live as `<task_id>.md` files in a content directory. The
//! directory is indexed once into a `task_id -> markdown` map; lookups never
//! build file paths.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const CONTENT_EXTENSION: &str = "md";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRegistry {
    entries: BTreeMap<String, String>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every markdown file directly inside `dir`.
    ///
    /// A missing directory yields an empty registry. Unreadable files are
    /// skipped with a warning.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut registry = Self::new();
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "content directory missing, registry is empty");
            return Ok(registry);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != CONTENT_EXTENSION) {
                continue;
            }
            let Some(task_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(content) => {
                    registry.insert(task_id, content);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable content"),
            }
        }

        debug!(entries = registry.len(), "indexed task content");
        Ok(registry)
    }

    pub fn insert(&mut self, task_id: &str, content: String) -> Option<String> {
        self.entries.insert(task_id.to_string(), content)
    }

    pub fn get(&self, task_id: &str) -> Option<&str> {
        self.entries.get(task_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
