//! Explicit per-user application state.
//!
//! Holds what a browser client would otherwise scatter across local storage:
//! who is signed in, whether the welcome notice was shown, and pinned variant
//! choices. It is initialised on load and cleared on logout.

use crate::error::{LearnboardError, Result};
use crate::variants::VariantSelections;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub seen_welcome: bool,
    #[serde(default)]
    pub selections: VariantSelections,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// File-backed storage for [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    base_dir: PathBuf,
}

impl SessionStore {
    /// Store rooted in the learnboard config directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: crate::config::config_dir()?,
        })
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { base_dir: dir }
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(SESSION_FILE)
    }

    /// Load the session, writing a fresh default if none exists yet.
    pub fn init_on_load(&self) -> Result<Session> {
        let path = self.path();
        if !path.exists() {
            debug!(path = %path.display(), "no session file, starting fresh");
            let session = Session::default();
            self.save(&session)?;
            return Ok(session);
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| {
            LearnboardError::Session(format!(
                "Failed to parse session file at {:?}: {}",
                path, e
            ))
        })
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let mut session = session.clone();
        session.touch();
        let content = serde_json::to_string_pretty(&session)?;
        fs::write(self.path(), content)?;
        Ok(())
    }

    /// Drop all persisted state and hand back an empty session.
    pub fn clear_on_logout(&self) -> Result<Session> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path)?;
            debug!(path = %path.display(), "session cleared");
        }
        Ok(Session::default())
    }

    /// Load, mutate and persist in one step.
    pub fn update<F>(&self, f: F) -> Result<Session>
    where
        F: FnOnce(&mut Session),
    {
        let mut session = self.init_on_load()?;
        f(&mut session);
        self.save(&session)?;
        Ok(session)
    }
}
