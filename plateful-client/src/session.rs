//! Session token storage
//!
//! The login/logout flow (outside this crate) writes the session file; the
//! console only reads it and hands the token to the gateway explicitly at
//! construction. Save/clear exist for that outer flow and for tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

const SESSION_FILE: &str = "session.json";

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
}

/// JSON-file session store under a directory
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the stored session, `None` when no session file exists
    pub fn load(&self) -> ClientResult<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// Persist a session (written by the login flow)
    pub fn save(&self, session: &StoredSession) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Remove the session file (written by the logout flow)
    pub fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
