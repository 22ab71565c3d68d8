//! Session key/value storage
//!
//! Values are JSON so that whatever the hosting layer stored (numbers,
//! strings, junk) round-trips untouched; interpretation is left to readers.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{PokedexError, Result};
use crate::core::types::SessionId;

/// Per-session key/value interface
pub trait Session {
    fn get(&self, key: &str) -> Option<&Value>;

    /// Replace a value and mark the session for saving
    fn set(&mut self, key: &str, value: Value);

    fn is_modified(&self) -> bool;
}

/// Session data held in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySession {
    data: AHashMap<String, Value>,
    #[serde(skip)]
    modified: bool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session for MemorySession {
    fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
        self.modified = true;
    }

    fn is_modified(&self) -> bool {
        self.modified
    }
}

/// Sessions persisted as `<dir>/<session id>.json`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, id: &SessionId) -> Result<PathBuf> {
        let valid = !id.as_str().is_empty()
            && id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PokedexError::InvalidInput(format!(
                "session id {:?} must be alphanumeric",
                id.as_str()
            )));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    /// Load a session, starting empty if it has never been saved
    pub fn load(&self, id: &SessionId) -> Result<MemorySession> {
        let path = self.path(id)?;
        if !path.exists() {
            tracing::debug!("New session {}", id);
            return Ok(MemorySession::new());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the session back if anything changed; returns whether it wrote
    pub fn save(&self, id: &SessionId, session: &MemorySession) -> Result<bool> {
        if !session.is_modified() {
            return Ok(false);
        }
        let path = self.path(id)?;
        ensure_dir(&self.dir)?;
        std::fs::write(&path, serde_json::to_string_pretty(session)?)?;
        tracing::debug!("Saved session {} to {:?}", id, path);
        Ok(true)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pokedex-sessions-{}-{}", tag, SessionId::new()))
    }

    #[test]
    fn test_set_marks_modified() {
        let mut session = MemorySession::new();
        assert!(!session.is_modified());
        session.set("team_a", json!([1, 2]));
        assert!(session.is_modified());
        assert_eq!(session.get("team_a"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = temp_dir("roundtrip");
        let store = FileSessionStore::new(&dir);
        let id = SessionId::new();

        let mut session = store.load(&id).unwrap();
        session.set("team_b", json!([25, "7"]));
        assert!(store.save(&id, &session).unwrap());

        let loaded = store.load(&id).unwrap();
        assert_eq!(loaded.get("team_b"), Some(&json!([25, "7"])));
        assert!(!loaded.is_modified());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_unmodified_session_not_written() {
        let dir = temp_dir("clean");
        let store = FileSessionStore::new(&dir);
        let id = SessionId::new();
        let session = store.load(&id).unwrap();
        assert!(!store.save(&id, &session).unwrap());
        assert!(!dir.exists());
    }

    #[test]
    fn test_path_traversal_rejected() {
        let store = FileSessionStore::new(temp_dir("bad"));
        let result = store.load(&SessionId::from("../etc/passwd"));
        assert!(matches!(result, Err(PokedexError::InvalidInput(_))));
    }
}
