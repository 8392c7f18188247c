use crate::errors::AppResult;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed key of the session token inside the storage file.
pub const TOKEN_KEY: &str = "token";

/// Key/value JSON file holding the bearer token.
///
/// Every call reads or writes the file; nothing is cached in memory, so two
/// screens (or two processes) always observe the same token. Other keys are
/// kept as arbitrary JSON. An unreadable file counts as empty and is
/// replaced on the next write.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current token, `None` when absent or blank.
    pub fn token(&self) -> AppResult<Option<String>> {
        let entries = self.read()?;
        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string))
    }

    pub fn has_token(&self) -> AppResult<bool> {
        Ok(self.token()?.is_some())
    }

    pub fn set_token(&self, token: &str) -> AppResult<()> {
        let mut entries = self.read()?;
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write(&entries)?;
        debug!(path = %self.path.display(), "session token stored");
        Ok(())
    }

    /// Remove the token. Other keys of the storage file are preserved.
    pub fn clear(&self) -> AppResult<()> {
        let mut entries = self.read()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write(&entries)?;
            debug!(path = %self.path.display(), "session token cleared");
        }
        Ok(())
    }

    fn read(&self) -> AppResult<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable storage file, starting empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write(&self, entries: &BTreeMap<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}
