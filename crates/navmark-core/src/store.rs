//! JSON document storage under the data directory.
//!
//! Each user owns one document; the default (admin) user's document doubles as
//! the public data shown to anonymous visitors. Writes replace the whole
//! document atomically (temp file + rename), so concurrent writers resolve as
//! last-writer-wins and readers never see a partial file.

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NavError, NavResult};
use crate::text::is_valid_username;

/// Document holding the recycle bin.
pub const TRASH_DOCUMENT: &str = "trash.json";

/// Document owned by the default user.
pub const ADMIN_DOCUMENT: &str = "data.json";

/// Persistence seam used by the bookmark service and the recycle bin.
pub trait DocumentStore {
    /// Reads a document, returning `default` when it is missing or unreadable.
    fn read(&self, doc: &Path, default: Value) -> Value;

    /// Replaces a document with `data`.
    fn write(&self, doc: &Path, data: &Value) -> NavResult<()>;
}

/// Relative document path for `username`.
///
/// `admin_username` maps to [`ADMIN_DOCUMENT`]; everyone else lives under
/// `users/<name>.json` and must have a valid username so the name cannot
/// escape the data directory.
pub fn user_document(username: &str, admin_username: &str) -> NavResult<PathBuf> {
    if username == admin_username {
        return Ok(PathBuf::from(ADMIN_DOCUMENT));
    }
    if !is_valid_username(username) {
        return Err(NavError::InvalidUsername(username.to_string()));
    }
    Ok(Path::new("users").join(format!("{username}.json")))
}

/// File-backed [`DocumentStore`] rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, doc: &Path) -> PathBuf {
        self.root.join(doc)
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self, doc: &Path, default: Value) -> Value {
        let path = self.resolve(doc);
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return default,
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not read document: {}", e);
                return default;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not parse document: {}", e);
                default
            }
        }
    }

    fn write(&self, doc: &Path, data: &Value) -> NavResult<()> {
        let path = self.resolve(doc);
        let parent = path.parent().unwrap_or(&self.root).to_path_buf();
        std::fs::create_dir_all(&parent).map_err(|e| NavError::io(&parent, e))?;

        let json = serde_json::to_vec_pretty(data)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| NavError::io(&parent, e))?;
        tmp.write_all(&json).map_err(|e| NavError::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| NavError::io(&path, e.error))?;

        tracing::debug!(path = %path.display(), bytes = json.len(), "document written");
        Ok(())
    }
}
