// Session persistence: the CLI's stand-in for the browser's local storage.
// One credential at a time; written on login, removed on logout or when the
// backend reports the token as expired.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

/// The logged-in identity as returned by the token endpoint. The three
/// fields live and die together: `set` writes all of them, `clear` removes
/// all of them, and a partially-present credential cannot be observed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub role: String,
    pub username: String,
}

/// Storage for the current session. The API client reads through this on
/// every request and is the only writer, so implementations just need
/// last-write-wins semantics. Storage availability is assumed; a failed
/// write simply means the user logs in again next run.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Credential>;
    fn set(&self, credential: &Credential);
    /// Idempotent: clearing an empty store is a no-op.
    fn clear(&self);
}

/// File-backed store. Serializes the credential as one JSON document so the
/// three fields are written in a single atomic file write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under `.roadwatch_session` in the user's home directory, so a
    /// session survives across runs of the CLI.
    pub fn new() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(dir.join(".roadwatch_session"))
    }

    pub fn at(path: PathBuf) -> Self {
        FileStore { path }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileStore {
    fn get(&self) -> Option<Credential> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    fn set(&self, credential: &Credential) {
        if let Ok(json) = serde_json::to_string(credential) {
            let _ = std::fs::write(&self.path, json);
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<Credential> {
        self.slot.lock().unwrap().clone()
    }

    fn set(&self, credential: &Credential) {
        *self.slot.lock().unwrap() = Some(credential.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential {
            token: "tok".into(),
            role: "user".into(),
            username: "ann".into(),
        }
    }

    #[test]
    fn memory_store_overwrites_and_clears() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set(&credential());
        let mut other = credential();
        other.token = "tok2".into();
        store.set(&other);
        assert_eq!(store.get(), Some(other));

        store.clear();
        assert_eq!(store.get(), None);
        // clearing twice is fine
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("session"));

        assert_eq!(store.get(), None);
        store.set(&credential());
        assert_eq!(store.get(), Some(credential()));

        store.clear();
        assert_eq!(store.get(), None);
        store.clear();
    }

    #[test]
    fn file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::at(path);
        assert_eq!(store.get(), None);
    }
}
