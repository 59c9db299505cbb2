use anyhow::{Context, Result};
use fb_api_types::UserProfile;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

pub const TOKEN_KEY: &str = "filmbox_token";
pub const SESSION_KEY: &str = "filmbox_session";

/// Session-scoped string key/value storage.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// JSON object on disk, one entry per key. Used by the command-line client,
/// where the session outlives a single process.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("ignoring unreadable session file {}: {}", self.path.display(), err);
            HashMap::new()
        })
    }

    /// The file holds a bearer token, so on unix it is kept owner-only (0600).
    fn save(&self, items: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&self.path)
            .with_context(|| format!("open session file {}", self.path.display()))?;

        // `mode` only applies on creation; tighten files left by older runs.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .with_context(|| format!("restrict session file {}", self.path.display()))?;
        }
        file.write_all(json.as_bytes())
            .with_context(|| format!("write session file {}", self.path.display()))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.load();
        items.insert(key.to_owned(), value.to_owned());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.load();
        if items.remove(key).is_some() {
            if let Err(err) = self.save(&items) {
                warn!("session remove failed: {:#}", err);
            }
        }
    }
}

/// Auth token and user profile held for the active session.
///
/// Cloning is cheap and clones share the same storage.
pub struct SessionStore<S> {
    storage: Rc<S>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        if let Err(err) = self.storage.set_item(TOKEN_KEY, token) {
            warn!("session token write failed: {:#}", err);
        }
    }

    /// Stored user profile; `None` when absent or malformed.
    pub fn get(&self) -> Option<UserProfile> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("session read error: {}", err);
                None
            }
        }
    }

    pub fn set(&self, user: &UserProfile) {
        let result = serde_json::to_string(user)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set_item(SESSION_KEY, &json));
        if let Err(err) = result {
            warn!("session write error: {:#}", err);
        }
    }

    /// Store a successful auth response.
    pub fn establish(&self, token: &str, user: &UserProfile) {
        self.set_token(token);
        self.set(user);
    }

    pub fn clear(&self) {
        self.storage.remove_item(SESSION_KEY);
        self.storage.remove_item(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some() && self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            name: "Анна".into(),
            email: "anna@example.com".into(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn establish_then_read() {
        let session = SessionStore::new(InMemoryStorage::new());
        assert!(!session.is_authenticated());

        session.establish("jwt-token", &user());
        assert_eq!(session.get_token().as_deref(), Some("jwt-token"));
        assert_eq!(session.get(), Some(user()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_removes_token_and_user() {
        let session = SessionStore::new(InMemoryStorage::new());
        session.establish("jwt-token", &user());

        let other_handle = session.clone();
        other_handle.clear();

        assert_eq!(session.get_token(), None);
        assert_eq!(session.get(), None);
    }

    #[test]
    fn malformed_profile_reads_as_none() {
        let storage = InMemoryStorage::new();
        storage.set_item(SESSION_KEY, "{not json").unwrap();
        storage.set_item(TOKEN_KEY, "t").unwrap();

        let session = SessionStore::new(storage);
        assert_eq!(session.get(), None);
        assert_eq!(session.get_token().as_deref(), Some("t"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn file_storage_survives_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        SessionStore::new(FileStorage::new(&path)).establish("abc", &user());

        let reopened = SessionStore::new(FileStorage::new(&path));
        assert_eq!(reopened.get_token().as_deref(), Some("abc"));
        assert_eq!(reopened.get().map(|u| u.email), Some("anna@example.com".to_owned()));

        reopened.clear();
        assert!(!SessionStore::new(FileStorage::new(&path)).is_authenticated());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, "{}")?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;

        SessionStore::new(FileStorage::new(&path)).establish("abc", &user());

        let mode = fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        Ok(())
    }

    #[test]
    fn corrupt_session_file_is_ignored() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, "garbage")?;

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
        storage.set_item(TOKEN_KEY, "fresh")?;
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("fresh"));
        Ok(())
    }
}
