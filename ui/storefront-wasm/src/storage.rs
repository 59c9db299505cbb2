use anyhow::{Result, anyhow};
use fb_session::SessionStorage;
use gloo_storage::Storage as _;

/// Tab-scoped `sessionStorage`, so a session ends with its tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn raw() -> web_sys::Storage {
        gloo_storage::SessionStorage::raw()
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::raw()
            .set_item(key, value)
            .map_err(|err| anyhow!("sessionStorage write {key}: {err:?}"))
    }

    fn remove_item(&self, key: &str) {
        let _ = Self::raw().remove_item(key);
    }
}
