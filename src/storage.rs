use landing_core::{PreferenceStore, SiteError, SiteResult};
use web_sys as web;

/// `window.localStorage` as a preference store.
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    /// Storage may be unavailable (privacy settings, sandboxed iframes); the
    /// store then reads as empty and rejects writes.
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[prefs] localStorage unavailable; preferences will not persist");
        }
        Self { inner }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        match &self.inner {
            Some(s) => s
                .get_item(key)
                .map_err(|e| SiteError::Storage(format!("{:?}", e))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        match &self.inner {
            Some(s) => s
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(format!("{:?}", e))),
            None => Err(SiteError::Storage("localStorage unavailable".to_string())),
        }
    }
}
