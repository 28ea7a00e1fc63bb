use types::session::Storage;

/// The browser's `window.localStorage`.
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    /// `None` when storage is unavailable, e.g. disabled by privacy settings.
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten().map(Self)
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.0.set_item(key, value) {
            tracing::warn!(key, ?err, "failed to write local storage");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.0.remove_item(key) {
            tracing::warn!(key, ?err, "failed to clear local storage");
        }
    }
}
