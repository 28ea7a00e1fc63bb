use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const AUTH_FLAG_KEY: &str = "adminAuthenticated";
pub const TOKEN_KEY: &str = "authToken";
pub const THEME_KEY: &str = "dashboard-theme";

/// Key-value store that survives page reloads (browser `localStorage`).
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Volatile storage, used when no persistent store is available and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Credentials and preferences of the signed-in admin.
///
/// Cloning is cheap and every clone sees the same underlying store, so the API
/// client and the views share one session.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn Storage>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("theme", &self.theme())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl Session {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    /// Both the flag and a non-empty token must be present.
    pub fn is_authenticated(&self) -> bool {
        self.storage.get(AUTH_FLAG_KEY).as_deref() == Some("true") && self.token().is_some()
    }

    pub fn token(&self) -> Option<SecretString> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    pub fn sign_in(&self, token: &SecretString) {
        self.storage.set(TOKEN_KEY, token.expose_secret());
        self.storage.set(AUTH_FLAG_KEY, "true");
    }

    pub fn sign_out(&self) {
        self.storage.remove(AUTH_FLAG_KEY);
        self.storage.remove(TOKEN_KEY);
    }

    pub fn theme(&self) -> Theme {
        match self.storage.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.storage.set(THEME_KEY, theme.as_str());
    }
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginToken {
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
    pub token_type: String,
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
