//! Theme preference store.
//!
//! The theme flag is the only durable state in the design. It lives under
//! a fixed key in a key-value store; in the browser that store is local
//! storage, here it is anything implementing [`KeyValueStore`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed storage key for the theme flag.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Minimal string key-value storage seam.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
}

/// In-memory store, the session-scoped stand-in for browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Load the stored theme; an absent or unrecognized value falls back
    /// to dark.
    pub fn init(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.put(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_defaults_to_dark_when_nothing_stored() {
        let store = ThemeStore::init(MemoryStore::default());
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn init_reads_stored_value() {
        let mut backing = MemoryStore::default();
        backing.put(THEME_KEY, "light");
        let store = ThemeStore::init(backing);
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn unrecognized_stored_value_falls_back_to_dark() {
        let mut backing = MemoryStore::default();
        backing.put(THEME_KEY, "solarized");
        let store = ThemeStore::init(backing);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn set_and_toggle_write_through() {
        let mut store = ThemeStore::init(MemoryStore::default());
        store.set(Theme::Light);
        assert_eq!(store.store.get(THEME_KEY).as_deref(), Some("light"));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
