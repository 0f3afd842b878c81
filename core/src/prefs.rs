use std::cell::RefCell;
use std::collections::HashMap;

use crate::lang::Lang;

pub const THEME_KEY: &str = "site-theme";
pub const LANG_KEY: &str = "site-lang";

/// Key-value storage that survives page loads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Only an explicit `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value?.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Typed accessors over a [`PreferenceStore`].
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        ThemeMode::from_stored(self.store.get(THEME_KEY).as_deref())
    }

    pub fn set_theme(&self, mode: ThemeMode) -> Result<(), String> {
        self.store.set(THEME_KEY, mode.as_str())
    }

    pub fn language(&self) -> Lang {
        Lang::from_stored(self.store.get(LANG_KEY).as_deref())
    }

    pub fn set_language(&self, lang: Lang) -> Result<(), String> {
        self.store.set(LANG_KEY, lang.code())
    }
}

/// In-process store for tests and for browsers that refuse `localStorage`.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}
