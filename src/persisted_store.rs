use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use ujjtrans_site_core::{MemoryStore, PreferenceStore};

/// Preferences backed by `localStorage`, or by memory when the browser
/// refuses storage (private mode, disabled cookies).
pub(crate) enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                gloo::console::warn!("prefs: local storage unavailable, choices last for this page only");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(js_err),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        if let Some(message) = error.message().as_string() {
            return message;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
