//! Thin wrappers over the browser APIs the dashboard needs: local storage,
//! the runtime config global, the clock, and page reload.

use chrono::{DateTime, Utc};
use js_sys::Reflect;
use recovery_core::{AppConfig, KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__BPR_CONFIG__";

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window not available".to_string())
}

fn js_error(context: &str, err: JsValue) -> StoreError {
    StoreError::Backend(format!("{context}: {err:?}"))
}

/// `window.localStorage` as a [`KeyValueStore`].
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, StoreError> {
        let storage = window()
            .map_err(StoreError::Backend)?
            .local_storage()
            .map_err(|e| js_error("failed to access localStorage", e))?
            .ok_or_else(|| StoreError::Backend("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> recovery_core::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| js_error("localStorage.getItem failed", e))
    }

    fn set(&self, key: &str, value: &str) -> recovery_core::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error("localStorage.setItem failed", e))
    }

    fn remove(&self, key: &str) -> recovery_core::Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error("localStorage.removeItem failed", e))
    }

    fn keys(&self) -> recovery_core::Result<Vec<String>> {
        let len = self
            .storage
            .length()
            .map_err(|e| js_error("localStorage.length failed", e))?;
        let mut keys = Vec::new();
        for index in 0..len {
            if let Some(key) = self
                .storage
                .key(index)
                .map_err(|e| js_error("localStorage.key failed", e))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

/// Reads `window.__BPR_CONFIG__`, given either as an object or as a JSON
/// string. Missing config means defaults.
pub fn load_config() -> Result<AppConfig, String> {
    let window = window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| format!("failed to access {CONFIG_GLOBAL}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(AppConfig::default());
    }

    let config = match value.as_string() {
        Some(raw) => AppConfig::from_json(&raw),
        None => serde_wasm_bindgen::from_value::<AppConfig>(value)
            .map_err(|e| format!("malformed {CONFIG_GLOBAL}: {e}"))?
            .validated(),
    };
    config.map_err(|e| format!("invalid {CONFIG_GLOBAL}: {e}"))
}

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Asks the user to confirm a destructive action. Any browser failure
/// counts as "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| {
            w.confirm_with_message(message)
                .map_err(|e| format!("confirm failed: {e:?}"))
        })
        .unwrap_or(false)
}

pub fn reload() -> Result<(), String> {
    window()?
        .location()
        .reload()
        .map_err(|e| format!("reload failed: {e:?}"))
}
