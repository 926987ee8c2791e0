//! Browser Storage
//!
//! `window.localStorage` backend for the item store.

use shelf_core::{KeyValueStorage, ShelfError, ShelfResult};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> ShelfResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ShelfError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ShelfError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> ShelfResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> ShelfResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> ShelfError {
    ShelfError::Storage(format!("{:?}", e))
}
