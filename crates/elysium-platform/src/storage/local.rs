//! `window.localStorage` backend.
//! Persistent across reloads; values must be UTF-8 (we only store JSON).

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use elysium_core::ports::StoragePort;
use elysium_types::{AppError, Result};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| AppError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(e: JsValue) -> AppError {
    AppError::JsInterop(format!("{:?}", e))
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.storage.get_item(key).map_err(js_error)?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| AppError::Storage(format!("{}: value is not UTF-8: {}", key, e)))?;
        self.storage.set_item(key, text).map_err(js_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
