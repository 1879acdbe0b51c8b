// Platform adapters for FormCraft
//
// Components never talk to browser globals directly. Persisted UI state goes
// through `Storage`, URL query persistence through `History`, and focus /
// scroll / clipboard through `Document`. In-memory adapters are the default;
// the `web` feature adds browser-backed ones.

mod document;
mod history;
mod storage;

pub use document::Document;
pub use history::{History, MemoryHistory};
pub use storage::{load_json, store_json, FileStorage, MemoryStorage, Storage, StorageError};

/// Browser-backed adapters
#[cfg(feature = "web")]
pub mod web {
    use url::Url;
    use wasm_bindgen::JsValue;

    use super::{History, Storage, StorageError};

    fn js_error(err: JsValue) -> StorageError {
        StorageError::Backend(format!("{err:?}"))
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }

    /// `window.localStorage`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl Storage for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?.get_item(key).map_err(js_error)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?.set_item(key, value).map_err(js_error)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            local_storage()?.remove_item(key).map_err(js_error)
        }
    }

    /// `window.location` and `window.history`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserHistory;

    impl History for BrowserHistory {
        fn current_url(&self) -> Option<Url> {
            let href = web_sys::window()?.location().href().ok()?;
            Url::parse(&href).ok()
        }

        fn push_url(&self, url: &Url) -> Result<(), StorageError> {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            window
                .history()
                .map_err(js_error)?
                .push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
                .map_err(js_error)
        }
    }
}
