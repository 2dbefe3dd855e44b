//! Where the session record lives between page loads.

/// Key/value persistence for the session record.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Looked up on every call, so the type itself
/// carries no JS handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let storage =
            get_local_storage().ok_or_else(|| "localStorage is not available".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage.setItem failed: {:?}", e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
