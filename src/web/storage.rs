//! Thin wrapper over `web_sys::Storage`.
//!
//! All LocalStorage access in the app goes through here; failures collapse
//! to `None`/`false` since a blocked storage area is indistinguishable from
//! an absent key for our purposes.

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Stored string for `key`, if the key exists and storage is reachable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Store `value` under `key`. Returns whether the write happened.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Remove `key`. Returns whether the removal happened.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
