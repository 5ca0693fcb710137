//! Thin wrappers over the native browser APIs: History routing and
//! LocalStorage. No external router crate; the app owns its navigation.

pub mod route;
pub mod router;
mod storage;

pub use storage::LocalStorage;
