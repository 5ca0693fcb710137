//! REST layer.
//!
//! `client` holds the transport and the refresh interceptor; the sibling
//! modules add one `impl` block of endpoint methods each, mirroring the
//! backend's route groups.

pub mod auth;
pub mod client;
pub mod error;
pub mod event;
pub mod participation;
pub mod profile;

pub use client::{Api, api};
pub use error::ApiError;
