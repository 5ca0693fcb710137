//! Wire DTOs mirrored from the backend.
//!
//! Every type here follows the backend's camelCase JSON. The client never
//! gives these an independent lifecycle; the backend is the system of record.

pub mod auth;
pub mod event;
pub mod participation;
pub mod profile;

pub use auth::TokenPair;
pub use event::{Category, Event, EventStatistics, SearchFilters};
pub use participation::ParticipationStatus;
pub use profile::Role;
