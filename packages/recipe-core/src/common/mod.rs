// Common types and utilities shared across the engine

pub mod auth;
pub mod entity_ids;
pub mod i18n;
pub mod id;

pub use auth::{Actor, AuthError, Capabilities, Capability, CurrentUser, Role, UserState};
pub use entity_ids::*;
pub use i18n::{MessageCatalog, MessageKey};
pub use id::Id;
