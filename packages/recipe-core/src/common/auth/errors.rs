use thiserror::Error;

use super::Capability;

/// Authorization refusals raised by [`Actor`](super::Actor) checks.
///
/// These never escape an action handler; the dispatcher turns each one into
/// a user-visible notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Current user is still loading")]
    StillLoading,

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Recipe belongs to another household")]
    NotOwner,

    #[error("Missing capability: {0:?}")]
    CapabilityRequired(Capability),
}
