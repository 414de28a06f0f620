use super::{AuthError, Capability, UserState};
use crate::domains::recipes::models::Recipe;
use crate::domains::recipes::ownership;

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// use recipe_core::common::auth::{Actor, Capability, UserState};
///
/// let refused = Actor::new(&UserState::Loading)
///     .can(Capability::TransferHousehold)
///     .check();
/// assert!(refused.is_err());
/// ```
pub struct Actor<'a> {
    user: &'a UserState,
}

impl<'a> Actor<'a> {
    pub fn new(user: &'a UserState) -> Self {
        Self { user }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder<'a> {
        CapabilityBuilder {
            user: self.user,
            capability,
        }
    }

    /// Require that the actor's household owns `recipe`.
    pub fn owns(self, recipe: &Recipe) -> Result<(), AuthError> {
        match ownership::is_owned(recipe, self.user) {
            None => Err(AuthError::StillLoading),
            Some(true) => Ok(()),
            Some(false) => Err(AuthError::NotOwner),
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder<'a> {
    user: &'a UserState,
    capability: Capability,
}

impl CapabilityBuilder<'_> {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        match self.user {
            UserState::Loading => Err(AuthError::StillLoading),
            UserState::Anonymous => Err(AuthError::AuthenticationRequired),
            UserState::Loaded(user) => {
                if user.capabilities().allows(self.capability) {
                    Ok(())
                } else {
                    Err(AuthError::CapabilityRequired(self.capability))
                }
            }
        }
    }
}
