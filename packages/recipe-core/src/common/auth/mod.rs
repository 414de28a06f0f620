//! Authorization for the recipe engine
//!
//! Two kinds of checks exist:
//!
//! - household ownership of a recipe (`Actor::owns`)
//! - role-gated capabilities such as household transfer (`Actor::can`)
//!
//! ```rust
//! use recipe_core::common::auth::{Actor, Capability, CurrentUser, Role, UserState};
//! use recipe_core::common::HouseholdId;
//!
//! let user = UserState::Loaded(CurrentUser::new(HouseholdId::new(), Role::Superuser));
//! Actor::new(&user)
//!     .can(Capability::TransferHousehold)
//!     .check()
//!     .expect("superusers may transfer");
//! ```

mod builder;
mod capability;
mod errors;
mod user;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::{Capabilities, Capability};
pub use errors::AuthError;
pub use user::{CurrentUser, Role, UserState};
