use serde::{Deserialize, Serialize};

use super::Capabilities;
use crate::common::HouseholdId;

/// Role of the signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Superuser,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "superuser" => Ok(Role::Superuser),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// The acting user's household identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// `None` means the account is loaded but belongs to no household.
    pub household_id: Option<HouseholdId>,
    #[serde(default)]
    pub role: Role,
}

impl CurrentUser {
    pub fn new(household_id: HouseholdId, role: Role) -> Self {
        Self {
            household_id: Some(household_id),
            role,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(self.role)
    }
}

/// What the user accessor currently knows about the acting user.
///
/// `Loading` is distinct from `Loaded` with no household: nothing may be
/// decided while loading, whereas a loaded user without a household simply
/// owns nothing that has a household.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserState {
    #[default]
    Loading,
    /// Resolved, but there is no signed-in account.
    Anonymous,
    Loaded(CurrentUser),
}

impl UserState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UserState::Loading)
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            UserState::Loaded(user) => Some(user),
            _ => None,
        }
    }

    /// Capabilities are empty until a user is loaded.
    pub fn capabilities(&self) -> Capabilities {
        self.user()
            .map(CurrentUser::capabilities)
            .unwrap_or_default()
    }
}

impl From<Option<CurrentUser>> for UserState {
    fn from(user: Option<CurrentUser>) -> Self {
        match user {
            Some(user) => UserState::Loaded(user),
            None => UserState::Anonymous,
        }
    }
}
