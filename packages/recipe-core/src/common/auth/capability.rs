use super::Role;

/// Role-gated features of the recipe engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Reassign a recipe to another household
    TransferHousehold,

    /// Read the list of all households (transfer targets)
    ListHouseholds,
}

/// Capability set resolved once from a role.
///
/// Every role-gated affordance reads from here instead of comparing role
/// strings at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_transfer_household: bool,
    pub can_list_households: bool,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Superuser => Self {
                can_transfer_household: true,
                can_list_households: true,
            },
            Role::Member => Self::default(),
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::TransferHousehold => self.can_transfer_household,
            Capability::ListHouseholds => self.can_list_households,
        }
    }
}
