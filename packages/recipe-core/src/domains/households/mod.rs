//! Households and superuser recipe transfer

use serde::{Deserialize, Serialize};

use crate::common::{HouseholdId, RecipeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub name: String,
}

/// Input to the transfer mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub recipe_id: RecipeId,
    pub target_household_id: HouseholdId,
}
