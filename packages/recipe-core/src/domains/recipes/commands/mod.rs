//! Recipe commands
//!
//! Each command is the intent for exactly one mutation call. Action handlers
//! decide which command to issue; the effect layer executes it against the
//! store. One user action, one command, one mutation.

use crate::common::RecipeId;
use crate::domains::households::TransferRequest;
use crate::domains::meal_plan::MealSlot;
use crate::domains::recipes::machines::ReviewAction;
use crate::domains::recipes::models::RecipePatch;
use crate::domains::recipes::sharing::CopyRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeCommand {
    Update { id: RecipeId, patch: RecipePatch },
    Delete { id: RecipeId },
    SetMeal { slot: MealSlot },
    Enhance { id: RecipeId },
    Review { id: RecipeId, action: ReviewAction },
    Copy { request: CopyRequest },
    Transfer { request: TransferRequest },
}

impl RecipeCommand {
    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            RecipeCommand::Update { .. } => "update",
            RecipeCommand::Delete { .. } => "delete",
            RecipeCommand::SetMeal { .. } => "set_meal",
            RecipeCommand::Enhance { .. } => "enhance",
            RecipeCommand::Review { .. } => "review",
            RecipeCommand::Copy { .. } => "copy",
            RecipeCommand::Transfer { .. } => "transfer",
        }
    }
}
