//! Recipe effects
//!
//! Executes a [`RecipeCommand`] against the store. Stateless: the command
//! carries everything the mutation needs. Errors are returned as-is; the
//! action layer decides how to surface them.

use anyhow::Result;
use tracing::{debug, info};

use crate::common::RecipeId;
use crate::domains::recipes::commands::RecipeCommand;
use crate::kernel::BaseRecipeStore;

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Done,
    /// The copy mutation returns the new recipe's id.
    Copied(RecipeId),
}

pub async fn execute(store: &dyn BaseRecipeStore, command: RecipeCommand) -> Result<CommandOutput> {
    let name = command.name();
    debug!(command = name, ?command, "executing recipe command");

    let output = match command {
        RecipeCommand::Update { id, patch } => {
            store.update(id, &patch).await?;
            CommandOutput::Done
        }
        RecipeCommand::Delete { id } => {
            store.delete(id).await?;
            CommandOutput::Done
        }
        RecipeCommand::SetMeal { slot } => {
            store.set_meal(&slot).await?;
            CommandOutput::Done
        }
        RecipeCommand::Enhance { id } => {
            store.enhance(id).await?;
            CommandOutput::Done
        }
        RecipeCommand::Review { id, action } => {
            store.review(id, action).await?;
            CommandOutput::Done
        }
        RecipeCommand::Copy { request } => CommandOutput::Copied(store.copy(request).await?),
        RecipeCommand::Transfer { request } => {
            store.transfer(request).await?;
            CommandOutput::Done
        }
    };

    info!(command = name, "recipe command completed");
    Ok(output)
}
