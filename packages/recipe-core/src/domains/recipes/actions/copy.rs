use tracing::{error, info};

use super::{ActionOutcome, RecipeActions};
use crate::common::MessageKey;
use crate::domains::recipes::commands::RecipeCommand;
use crate::domains::recipes::effects::CommandOutput;
use crate::domains::recipes::sharing::{CopyPrompt, CopyRequest};
use crate::kernel::{ButtonStyle, DialogChoice};

impl RecipeActions {
    /// Copy this recipe into the acting household and open the copy.
    ///
    /// An enhanced source asks whether to keep its enhanced content or to
    /// start from the original.
    pub async fn request_copy(&mut self) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };
        let name = [("name", self.recipe_name())];

        let keep_enhanced = match CopyPrompt::for_source(self.recipe.as_ref()) {
            CopyPrompt::Simple => {
                let prompt = self
                    .cancel_button(
                        self.prompt(MessageKey::CopyTitle, self.t_with(MessageKey::CopyMessage, &name)),
                    )
                    .button(DialogChoice::Copy, self.t(MessageKey::Copy), ButtonStyle::Default);
                match self.confirm(prompt).await {
                    DialogChoice::Copy => false,
                    _ => return ActionOutcome::Cancelled,
                }
            }
            CopyPrompt::KeepOrReenhance => {
                let prompt = self
                    .cancel_button(self.prompt(
                        MessageKey::CopyTitle,
                        self.t_with(MessageKey::CopyEnhancedMessage, &name),
                    ))
                    .button(
                        DialogChoice::CopyAsIs,
                        self.t(MessageKey::CopyAsIs),
                        ButtonStyle::Default,
                    )
                    .button(
                        DialogChoice::CopyAndEnhance,
                        self.t(MessageKey::CopyAndEnhance),
                        ButtonStyle::Default,
                    );
                match self.confirm(prompt).await {
                    DialogChoice::CopyAsIs => true,
                    DialogChoice::CopyAndEnhance => false,
                    _ => return ActionOutcome::Cancelled,
                }
            }
        };

        let request = CopyRequest { id, keep_enhanced };
        match self.run(RecipeCommand::Copy { request }).await {
            Ok(CommandOutput::Copied(new_id)) => {
                info!(source_id = %id, copy_id = %new_id, keep_enhanced, "recipe copied");
                self.notify(MessageKey::SuccessTitle, MessageKey::CopySuccess);
                self.kernel.navigator.open_recipe(new_id);
                ActionOutcome::Completed
            }
            Ok(other) => {
                error!(source_id = %id, ?other, "copy returned no recipe id");
                self.notify(MessageKey::ErrorTitle, MessageKey::CopyFailed);
                ActionOutcome::Failed
            }
            Err(e) => {
                error!(source_id = %id, error = %e, "copy failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::CopyFailed);
                ActionOutcome::Failed
            }
        }
    }
}
