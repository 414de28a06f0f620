use tracing::{error, info, warn};

use super::{ActionOutcome, RecipeActions};
use crate::common::auth::{Actor, Capability};
use crate::common::MessageKey;
use crate::domains::households::{Household, TransferRequest};
use crate::domains::recipes::commands::RecipeCommand;
use crate::kernel::{ButtonStyle, DialogChoice};

impl RecipeActions {
    /// Households a superuser may move this recipe to.
    ///
    /// Refusal or a failed query yields an empty list and a notice.
    pub async fn load_households(&self) -> Vec<Household> {
        if let Err(e) = Actor::new(&self.user()).can(Capability::ListHouseholds).check() {
            warn!(reason = %e, "household list refused");
            self.notify_refusal(&e, MessageKey::CannotTransfer);
            return Vec::new();
        }

        // Read-only lookup; only mutations go through RecipeCommand.
        match self.kernel.store.list_households().await {
            Ok(households) => {
                info!(count = households.len(), "households loaded");
                households
            }
            Err(e) => {
                error!(error = %e, "failed to load households");
                self.notify(MessageKey::ErrorTitle, MessageKey::HouseholdsFailed);
                Vec::new()
            }
        }
    }

    /// Move this recipe to `target`. Superuser only.
    pub async fn transfer_household(&mut self, target: &Household) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };

        if let Err(e) = Actor::new(&self.user()).can(Capability::TransferHousehold).check() {
            warn!(recipe_id = %id, target = %target.id, reason = %e, "transfer refused");
            self.notify_refusal(&e, MessageKey::CannotTransfer);
            return ActionOutcome::Refused;
        }

        let current = self.recipe.as_ref().and_then(|recipe| recipe.household_id);
        if current == Some(target.id) {
            info!(recipe_id = %id, target = %target.id, "recipe already in target household");
            return ActionOutcome::Skipped;
        }

        let message = self.t_with(
            MessageKey::TransferMessage,
            &[("name", self.recipe_name()), ("household", target.name.clone())],
        );
        let prompt = self
            .cancel_button(self.prompt(MessageKey::TransferTitle, message))
            .button(
                DialogChoice::Confirm,
                self.t(MessageKey::Transfer),
                ButtonStyle::Default,
            );
        if self.confirm(prompt).await != DialogChoice::Confirm {
            return ActionOutcome::Cancelled;
        }

        let request = TransferRequest {
            recipe_id: id,
            target_household_id: target.id,
        };
        match self.run(RecipeCommand::Transfer { request }).await {
            Ok(_) => {
                info!(recipe_id = %id, target = %target.id, "recipe transferred");
                self.modals.transfer = false;
                let message =
                    self.t_with(MessageKey::TransferSuccess, &[("household", target.name.clone())]);
                self.notify_text(MessageKey::SuccessTitle, message);
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, target = %target.id, error = %e, "transfer failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::TransferFailed);
                ActionOutcome::Failed
            }
        }
    }
}
