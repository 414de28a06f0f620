use tracing::{error, info, warn};

use super::{ActionOutcome, RecipeActions};
use crate::common::auth::Actor;
use crate::common::MessageKey;
use crate::domains::recipes::commands::RecipeCommand;
use crate::domains::recipes::machines::moderation;
use crate::domains::recipes::machines::ModerationIntent;
use crate::kernel::{ButtonStyle, DialogChoice};

impl RecipeActions {
    /// Toggle the favorite rating. Owner only.
    pub async fn thumb_up(&mut self) -> ActionOutcome {
        self.moderate(ModerationIntent::ThumbUp).await
    }

    /// Toggle hidden. Owner only.
    pub async fn thumb_down(&mut self) -> ActionOutcome {
        self.moderate(ModerationIntent::ThumbDown).await
    }

    async fn moderate(&mut self, intent: ModerationIntent) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };

        let user = self.user();
        if user.is_loading() {
            self.notify(MessageKey::NoticeTitle, MessageKey::PleaseWait);
            return ActionOutcome::Refused;
        }

        let Some(recipe) = self.recipe.clone() else {
            return ActionOutcome::Skipped;
        };

        if let Err(e) = Actor::new(&user).owns(&recipe) {
            warn!(recipe_id = %id, ?intent, reason = %e, "moderation refused");
            self.notify_refusal(&e, MessageKey::CannotRate);
            return ActionOutcome::Refused;
        }

        let transition = moderation::decide(&recipe, intent);
        info!(
            recipe_id = %id,
            ?intent,
            from = ?transition.from,
            to = ?transition.to,
            fields = ?transition.patch.touched_fields(),
            "moderating recipe"
        );

        match self.run_update(id, &recipe, transition.patch).await {
            Ok(()) => {
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, ?intent, error = %e, "moderation update failed");
                let message = match intent {
                    ModerationIntent::ThumbUp => MessageKey::RatingFailed,
                    ModerationIntent::ThumbDown => MessageKey::HideFailed,
                };
                self.notify(MessageKey::ErrorTitle, message);
                ActionOutcome::Failed
            }
        }
    }

    /// Delete after an explicit destructive confirmation, then navigate back.
    ///
    /// Ownership is enforced by the backend, not checked here. On failure the
    /// view stays where it is.
    pub async fn delete(&mut self) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };

        let message = self.t_with(MessageKey::DeleteMessage, &[("name", self.recipe_name())]);
        let prompt = self.cancel_button(self.prompt(MessageKey::DeleteTitle, message)).button(
            DialogChoice::Confirm,
            self.t(MessageKey::Delete),
            ButtonStyle::Destructive,
        );

        if self.confirm(prompt).await != DialogChoice::Confirm {
            info!(recipe_id = %id, "delete cancelled");
            return ActionOutcome::Cancelled;
        }

        match self.run(RecipeCommand::Delete { id }).await {
            Ok(_) => {
                info!(recipe_id = %id, "recipe deleted");
                self.kernel.navigator.go_back();
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, error = %e, "delete failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::DeleteFailed);
                ActionOutcome::Failed
            }
        }
    }
}
