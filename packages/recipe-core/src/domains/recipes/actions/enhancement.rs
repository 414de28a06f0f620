use tracing::{error, info, warn};

use super::{ActionOutcome, RecipeActions};
use crate::common::auth::Actor;
use crate::common::MessageKey;
use crate::domains::recipes::commands::RecipeCommand;
use crate::domains::recipes::machines::enhancement;
use crate::domains::recipes::machines::{EnhanceRoute, ReviewAction};
use crate::kernel::{ButtonStyle, DialogChoice};

impl RecipeActions {
    /// Ask for an AI rewrite.
    ///
    /// Owners confirm and enhance in place, after which the review modal
    /// opens. Foreign recipes are routed to a copy when copyable and
    /// explained away otherwise.
    pub async fn request_enhance(&mut self) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };
        let Some(recipe) = self.recipe.clone() else {
            return ActionOutcome::Skipped;
        };

        let route = enhancement::route(&recipe, &self.user());
        info!(recipe_id = %id, ?route, "enhance requested");

        match route {
            EnhanceRoute::Undecided => {
                self.notify(MessageKey::NoticeTitle, MessageKey::PleaseWait);
                ActionOutcome::Refused
            }
            EnhanceRoute::InPlace => {
                let prompt = self
                    .cancel_button(
                        self.prompt(MessageKey::EnhanceTitle, self.t(MessageKey::EnhanceMessage)),
                    )
                    .button(
                        DialogChoice::Confirm,
                        self.t(MessageKey::Enhance),
                        ButtonStyle::Default,
                    );
                if self.confirm(prompt).await != DialogChoice::Confirm {
                    return ActionOutcome::Cancelled;
                }

                match self.run(RecipeCommand::Enhance { id }).await {
                    Ok(_) => {
                        self.reload().await;
                        self.modals.enhancement_review = true;
                        ActionOutcome::Completed
                    }
                    Err(e) => {
                        error!(recipe_id = %id, error = %e, "enhance failed");
                        self.notify(MessageKey::ErrorTitle, MessageKey::EnhanceFailed);
                        ActionOutcome::Failed
                    }
                }
            }
            EnhanceRoute::CopyFirst => {
                let prompt = self
                    .cancel_button(self.prompt(
                        MessageKey::ForeignRecipeTitle,
                        self.t(MessageKey::ForeignRecipeCopyMessage),
                    ))
                    .button(DialogChoice::Copy, self.t(MessageKey::Copy), ButtonStyle::Default);
                match self.confirm(prompt).await {
                    DialogChoice::Copy => self.request_copy().await,
                    _ => ActionOutcome::Cancelled,
                }
            }
            EnhanceRoute::Unavailable => {
                let prompt = self
                    .prompt(MessageKey::ForeignRecipeTitle, self.t(MessageKey::CannotEnhance))
                    .button(
                        DialogChoice::Acknowledge,
                        self.t(MessageKey::Acknowledge),
                        ButtonStyle::Default,
                    );
                self.confirm(prompt).await;
                ActionOutcome::Refused
            }
        }
    }

    /// Approve or reject the pending enhancement. Owner only.
    ///
    /// Success closes the review modal; failure leaves it as it was so the
    /// user can retry.
    pub async fn review_enhancement(&mut self, action: ReviewAction) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };
        let Some(recipe) = self.recipe.clone() else {
            return ActionOutcome::Skipped;
        };

        if let Err(e) = Actor::new(&self.user()).owns(&recipe) {
            warn!(recipe_id = %id, action = action.as_str(), reason = %e, "review refused");
            self.notify_refusal(&e, MessageKey::CannotReview);
            return ActionOutcome::Refused;
        }

        match self.run(RecipeCommand::Review { id, action }).await {
            Ok(_) => {
                info!(recipe_id = %id, action = action.as_str(), "enhancement reviewed");
                self.modals.enhancement_review = false;
                let message = match action {
                    ReviewAction::Approve => MessageKey::EnhancementApproved,
                    ReviewAction::Reject => MessageKey::EnhancementRejected,
                };
                self.notify(MessageKey::SuccessTitle, message);
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, action = action.as_str(), error = %e, "review failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::ReviewFailed);
                ActionOutcome::Failed
            }
        }
    }

    /// Review-modal shortcut: approve, then close the modal whatever happened.
    pub async fn approve_enhancement(&mut self) -> ActionOutcome {
        let outcome = self.review_enhancement(ReviewAction::Approve).await;
        self.modals.enhancement_review = false;
        outcome
    }

    /// Review-modal shortcut: reject, then close the modal whatever happened.
    pub async fn reject_enhancement(&mut self) -> ActionOutcome {
        let outcome = self.review_enhancement(ReviewAction::Reject).await;
        self.modals.enhancement_review = false;
        outcome
    }
}
