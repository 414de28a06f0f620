use tracing::{error, info, warn};

use super::{ActionOutcome, RecipeActions};
use crate::common::auth::Actor;
use crate::common::MessageKey;
use crate::domains::recipes::editing::RecipeEdit;
use crate::domains::recipes::models::{RecipePatch, Visibility};

impl RecipeActions {
    /// Save the edit form as one partial update. Owner only.
    pub async fn save_edits(&mut self, edit: RecipeEdit) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };
        let Some(recipe) = self.recipe.clone() else {
            return ActionOutcome::Skipped;
        };

        if let Err(e) = Actor::new(&self.user()).owns(&recipe) {
            warn!(recipe_id = %id, reason = %e, "edit refused");
            self.notify_refusal(&e, MessageKey::CannotEdit);
            return ActionOutcome::Refused;
        }

        let patch = edit.into_patch(&recipe);
        if patch.is_empty() {
            self.modals.edit = false;
            return ActionOutcome::Skipped;
        }

        let fields = patch.touched_fields();
        match self.run_update(id, &recipe, patch).await {
            Ok(()) => {
                info!(recipe_id = %id, ?fields, "recipe edited");
                self.modals.edit = false;
                self.notify(MessageKey::SuccessTitle, MessageKey::SaveSuccess);
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, ?fields, error = %e, "save failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::SaveFailed);
                ActionOutcome::Failed
            }
        }
    }

    /// Share with everyone or keep within the household. Owner only; copies
    /// always stay in the household.
    pub async fn set_visibility(&mut self, visibility: Visibility) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };
        let Some(recipe) = self.recipe.clone() else {
            return ActionOutcome::Skipped;
        };

        if let Err(e) = Actor::new(&self.user()).owns(&recipe) {
            warn!(recipe_id = %id, reason = %e, "visibility change refused");
            self.notify_refusal(&e, MessageKey::CannotEdit);
            return ActionOutcome::Refused;
        }

        if recipe.is_copy() {
            self.notify(MessageKey::NoticeTitle, MessageKey::CopyCannotBeShared);
            return ActionOutcome::Refused;
        }

        if recipe.visibility == visibility {
            return ActionOutcome::Skipped;
        }

        let patch = RecipePatch {
            visibility: Some(visibility),
            ..Default::default()
        };
        match self.run_update(id, &recipe, patch).await {
            Ok(()) => {
                info!(recipe_id = %id, ?visibility, "visibility changed");
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, ?visibility, error = %e, "visibility change failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::VisibilityFailed);
                ActionOutcome::Failed
            }
        }
    }
}
