//! Recipe actions - the per-recipe handle presentation code binds to.
//!
//! A [`RecipeActions`] bundles, for one recipe id:
//!
//! - permission flags from the ownership resolver
//! - the modal-open flags of the detail view
//! - one async handler per user intent
//!
//! Every handler follows the same shape: check preconditions, ask the user
//! when the decision is destructive or ambiguous, issue exactly one command,
//! then report the result as a notice. Handlers never return errors; what
//! happened is reported as an [`ActionOutcome`].
//!
//! Handlers are grouped by workflow:
//! - `moderation` - thumbs up / thumbs down / delete
//! - `enhancement` - enhance and review
//! - `copy` - copy-on-write sharing
//! - `meal_plan` - plan / clear a meal slot
//! - `households` - superuser household transfer
//! - `editing` - edit form and sharing toggle

mod copy;
mod editing;
mod enhancement;
mod households;
mod meal_plan;
mod moderation;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::common::auth::{AuthError, Capabilities, UserState};
use crate::common::{MessageKey, RecipeId};
use crate::domains::recipes::commands::RecipeCommand;
use crate::domains::recipes::editing::{enforce_copy_visibility, EditForm};
use crate::domains::recipes::effects::{self, CommandOutput};
use crate::domains::recipes::machines::ModerationStatus;
use crate::domains::recipes::models::{Recipe, RecipePatch};
use crate::domains::recipes::ownership::RecipePermissions;
use crate::kernel::{ButtonStyle, ConfirmationPrompt, DialogChoice, RecipeKernel};

/// What a handler ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing to act on (no recipe id or snapshot); no notice shown
    Skipped,
    /// Preconditions refused the action; a notice explained why
    Refused,
    /// The user dismissed the confirmation
    Cancelled,
    /// The mutation succeeded
    Completed,
    /// The mutation failed; an error notice was shown
    Failed,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}

/// Modal-open flags owned by one recipe view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub plan: bool,
    pub edit: bool,
    pub enhancement_review: bool,
    pub transfer: bool,
}

pub struct RecipeActions {
    kernel: Arc<RecipeKernel>,
    recipe_id: Option<RecipeId>,
    recipe: Option<Recipe>,
    modals: ModalState,
}

impl RecipeActions {
    /// Handle for `recipe_id` with no snapshot loaded yet.
    pub fn new(kernel: Arc<RecipeKernel>, recipe_id: Option<RecipeId>) -> Self {
        Self {
            kernel,
            recipe_id,
            recipe: None,
            modals: ModalState::default(),
        }
    }

    /// Handle seeded with an already-fetched snapshot.
    pub fn with_recipe(kernel: Arc<RecipeKernel>, recipe: Recipe) -> Self {
        Self {
            kernel,
            recipe_id: Some(recipe.id),
            recipe: Some(recipe),
            modals: ModalState::default(),
        }
    }

    /// Handle for `recipe_id`, fetching its snapshot first.
    pub async fn open(kernel: Arc<RecipeKernel>, recipe_id: RecipeId) -> Self {
        let mut actions = Self::new(kernel, Some(recipe_id));
        actions.reload().await;
        actions
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn recipe_id(&self) -> Option<RecipeId> {
        self.recipe_id
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Replace the snapshot, e.g. after the data layer refetched it.
    pub fn set_recipe(&mut self, recipe: Option<Recipe>) {
        self.recipe = recipe;
    }

    /// Re-read the snapshot from the store.
    ///
    /// A failed read keeps the old snapshot; a missing recipe clears it.
    pub async fn reload(&mut self) {
        let Some(id) = self.recipe_id else {
            return;
        };
        match self.kernel.store.fetch(id).await {
            Ok(recipe) => {
                debug!(recipe_id = %id, found = recipe.is_some(), "recipe snapshot reloaded");
                self.recipe = recipe;
            }
            Err(e) => warn!(recipe_id = %id, error = %e, "failed to reload recipe snapshot"),
        }
    }

    // =========================================================================
    // Permission flags
    // =========================================================================

    pub fn user(&self) -> UserState {
        self.kernel.users.current_user()
    }

    pub fn permissions(&self) -> RecipePermissions {
        RecipePermissions::resolve(self.recipe.as_ref(), &self.user())
    }

    pub fn is_owned(&self) -> Option<bool> {
        self.permissions().is_owned
    }

    pub fn can_edit(&self) -> bool {
        self.permissions().can_edit
    }

    pub fn can_copy(&self) -> bool {
        self.permissions().can_copy
    }

    pub fn can_enhance(&self) -> bool {
        self.permissions().can_enhance
    }

    pub fn needs_review(&self) -> bool {
        self.recipe.as_ref().is_some_and(Recipe::needs_review)
    }

    pub fn is_copy(&self) -> bool {
        self.recipe.as_ref().is_some_and(Recipe::is_copy)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.user().capabilities()
    }

    pub fn moderation_status(&self) -> Option<ModerationStatus> {
        self.recipe.as_ref().map(ModerationStatus::of)
    }

    pub fn edit_form(&self) -> Option<EditForm> {
        self.recipe.as_ref().map(EditForm::for_recipe)
    }

    // =========================================================================
    // Modal flags
    // =========================================================================

    pub fn modals(&self) -> ModalState {
        self.modals
    }

    pub fn show_plan_modal(&self) -> bool {
        self.modals.plan
    }

    pub fn show_edit_modal(&self) -> bool {
        self.modals.edit
    }

    pub fn show_enhancement_review_modal(&self) -> bool {
        self.modals.enhancement_review
    }

    pub fn show_transfer_modal(&self) -> bool {
        self.modals.transfer
    }

    pub fn set_show_plan_modal(&mut self, open: bool) {
        self.modals.plan = open;
    }

    pub fn set_show_edit_modal(&mut self, open: bool) {
        self.modals.edit = open;
    }

    pub fn set_show_enhancement_review_modal(&mut self, open: bool) {
        self.modals.enhancement_review = open;
    }

    pub fn set_show_transfer_modal(&mut self, open: bool) {
        self.modals.transfer = open;
    }

    // =========================================================================
    // Shared plumbing for the handlers
    // =========================================================================

    fn t(&self, key: MessageKey) -> String {
        self.kernel.translator.t(key.as_str(), &[])
    }

    fn t_with(&self, key: MessageKey, params: &[(&str, String)]) -> String {
        self.kernel.translator.t(key.as_str(), params)
    }

    fn notify(&self, title: MessageKey, message: MessageKey) {
        self.kernel.notifier.notify(&self.t(title), &self.t(message));
    }

    fn notify_text(&self, title: MessageKey, message: String) {
        self.kernel.notifier.notify(&self.t(title), &message);
    }

    /// Notice for an authorization refusal; loading always gets "please wait".
    fn notify_refusal(&self, err: &AuthError, refusal: MessageKey) {
        let message = match err {
            AuthError::StillLoading => MessageKey::PleaseWait,
            _ => refusal,
        };
        let title = match err {
            AuthError::StillLoading => MessageKey::NoticeTitle,
            _ => MessageKey::ErrorTitle,
        };
        self.notify(title, message);
    }

    fn recipe_name(&self) -> String {
        self.recipe
            .as_ref()
            .map(|recipe| recipe.title.clone())
            .unwrap_or_default()
    }

    fn prompt(&self, title: MessageKey, message: String) -> ConfirmationPrompt {
        ConfirmationPrompt::new(self.t(title), message)
    }

    fn cancel_button(&self, prompt: ConfirmationPrompt) -> ConfirmationPrompt {
        prompt.button(DialogChoice::Cancel, self.t(MessageKey::Cancel), ButtonStyle::Cancel)
    }

    async fn confirm(&self, prompt: ConfirmationPrompt) -> DialogChoice {
        self.kernel.dialogs.request_confirmation(prompt).await
    }

    async fn run(&self, command: RecipeCommand) -> anyhow::Result<CommandOutput> {
        effects::execute(&*self.kernel.store, command).await
    }

    /// Every partial update goes through here so a copy can never be shared.
    async fn run_update(&self, id: RecipeId, recipe: &Recipe, patch: RecipePatch) -> anyhow::Result<()> {
        let patch = enforce_copy_visibility(recipe, patch);
        self.run(RecipeCommand::Update { id, patch }).await?;
        Ok(())
    }
}
