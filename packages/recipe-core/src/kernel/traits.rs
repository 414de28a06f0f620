// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no decision logic.
// The action handlers decide; these collaborators persist, prompt and display.
//
// Naming convention: Base* for trait names (e.g., BaseRecipeStore, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::auth::UserState;
use crate::common::{MessageCatalog, RecipeId};
use crate::domains::households::{Household, TransferRequest};
use crate::domains::meal_plan::MealSlot;
use crate::domains::recipes::machines::ReviewAction;
use crate::domains::recipes::models::{Recipe, RecipePatch};
use crate::domains::recipes::sharing::CopyRequest;

// =============================================================================
// Current User (Infrastructure)
// =============================================================================

pub trait BaseUserSource: Send + Sync {
    /// Current knowledge of the acting user; `Loading` until resolved.
    fn current_user(&self) -> UserState;
}

// =============================================================================
// Recipe Store (Infrastructure - data access)
// =============================================================================

#[async_trait]
pub trait BaseRecipeStore: Send + Sync {
    /// Read the current snapshot of a recipe (the refetch after a mutation)
    async fn fetch(&self, id: RecipeId) -> Result<Option<Recipe>>;

    /// Partial update of mutable fields
    async fn update(&self, id: RecipeId, patch: &RecipePatch) -> Result<()>;

    async fn delete(&self, id: RecipeId) -> Result<()>;

    /// Assign or clear (recipe_id = None) one meal-plan slot
    async fn set_meal(&self, slot: &MealSlot) -> Result<()>;

    /// Run the AI rewrite; the result is left awaiting review
    async fn enhance(&self, id: RecipeId) -> Result<()>;

    /// Approve or reject the most recent enhancement.
    ///
    /// Approve marks it reviewed. Reject is expected to restore the
    /// pre-enhancement content and clear `enhanced`.
    async fn review(&self, id: RecipeId, action: ReviewAction) -> Result<()>;

    /// Duplicate into the caller's household, returning the new recipe id
    async fn copy(&self, request: CopyRequest) -> Result<RecipeId>;

    /// All households (superuser only)
    async fn list_households(&self) -> Result<Vec<Household>>;

    /// Reassign a recipe's household (superuser only)
    async fn transfer(&self, request: TransferRequest) -> Result<()>;
}

// =============================================================================
// Confirmation Dialogs (Infrastructure - presentation)
// =============================================================================

/// The option a user picked in a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogChoice {
    Cancel,
    Confirm,
    Copy,
    CopyAsIs,
    CopyAndEnhance,
    Acknowledge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub choice: DialogChoice,
    pub label: String,
    pub style: ButtonStyle,
}

/// A modal question with a fixed set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
}

impl ConfirmationPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: Vec::new(),
        }
    }

    pub fn button(mut self, choice: DialogChoice, label: impl Into<String>, style: ButtonStyle) -> Self {
        self.buttons.push(DialogButton {
            choice,
            label: label.into(),
            style,
        });
        self
    }

    pub fn choices(&self) -> Vec<DialogChoice> {
        self.buttons.iter().map(|b| b.choice).collect()
    }

    pub fn offers(&self, choice: DialogChoice) -> bool {
        self.buttons.iter().any(|b| b.choice == choice)
    }
}

#[async_trait]
pub trait BaseDialogService: Send + Sync {
    /// Show `prompt` and resolve with the chosen button.
    ///
    /// Implementations must return one of the prompt's own choices;
    /// dismissing the dialog counts as `Cancel`.
    async fn request_confirmation(&self, prompt: ConfirmationPrompt) -> DialogChoice;
}

// =============================================================================
// Notifications & Navigation (Infrastructure - presentation)
// =============================================================================

pub trait BaseNotifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

pub trait BaseNavigator: Send + Sync {
    /// Return to the previous view
    fn go_back(&self);

    /// Show another recipe's detail view
    fn open_recipe(&self, id: RecipeId);
}

// =============================================================================
// Localization (Infrastructure)
// =============================================================================

pub trait BaseTranslator: Send + Sync {
    fn t(&self, key: &str, params: &[(&str, String)]) -> String;
}

impl BaseTranslator for MessageCatalog {
    fn t(&self, key: &str, params: &[(&str, String)]) -> String {
        self.translate(key, params)
    }
}
