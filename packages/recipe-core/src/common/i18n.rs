//! Message keys and the default message catalog.
//!
//! Every user-visible string the engine produces goes through a stable
//! [`MessageKey`]. Front-ends may plug in their own translator; the bundled
//! [`MessageCatalog`] ships English defaults and can be overridden from a
//! flat JSON object of `"key": "text"` pairs. Parameters are interpolated
//! from `{{name}}` placeholders.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

macro_rules! message_keys {
    ($($variant:ident => $key:literal, $default:literal;)*) => {
        /// Stable lookup keys for every string the engine emits.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)*
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)*
                }
            }

            /// English fallback used when no catalog entry exists.
            pub fn default_text(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $default,)*
                }
            }
        }
    };
}

message_keys! {
    ErrorTitle => "common.error", "Error";
    SuccessTitle => "common.success", "Success";
    NoticeTitle => "common.notice", "Notice";
    Cancel => "common.cancel", "Cancel";
    Acknowledge => "common.ok", "OK";
    PleaseWait => "common.pleaseWait", "Your account is still loading. Please try again in a moment.";

    CannotRate => "recipes.cannotRate", "You can only rate recipes that belong to your household.";
    RatingFailed => "recipes.ratingFailed", "Failed to update rating.";
    HideFailed => "recipes.hideFailed", "Failed to update recipe.";

    DeleteTitle => "recipes.deleteTitle", "Delete recipe";
    DeleteMessage => "recipes.deleteMessage", "Delete \"{{name}}\"? This cannot be undone.";
    Delete => "recipes.delete", "Delete";
    DeleteFailed => "recipes.deleteFailed", "Failed to delete recipe.";

    EnhanceTitle => "recipes.enhanceTitle", "Enhance recipe";
    EnhanceMessage => "recipes.enhanceMessage", "Enhance this recipe?";
    Enhance => "recipes.enhance", "Enhance";
    EnhanceFailed => "recipes.enhanceFailed", "Failed to enhance recipe.";
    ForeignRecipeTitle => "recipes.foreignRecipeTitle", "Recipe from another household";
    ForeignRecipeCopyMessage => "recipes.foreignRecipeCopyMessage", "This recipe belongs to another household. Copy it to your household to enhance it.";
    CannotEnhance => "recipes.cannotEnhance", "This recipe belongs to another household and cannot be enhanced.";
    CannotReview => "recipes.cannotReview", "You can only review recipes that belong to your household.";
    ReviewFailed => "recipes.reviewFailed", "Failed to review enhancement.";
    EnhancementApproved => "recipes.enhancementApproved", "Enhancement approved.";
    EnhancementRejected => "recipes.enhancementRejected", "Enhancement rejected. The original recipe was restored.";

    CopyTitle => "recipes.copyTitle", "Copy recipe";
    CopyMessage => "recipes.copyMessage", "Copy \"{{name}}\" to your household?";
    CopyEnhancedMessage => "recipes.copyEnhancedMessage", "\"{{name}}\" has been enhanced. Keep the enhanced version, or copy the original and enhance it yourself?";
    Copy => "recipes.copy", "Copy";
    CopyAsIs => "recipes.copyAsIs", "Copy as-is";
    CopyAndEnhance => "recipes.copyAndEnhance", "Copy and enhance";
    CopySuccess => "recipes.copySuccess", "Recipe copied to your household.";
    CopyFailed => "recipes.copyFailed", "Failed to copy recipe.";

    MealPlanned => "mealPlan.planned", "{{name}} planned for {{mealType}} on {{date}}.";
    MealPlanFailed => "mealPlan.planFailed", "Failed to plan meal.";
    MealClearFailed => "mealPlan.clearFailed", "Failed to clear meal.";
    MealTypeBreakfast => "mealTypes.breakfast", "Breakfast";
    MealTypeLunch => "mealTypes.lunch", "Lunch";
    MealTypeDinner => "mealTypes.dinner", "Dinner";
    MealTypeSnack => "mealTypes.snack", "Snack";

    TransferTitle => "households.transferTitle", "Move recipe";
    TransferMessage => "households.transferMessage", "Move \"{{name}}\" to {{household}}?";
    Transfer => "households.transfer", "Move";
    TransferSuccess => "households.transferSuccess", "Recipe moved to {{household}}.";
    TransferFailed => "households.transferFailed", "Failed to move recipe.";
    CannotTransfer => "households.cannotTransfer", "Only administrators can move recipes between households.";
    HouseholdsFailed => "households.loadFailed", "Failed to load households.";

    CannotEdit => "recipes.cannotEdit", "You can only edit recipes that belong to your household.";
    SaveSuccess => "recipes.saveSuccess", "Recipe updated.";
    SaveFailed => "recipes.saveFailed", "Failed to update recipe.";
    CopyCannotBeShared => "recipes.copyCannotBeShared", "Copied recipes stay private to your household.";
    VisibilityFailed => "recipes.visibilityFailed", "Failed to change sharing.";
}

/// Key/value string catalog with `{{param}}` interpolation.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog containing only the built-in English strings.
    pub fn english() -> Self {
        let entries = MessageKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), key.default_text().to_string()))
            .collect();
        Self {
            locale: "en".to_string(),
            entries,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Layer entries from a flat JSON object over the current catalog.
    pub fn merge_json(&mut self, locale: &str, json: &str) -> Result<()> {
        let overrides: HashMap<String, String> =
            serde_json::from_str(json).context("message catalog must be a flat JSON object")?;
        self.entries.extend(overrides);
        self.locale = locale.to_string();
        Ok(())
    }

    /// Load overrides for `locale` from a JSON file on top of the English defaults.
    pub fn load(locale: &str, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog {}", path.display()))?;
        let mut catalog = Self::english();
        catalog.merge_json(locale, &json)?;
        Ok(catalog)
    }

    /// Look up `key` and substitute `{{name}}` placeholders.
    ///
    /// Unknown keys come back verbatim so a missing entry is visible rather
    /// than silently blank.
    pub fn translate(&self, key: &str, params: &[(&str, String)]) -> String {
        let template = match self.entries.get(key) {
            Some(text) => text.as_str(),
            None => return key.to_string(),
        };
        interpolate(template, params)
    }
}

fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}
