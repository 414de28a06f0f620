//! Edit-form contract and edit patches.
//!
//! The editing form renders exactly the fields listed by [`EditForm`]. A
//! copy never exposes a visibility selector, and [`RecipeEdit::into_patch`]
//! pins a copy's visibility to `household` even if a caller tries to send
//! something else.

use serde::{Deserialize, Serialize};

use crate::domains::meal_plan::MealType;
use crate::domains::recipes::models::{Recipe, RecipePatch, Visibility};

/// Fields the editing form may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Image,
    Diets,
    MealTypes,
    PrepTime,
    CookTime,
    Servings,
    Tags,
    Visibility,
}

/// Which fields the edit form exposes for a given recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    fields: Vec<EditField>,
}

impl EditForm {
    const COMMON: [EditField; 7] = [
        EditField::Image,
        EditField::Diets,
        EditField::MealTypes,
        EditField::PrepTime,
        EditField::CookTime,
        EditField::Servings,
        EditField::Tags,
    ];

    pub fn for_recipe(recipe: &Recipe) -> Self {
        let mut fields = Self::COMMON.to_vec();
        if !recipe.is_copy() {
            fields.push(EditField::Visibility);
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[EditField] {
        &self.fields
    }

    pub fn shows(&self, field: EditField) -> bool {
        self.fields.contains(&field)
    }

    pub fn shows_visibility_selector(&self) -> bool {
        self.shows(EditField::Visibility)
    }
}

/// Values submitted from the edit form. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeEdit {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub diets: Option<Vec<String>>,
    #[serde(default)]
    pub meal_types: Option<Vec<MealType>>,
    #[serde(default)]
    pub prep_minutes: Option<u32>,
    #[serde(default)]
    pub cook_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

impl RecipeEdit {
    /// Build the single patch for saving this edit against `recipe`.
    pub fn into_patch(self, recipe: &Recipe) -> RecipePatch {
        let patch = RecipePatch {
            image_url: self.image_url,
            diets: self.diets,
            meal_types: self.meal_types,
            prep_minutes: self.prep_minutes,
            cook_minutes: self.cook_minutes,
            servings: self.servings,
            tags: self.tags,
            visibility: self.visibility,
            ..Default::default()
        };
        enforce_copy_visibility(recipe, patch)
    }
}

/// Copies are never shared: any visibility in a copy's patch becomes `household`.
pub fn enforce_copy_visibility(recipe: &Recipe, mut patch: RecipePatch) -> RecipePatch {
    if recipe.is_copy() && patch.visibility.is_some() {
        patch.visibility = Some(Visibility::Household);
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RecipeId;

    fn copy_of(source: RecipeId) -> Recipe {
        let mut recipe = Recipe::new(None);
        recipe.copied_from = Some(source);
        recipe
    }

    #[test]
    fn copies_never_show_visibility_selector() {
        let original = Recipe::new(None);
        assert!(EditForm::for_recipe(&original).shows_visibility_selector());

        let copy = copy_of(original.id);
        let form = EditForm::for_recipe(&copy);
        assert!(!form.shows_visibility_selector());
        assert!(form.shows(EditField::Tags));
    }

    #[test]
    fn copy_patch_is_pinned_to_household() {
        let copy = copy_of(RecipeId::new());
        let patch = RecipeEdit {
            visibility: Some(Visibility::Shared),
            servings: Some(4),
            ..Default::default()
        }
        .into_patch(&copy);
        assert_eq!(patch.visibility, Some(Visibility::Household));
        assert_eq!(patch.servings, Some(4));
    }

    #[test]
    fn original_patch_keeps_requested_visibility() {
        let original = Recipe::new(None);
        let patch = RecipeEdit {
            visibility: Some(Visibility::Shared),
            ..Default::default()
        }
        .into_patch(&original);
        assert_eq!(patch.visibility, Some(Visibility::Shared));
    }

    #[test]
    fn empty_edit_yields_empty_patch() {
        let patch = RecipeEdit::default().into_patch(&Recipe::new(None));
        assert!(patch.is_empty());
    }
}
