use serde::{Deserialize, Serialize};

use super::RecipePatch;
use crate::common::{HouseholdId, RecipeId};
use crate::domains::meal_plan::MealType;
use crate::domains::recipes::RecipeError;

/// Who can see a recipe outside its owning household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Private to the owning household
    #[default]
    Household,
    /// Visible to, and copyable by, other households
    Shared,
}

/// Moderation rating. Stored as `1` or `5`; unrated is `None` on the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Unfavorable,
    Favorite,
}

impl TryFrom<u8> for Rating {
    type Error = RecipeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Unfavorable),
            5 => Ok(Rating::Favorite),
            other => Err(RecipeError::InvalidRating(other)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        match rating {
            Rating::Unfavorable => 1,
            Rating::Favorite => 5,
        }
    }
}

/// Recipe snapshot as seen by the lifecycle engine.
///
/// Ingredients, instructions and nutrition live elsewhere; only the fields
/// the engine decides on or patches are modelled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    /// `None` for legacy recipes that predate households.
    #[serde(default)]
    pub household_id: Option<HouseholdId>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub enhanced: bool,
    #[serde(default)]
    pub enhancement_reviewed: bool,
    #[serde(default)]
    pub copied_from: Option<RecipeId>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub prep_minutes: Option<u32>,
    #[serde(default)]
    pub cook_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Fresh, unrated, unenhanced recipe owned by `household_id`.
    pub fn new(household_id: Option<HouseholdId>) -> Self {
        Self {
            id: RecipeId::new(),
            title: String::new(),
            household_id,
            visibility: Visibility::Household,
            rating: None,
            hidden: false,
            enhanced: false,
            enhancement_reviewed: false,
            copied_from: None,
            image_url: None,
            diets: Vec::new(),
            meal_types: Vec::new(),
            prep_minutes: None,
            cook_minutes: None,
            servings: None,
            tags: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// True when this recipe was duplicated from another one.
    pub fn is_copy(&self) -> bool {
        self.copied_from.is_some()
    }

    /// An enhancement is awaiting a human approve/reject decision.
    pub fn needs_review(&self) -> bool {
        self.enhanced && !self.enhancement_reviewed
    }

    /// Apply `patch` in place, the way the backend would.
    ///
    /// Stores and test doubles use this to keep their snapshots consistent
    /// with what they were asked to persist.
    pub fn apply(&mut self, patch: &RecipePatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(enhanced) = patch.enhanced {
            self.enhanced = enhanced;
        }
        if let Some(reviewed) = patch.enhancement_reviewed {
            self.enhancement_reviewed = reviewed;
        }
        if let Some(visibility) = patch.visibility {
            self.visibility = visibility;
        }
        if let Some(household_id) = patch.household_id {
            self.household_id = Some(household_id);
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(diets) = &patch.diets {
            self.diets = diets.clone();
        }
        if let Some(meal_types) = &patch.meal_types {
            self.meal_types = meal_types.clone();
        }
        if let Some(prep) = patch.prep_minutes {
            self.prep_minutes = Some(prep);
        }
        if let Some(cook) = patch.cook_minutes {
            self.cook_minutes = Some(cook);
        }
        if let Some(servings) = patch.servings {
            self.servings = Some(servings);
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
    }
}

/// Standalone form of [`Recipe::needs_review`] that accepts a missing recipe.
pub fn needs_review(recipe: Option<&Recipe>) -> bool {
    recipe.is_some_and(Recipe::needs_review)
}

/// Standalone form of [`Recipe::is_copy`] that accepts a missing recipe.
pub fn is_copy(recipe: Option<&Recipe>) -> bool {
    recipe.is_some_and(Recipe::is_copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_only_one_and_five() {
        assert_eq!(serde_json::from_str::<Rating>("5").unwrap(), Rating::Favorite);
        assert_eq!(serde_json::from_str::<Rating>("1").unwrap(), Rating::Unfavorable);
        assert!(serde_json::from_str::<Rating>("3").is_err());
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let id = RecipeId::new();
        let json = format!(r#"{{"id":"{}"}}"#, id);
        let recipe: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe.visibility, Visibility::Household);
        assert_eq!(recipe.rating, None);
        assert!(!recipe.hidden);
        assert!(recipe.household_id.is_none());
    }

    #[test]
    fn review_gating() {
        let mut recipe = Recipe::new(None);
        assert!(!recipe.needs_review());

        recipe.enhancement_reviewed = true;
        assert!(!recipe.needs_review(), "unenhanced recipes owe no review");

        recipe.enhanced = true;
        recipe.enhancement_reviewed = false;
        assert!(recipe.needs_review());

        recipe.enhancement_reviewed = true;
        assert!(!recipe.needs_review());

        assert!(!needs_review(None));
    }

    #[test]
    fn copy_detection() {
        let mut recipe = Recipe::new(None);
        assert!(!recipe.is_copy());
        recipe.copied_from = Some(RecipeId::new());
        assert!(recipe.is_copy());
        assert!(!is_copy(None));
    }

    #[test]
    fn apply_clears_rating_when_patch_says_null() {
        let mut recipe = Recipe::new(None);
        recipe.rating = Some(Rating::Favorite);
        recipe.apply(&RecipePatch {
            rating: Some(None),
            hidden: Some(true),
            ..Default::default()
        });
        assert_eq!(recipe.rating, None);
        assert!(recipe.hidden);
    }
}
