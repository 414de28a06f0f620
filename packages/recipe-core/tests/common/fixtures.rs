//! Test fixtures for creating recipes in a known state.
//!
//! These fixtures use the model builders directly; nothing touches a store.

use recipe_core::common::{HouseholdId, RecipeId};
use recipe_core::domains::households::Household;
use recipe_core::domains::recipes::{Rating, Recipe, Visibility};

pub fn household(name: &str) -> Household {
    Household {
        id: HouseholdId::new(),
        name: name.to_string(),
    }
}

/// A plain household-only recipe
pub fn recipe_in(household: &Household, title: &str) -> Recipe {
    Recipe::new(Some(household.id)).with_title(title)
}

/// A shared recipe another household can copy
pub fn shared_recipe_in(household: &Household, title: &str) -> Recipe {
    recipe_in(household, title).with_visibility(Visibility::Shared)
}

/// Enhanced and not yet reviewed
pub fn enhanced_recipe_in(household: &Household, title: &str) -> Recipe {
    let mut recipe = recipe_in(household, title);
    recipe.enhanced = true;
    recipe.enhancement_reviewed = false;
    recipe
}

pub fn approved_recipe_in(household: &Household, title: &str) -> Recipe {
    let mut recipe = recipe_in(household, title);
    recipe.rating = Some(Rating::Favorite);
    recipe
}

pub fn hidden_recipe_in(household: &Household, title: &str) -> Recipe {
    let mut recipe = recipe_in(household, title);
    recipe.hidden = true;
    recipe
}

/// A copy of `source` owned by `household`
pub fn copy_in(household: &Household, source: RecipeId, title: &str) -> Recipe {
    let mut recipe = recipe_in(household, title);
    recipe.copied_from = Some(source);
    recipe
}
