//! Ownership resolver
//!
//! Pure decision logic - NO IO. Maps a recipe snapshot and the acting user
//! to the permission flags the presentation layer binds to.
//!
//! `is_owned` is the only three-valued answer: `None` means the user is
//! still loading and nothing is actionable yet. Every other flag collapses
//! that case to `false`.

use crate::common::auth::UserState;
use crate::domains::recipes::models::{Recipe, Visibility};

/// Permission flags for one recipe as seen by one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecipePermissions {
    pub is_owned: Option<bool>,
    pub can_edit: bool,
    pub can_copy: bool,
    pub can_enhance: bool,
}

impl RecipePermissions {
    pub fn resolve(recipe: Option<&Recipe>, user: &UserState) -> Self {
        match recipe {
            Some(recipe) => Self {
                is_owned: is_owned(recipe, user),
                can_edit: can_edit(recipe, user),
                can_copy: can_copy(recipe, user),
                can_enhance: can_enhance(Some(recipe)),
            },
            None => Self {
                // Without a recipe the only thing we can say is whether the
                // user is still loading.
                is_owned: if user.is_loading() { None } else { Some(false) },
                ..Self::default()
            },
        }
    }
}

/// `Some(true)` when the user's household owns the recipe, `None` while loading.
///
/// For a loaded user this is plain household equality, which means a user
/// without a household "owns" legacy recipes that have none. Anonymous
/// visitors own nothing.
pub fn is_owned(recipe: &Recipe, user: &UserState) -> Option<bool> {
    match user {
        UserState::Loading => None,
        UserState::Anonymous => Some(false),
        UserState::Loaded(user) => Some(recipe.household_id == user.household_id),
    }
}

pub fn can_edit(recipe: &Recipe, user: &UserState) -> bool {
    is_owned(recipe, user) == Some(true)
}

/// Foreign recipes are copyable when shared, or when they predate households.
pub fn can_copy(recipe: &Recipe, user: &UserState) -> bool {
    match is_owned(recipe, user) {
        Some(false) => {
            recipe.visibility == Visibility::Shared || recipe.household_id.is_none()
        }
        _ => false,
    }
}

/// Enhancement is advertised for any unenhanced recipe; whether it runs
/// directly or via a copy is decided when the action is invoked.
pub fn can_enhance(recipe: Option<&Recipe>) -> bool {
    recipe.is_some_and(|recipe| !recipe.enhanced)
}
