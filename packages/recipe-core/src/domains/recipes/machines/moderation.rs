//! Moderation state machine
//!
//! Pure decision logic - NO IO, only state transitions.
//!
//! A recipe's `rating`/`hidden` pair is read as one of three statuses.
//! Thumbs up and thumbs down are the only inputs; each produces exactly one
//! patch, and every rule coupling the two fields lives in this module:
//!
//! - approving a hidden recipe un-hides it in the same patch
//! - hiding an approved recipe clears its rating in the same patch
//! - un-hiding never restores a rating

use crate::domains::recipes::models::{Rating, Recipe, RecipePatch};

/// Derived moderation status of a recipe within its household.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationStatus {
    /// Visible and not approved (unrated or marked unfavorable)
    Pending,
    /// Visible and rated favorite
    Approved,
    /// Soft-hidden from default listings
    Hidden,
}

impl ModerationStatus {
    pub fn of(recipe: &Recipe) -> Self {
        if recipe.hidden {
            ModerationStatus::Hidden
        } else if recipe.rating == Some(Rating::Favorite) {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Pending
        }
    }
}

/// The two-button moderation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationIntent {
    ThumbUp,
    ThumbDown,
}

/// Outcome of a moderation decision: the patch to send and the status it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationTransition {
    pub from: ModerationStatus,
    pub to: ModerationStatus,
    pub patch: RecipePatch,
}

/// Decide the patch for `intent` applied to `recipe`.
pub fn decide(recipe: &Recipe, intent: ModerationIntent) -> ModerationTransition {
    let patch = match intent {
        ModerationIntent::ThumbUp => {
            if recipe.rating == Some(Rating::Favorite) {
                unapprove(recipe)
            } else {
                approve(recipe)
            }
        }
        ModerationIntent::ThumbDown => {
            if recipe.hidden {
                unhide()
            } else {
                hide(recipe)
            }
        }
    };

    let mut next = recipe.clone();
    next.apply(&patch);

    ModerationTransition {
        from: ModerationStatus::of(recipe),
        to: ModerationStatus::of(&next),
        patch,
    }
}

/// Rate favorite; approving implicitly restores visibility.
pub fn approve(recipe: &Recipe) -> RecipePatch {
    RecipePatch {
        rating: Some(Some(Rating::Favorite)),
        hidden: recipe.hidden.then_some(false),
        ..Default::default()
    }
}

/// Second thumbs-up: back to unrated.
pub fn unapprove(recipe: &Recipe) -> RecipePatch {
    RecipePatch {
        rating: Some(None),
        hidden: recipe.hidden.then_some(false),
        ..Default::default()
    }
}

/// A newly hidden recipe cannot stay approved.
pub fn hide(recipe: &Recipe) -> RecipePatch {
    RecipePatch {
        hidden: Some(true),
        rating: (recipe.rating == Some(Rating::Favorite)).then_some(None),
        ..Default::default()
    }
}

pub fn unhide() -> RecipePatch {
    RecipePatch {
        hidden: Some(false),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(rating: Option<Rating>, hidden: bool) -> Recipe {
        let mut recipe = Recipe::new(None);
        recipe.rating = rating;
        recipe.hidden = hidden;
        recipe
    }

    #[test]
    fn thumb_up_approves_pending() {
        let t = decide(&recipe(None, false), ModerationIntent::ThumbUp);
        assert_eq!(t.from, ModerationStatus::Pending);
        assert_eq!(t.to, ModerationStatus::Approved);
        assert_eq!(
            t.patch,
            RecipePatch {
                rating: Some(Some(Rating::Favorite)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn double_thumb_up_returns_to_unrated() {
        let mut r = recipe(None, false);
        r.apply(&decide(&r, ModerationIntent::ThumbUp).patch);
        r.apply(&decide(&r, ModerationIntent::ThumbUp).patch);
        assert_eq!(r.rating, None);
        assert_eq!(ModerationStatus::of(&r), ModerationStatus::Pending);
    }

    #[test]
    fn thumb_up_on_hidden_also_unhides() {
        let t = decide(&recipe(None, true), ModerationIntent::ThumbUp);
        assert_eq!(t.patch.hidden, Some(false));
        assert_eq!(t.patch.rating, Some(Some(Rating::Favorite)));
        assert_eq!(t.to, ModerationStatus::Approved);
    }

    #[test]
    fn thumb_up_replaces_unfavorable_rating() {
        let t = decide(&recipe(Some(Rating::Unfavorable), false), ModerationIntent::ThumbUp);
        assert_eq!(t.patch.rating, Some(Some(Rating::Favorite)));
    }

    #[test]
    fn hiding_approved_clears_rating_in_one_patch() {
        let t = decide(&recipe(Some(Rating::Favorite), false), ModerationIntent::ThumbDown);
        assert_eq!(
            t.patch,
            RecipePatch {
                rating: Some(None),
                hidden: Some(true),
                ..Default::default()
            }
        );
        assert_eq!(t.to, ModerationStatus::Hidden);
    }

    #[test]
    fn hiding_unrated_leaves_rating_untouched() {
        let t = decide(&recipe(None, false), ModerationIntent::ThumbDown);
        assert_eq!(t.patch.rating, None);
        assert_eq!(t.patch.hidden, Some(true));
    }

    #[test]
    fn unhide_carries_no_rating_key() {
        let t = decide(&recipe(None, true), ModerationIntent::ThumbDown);
        assert_eq!(t.patch, unhide());
        assert_eq!(t.patch.touched_fields(), vec!["hidden"]);
        assert_eq!(t.to, ModerationStatus::Pending);
    }

    #[test]
    fn hiding_keeps_unfavorable_rating() {
        let t = decide(&recipe(Some(Rating::Unfavorable), false), ModerationIntent::ThumbDown);
        assert_eq!(t.patch.rating, None);
    }
}
