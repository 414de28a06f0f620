//! Enhancement review workflow
//!
//! Pure decision logic - NO IO.
//!
//! Enhancement is advertised for any unenhanced recipe, but only the owning
//! household can enhance in place. A foreign recipe has to be copied first,
//! and a foreign recipe that cannot be copied cannot be enhanced at all.

use serde::{Deserialize, Serialize};

use crate::common::auth::UserState;
use crate::domains::recipes::models::Recipe;
use crate::domains::recipes::ownership;

/// Human verdict on an AI rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
        }
    }
}

/// Where a recipe sits in the enhancement lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementStatus {
    /// No rewrite applied, so no review owed
    Original,
    /// Rewrite applied, waiting for approve/reject
    AwaitingReview,
    /// Rewrite applied and approved
    Reviewed,
}

impl EnhancementStatus {
    pub fn of(recipe: &Recipe) -> Self {
        match (recipe.enhanced, recipe.enhancement_reviewed) {
            (false, _) => EnhancementStatus::Original,
            (true, false) => EnhancementStatus::AwaitingReview,
            (true, true) => EnhancementStatus::Reviewed,
        }
    }
}

/// Which flow an enhance request takes for this user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceRoute {
    /// User not loaded yet; ownership cannot be decided
    Undecided,
    /// Owned: confirm, enhance in place, then review
    InPlace,
    /// Foreign but copyable: offer a copy instead
    CopyFirst,
    /// Foreign and not copyable: explain and stop
    Unavailable,
}

pub fn route(recipe: &Recipe, user: &UserState) -> EnhanceRoute {
    match ownership::is_owned(recipe, user) {
        None => EnhanceRoute::Undecided,
        Some(true) => EnhanceRoute::InPlace,
        Some(false) if ownership::can_copy(recipe, user) => EnhanceRoute::CopyFirst,
        Some(false) => EnhanceRoute::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::auth::{CurrentUser, Role};
    use crate::common::HouseholdId;
    use crate::domains::recipes::models::Visibility;

    #[test]
    fn status_tracks_enhanced_pair() {
        let mut recipe = Recipe::new(None);
        assert_eq!(EnhancementStatus::of(&recipe), EnhancementStatus::Original);
        recipe.enhancement_reviewed = true;
        assert_eq!(EnhancementStatus::of(&recipe), EnhancementStatus::Original);
        recipe.enhanced = true;
        recipe.enhancement_reviewed = false;
        assert_eq!(EnhancementStatus::of(&recipe), EnhancementStatus::AwaitingReview);
        recipe.enhancement_reviewed = true;
        assert_eq!(EnhancementStatus::of(&recipe), EnhancementStatus::Reviewed);
    }

    #[test]
    fn routes_by_ownership_and_copyability() {
        let home = HouseholdId::new();
        let user = UserState::Loaded(CurrentUser::new(home, Role::Member));

        let own = Recipe::new(Some(home));
        assert_eq!(route(&own, &user), EnhanceRoute::InPlace);

        let shared = Recipe::new(Some(HouseholdId::new())).with_visibility(Visibility::Shared);
        assert_eq!(route(&shared, &user), EnhanceRoute::CopyFirst);

        let private = Recipe::new(Some(HouseholdId::new()));
        assert_eq!(route(&private, &user), EnhanceRoute::Unavailable);

        assert_eq!(route(&own, &UserState::Loading), EnhanceRoute::Undecided);
    }

    #[test]
    fn review_action_wire_format() {
        assert_eq!(
            serde_json::to_string(&ReviewAction::Approve).unwrap(),
            "\"approve\""
        );
        assert_eq!(ReviewAction::Reject.as_str(), "reject");
    }
}
