//! Typed ID definitions for the recipe domain.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Recipe entities.
pub struct Recipe;

/// Marker type for Household entities (the ownership boundary).
pub struct Household;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Recipe entities.
pub type RecipeId = Id<Recipe>;

/// Typed ID for Household entities.
pub type HouseholdId = Id<Household>;
