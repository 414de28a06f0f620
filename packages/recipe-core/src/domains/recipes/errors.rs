use thiserror::Error;

use crate::common::RecipeId;

/// Errors raised by recipe stores and model conversions.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    #[error("Invalid rating {0}: expected 1 or 5")]
    InvalidRating(u8),

    #[error("Household not found: {0}")]
    HouseholdNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
