//! Copy-on-write sharing
//!
//! A foreign recipe becomes editable by duplicating it into the acting
//! household. Copies keep a `copied_from` link to their source and are
//! always private to their household.

use serde::{Deserialize, Serialize};

use crate::common::RecipeId;
use crate::domains::recipes::models::Recipe;

/// Input to the copy mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRequest {
    pub id: RecipeId,
    /// Keep the source's enhanced content verbatim. Ignored by the backend
    /// for unenhanced sources but always sent.
    pub keep_enhanced: bool,
}

/// Shape of the confirmation shown before copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPrompt {
    /// Cancel / copy
    Simple,
    /// Cancel / copy as-is / copy and enhance
    KeepOrReenhance,
}

impl CopyPrompt {
    /// An enhanced source lets the user choose between its rewrite and the original.
    /// A missing snapshot is treated as unenhanced.
    pub fn for_source(source: Option<&Recipe>) -> Self {
        if source.is_some_and(|recipe| recipe.enhanced) {
            CopyPrompt::KeepOrReenhance
        } else {
            CopyPrompt::Simple
        }
    }
}
