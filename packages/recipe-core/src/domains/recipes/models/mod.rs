pub mod patch;
pub mod recipe;

pub use patch::RecipePatch;
pub use recipe::{is_copy, needs_review, Rating, Recipe, Visibility};
