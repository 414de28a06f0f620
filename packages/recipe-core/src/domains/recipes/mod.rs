//! Recipe lifecycle: ownership, moderation, enhancement review, sharing and
//! editing, plus the per-recipe [`RecipeActions`] handle.

pub mod actions;
pub mod commands;
pub mod editing;
pub mod effects;
pub mod errors;
pub mod machines;
pub mod models;
pub mod ownership;
pub mod sharing;

pub use actions::{ActionOutcome, ModalState, RecipeActions};
pub use commands::RecipeCommand;
pub use editing::{EditField, EditForm, RecipeEdit};
pub use errors::RecipeError;
pub use models::{Rating, Recipe, RecipePatch, Visibility};
pub use ownership::RecipePermissions;
pub use sharing::{CopyPrompt, CopyRequest};
