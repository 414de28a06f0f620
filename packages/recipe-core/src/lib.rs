// Household Recipes - lifecycle engine
//
// Decides what a user may do with a recipe (rate, hide, enhance, review,
// copy, plan, transfer, edit) and drives exactly one mutation per action
// through injected collaborators.
//
// Decision logic lives in domains/*; IO seams live in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
