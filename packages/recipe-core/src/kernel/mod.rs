//! Kernel module - collaborator traits and their implementations.

pub mod memory_store;
pub mod recipe_kernel;
pub mod test_dependencies;
pub mod traits;

pub use memory_store::{InMemoryRecipeStore, StoreSnapshot};
pub use recipe_kernel::RecipeKernel;
pub use test_dependencies::TestDependencies;
pub use traits::*;
