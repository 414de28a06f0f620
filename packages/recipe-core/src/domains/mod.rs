pub mod households;
pub mod meal_plan;
pub mod recipes;
