//! Meal-plan slot binding
//!
//! A plan is a map from `{date}_{meal_type}` to a recipe id. The binder is
//! permissive about dates; past-day restrictions are presentation policy.

pub mod models;

pub use models::{
    date_key, date_key_at, is_past_date, is_past_date_now, slot_key, MealSlot, MealType,
};
