use chrono::NaiveDate;
use tracing::{error, info};

use super::{ActionOutcome, RecipeActions};
use crate::common::MessageKey;
use crate::domains::meal_plan::{MealSlot, MealType};
use crate::domains::recipes::commands::RecipeCommand;

impl RecipeActions {
    /// Put this recipe in the `(date, meal_type)` slot.
    ///
    /// Past dates are accepted; disabling them is up to the calendar UI.
    pub async fn plan_meal(&mut self, date: NaiveDate, meal_type: MealType) -> ActionOutcome {
        let Some(id) = self.recipe_id else {
            return ActionOutcome::Skipped;
        };

        let slot = MealSlot::assign(date, meal_type, id);
        let date_key = slot.date.clone();

        match self.run(RecipeCommand::SetMeal { slot }).await {
            Ok(_) => {
                info!(recipe_id = %id, date = %date_key, meal_type = meal_type.as_str(), "meal planned");
                self.modals.plan = false;
                let message = self.t_with(
                    MessageKey::MealPlanned,
                    &[
                        ("name", self.recipe_name()),
                        ("mealType", self.t(meal_type.label_key())),
                        ("date", date_key),
                    ],
                );
                self.notify_text(MessageKey::SuccessTitle, message);
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(recipe_id = %id, date = %date_key, error = %e, "plan meal failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::MealPlanFailed);
                ActionOutcome::Failed
            }
        }
    }

    /// Empty the `(date, meal_type)` slot. No confirmation: only the plan
    /// assignment is lost, never recipe data.
    pub async fn clear_meal(&self, date: NaiveDate, meal_type: MealType) -> ActionOutcome {
        let slot = MealSlot::clear(date, meal_type);
        let key = slot.key();

        match self.run(RecipeCommand::SetMeal { slot }).await {
            Ok(_) => {
                info!(slot = %key, "meal cleared");
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(slot = %key, error = %e, "clear meal failed");
                self.notify(MessageKey::ErrorTitle, MessageKey::MealClearFailed);
                ActionOutcome::Failed
            }
        }
    }
}
