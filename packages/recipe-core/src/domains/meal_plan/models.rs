use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::common::{MessageKey, RecipeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            MealType::Breakfast => MessageKey::MealTypeBreakfast,
            MealType::Lunch => MessageKey::MealTypeLunch,
            MealType::Dinner => MessageKey::MealTypeDinner,
            MealType::Snack => MessageKey::MealTypeSnack,
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown meal type: {}", s))
    }
}

/// Calendar-day key (`YYYY-MM-DD`, zero padded) in the user's local calendar.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Date key for an instant, taken in that instant's own time zone rather than UTC.
pub fn date_key_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    date_key(instant.date_naive())
}

/// Key of the slot in the plan map: `{date}_{meal_type}`.
pub fn slot_key(date: NaiveDate, meal_type: MealType) -> String {
    format!("{}_{}", date_key(date), meal_type.as_str())
}

/// A day is past when it is strictly before `today`; today itself is not.
///
/// The binder never consults this; the calendar UI uses it to disable
/// planning and clearing on past days.
pub fn is_past_date(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// [`is_past_date`] against the local wall clock.
pub fn is_past_date_now(date: NaiveDate) -> bool {
    is_past_date(date, Local::now().date_naive())
}

/// Input to the set-meal mutation. `recipe_id: None` clears the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    pub date: String,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
}

impl MealSlot {
    pub fn assign(date: NaiveDate, meal_type: MealType, recipe_id: RecipeId) -> Self {
        Self {
            date: date_key(date),
            meal_type,
            recipe_id: Some(recipe_id),
        }
    }

    pub fn clear(date: NaiveDate, meal_type: MealType) -> Self {
        Self {
            date: date_key(date),
            meal_type,
            recipe_id: None,
        }
    }

    pub fn key(&self) -> String {
        format!("{}_{}", self.date, self.meal_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(day(2026, 2, 9)), "2026-02-09");
    }

    #[test]
    fn date_key_uses_local_calendar_not_utc() {
        // 23:30 on Feb 9 in UTC-5 is already Feb 10 in UTC.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = offset.with_ymd_and_hms(2026, 2, 9, 23, 30, 0).unwrap();
        assert_eq!(date_key_at(&instant), "2026-02-09");
    }

    #[test]
    fn slot_key_joins_date_and_meal() {
        assert_eq!(slot_key(day(2026, 2, 9), MealType::Lunch), "2026-02-09_lunch");
        let slot = MealSlot::assign(day(2026, 2, 9), MealType::Dinner, RecipeId::new());
        assert_eq!(slot.key(), "2026-02-09_dinner");
    }

    #[test]
    fn past_date_is_strictly_before_today() {
        let today = day(2026, 2, 9);
        assert!(is_past_date(day(2026, 2, 8), today));
        assert!(!is_past_date(today, today));
        assert!(!is_past_date(day(2026, 2, 10), today));
    }

    #[test]
    fn cleared_slot_omits_recipe_id() {
        let json = serde_json::to_value(MealSlot::clear(day(2026, 2, 9), MealType::Snack)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "date": "2026-02-09", "meal_type": "snack" })
        );
    }

    #[test]
    fn meal_type_parses() {
        assert_eq!("Lunch".parse::<MealType>(), Ok(MealType::Lunch));
        assert!("brunch".parse::<MealType>().is_err());
    }
}
