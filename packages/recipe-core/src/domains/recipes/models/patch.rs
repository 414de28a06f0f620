use serde::{Deserialize, Deserializer, Serialize};

use super::{Rating, Visibility};
use crate::common::HouseholdId;
use crate::domains::meal_plan::MealType;

/// Partial update of a recipe's mutable fields.
///
/// `None` means "leave unchanged". `rating` is doubly optional so a patch can
/// clear the rating: `Some(None)` serializes as `"rating": null`, while an
/// untouched rating is omitted from the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub rating: Option<Option<Rating>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement_reviewed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<HouseholdId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_types: Option<Vec<MealType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Maps a present key (even `null`) to `Some`, so `"rating": null` survives
/// deserialization as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the fields this patch touches, for logging.
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.rating.is_some() {
            fields.push("rating");
        }
        if self.hidden.is_some() {
            fields.push("hidden");
        }
        if self.enhanced.is_some() {
            fields.push("enhanced");
        }
        if self.enhancement_reviewed.is_some() {
            fields.push("enhancement_reviewed");
        }
        if self.visibility.is_some() {
            fields.push("visibility");
        }
        if self.household_id.is_some() {
            fields.push("household_id");
        }
        if self.image_url.is_some() {
            fields.push("image_url");
        }
        if self.diets.is_some() {
            fields.push("diets");
        }
        if self.meal_types.is_some() {
            fields.push("meal_types");
        }
        if self.prep_minutes.is_some() {
            fields.push("prep_minutes");
        }
        if self.cook_minutes.is_some() {
            fields.push("cook_minutes");
        }
        if self.servings.is_some() {
            fields.push("servings");
        }
        if self.tags.is_some() {
            fields.push("tags");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_rating_serializes_as_null() {
        let patch = RecipePatch {
            rating: Some(None),
            hidden: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "rating": null, "hidden": true }));
    }

    #[test]
    fn untouched_rating_is_omitted() {
        let patch = RecipePatch {
            hidden: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "hidden": false }));
    }

    #[test]
    fn null_rating_deserializes_as_clear() {
        let patch: RecipePatch = serde_json::from_str(r#"{"rating": null}"#).unwrap();
        assert_eq!(patch.rating, Some(None));

        let patch: RecipePatch = serde_json::from_str(r#"{"hidden": true}"#).unwrap();
        assert_eq!(patch.rating, None);
    }

    #[test]
    fn touched_fields_lists_only_set_keys() {
        let patch = RecipePatch {
            rating: Some(Some(Rating::Favorite)),
            tags: Some(vec!["quick".into()]),
            ..Default::default()
        };
        assert_eq!(patch.touched_fields(), vec!["rating", "tags"]);
        assert!(RecipePatch::default().is_empty());
    }
}
