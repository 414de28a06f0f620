//! In-memory recipe store.
//!
//! Backs the interactive shell and the test doubles. It follows the backend
//! contract closely enough to drive the engine end to end:
//!
//! - `enhance` marks the recipe enhanced and unreviewed, remembering the
//!   pre-enhancement snapshot
//! - `review(approve)` marks it reviewed; `review(reject)` restores the
//!   remembered snapshot
//! - `copy` creates a household-private duplicate owned by the acting
//!   household, linked through `copied_from`

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use super::BaseRecipeStore;
use crate::common::{HouseholdId, RecipeId};
use crate::domains::households::{Household, TransferRequest};
use crate::domains::meal_plan::MealSlot;
use crate::domains::recipes::machines::ReviewAction;
use crate::domains::recipes::models::{Recipe, RecipePatch, Visibility};
use crate::domains::recipes::sharing::CopyRequest;
use crate::domains::recipes::RecipeError;

/// Serialized form of the whole store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub households: Vec<Household>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// `{date}_{meal_type}` -> recipe id
    #[serde(default)]
    pub meal_plan: BTreeMap<String, RecipeId>,
}

#[derive(Default)]
struct State {
    recipes: HashMap<RecipeId, Recipe>,
    /// Pre-enhancement snapshots, restored on reject
    originals: HashMap<RecipeId, Recipe>,
    households: Vec<Household>,
    meal_plan: BTreeMap<String, RecipeId>,
}

pub struct InMemoryRecipeStore {
    /// Household that receives copies
    acting_household: Option<HouseholdId>,
    state: Mutex<State>,
}

impl InMemoryRecipeStore {
    pub fn new(acting_household: Option<HouseholdId>) -> Self {
        Self {
            acting_household,
            state: Mutex::new(State::default()),
        }
    }

    pub fn from_snapshot(acting_household: Option<HouseholdId>, snapshot: StoreSnapshot) -> Self {
        let state = State {
            recipes: snapshot
                .recipes
                .into_iter()
                .map(|recipe| (recipe.id, recipe))
                .collect(),
            originals: HashMap::new(),
            households: snapshot.households,
            meal_plan: snapshot.meal_plan,
        };
        Self {
            acting_household,
            state: Mutex::new(state),
        }
    }

    /// Load a JSON snapshot file.
    pub fn load(acting_household: Option<HouseholdId>, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe data {}", path.display()))?;
        let snapshot: StoreSnapshot =
            serde_json::from_str(&json).context("Recipe data is not a valid store snapshot")?;
        Ok(Self::from_snapshot(acting_household, snapshot))
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        let state = self.lock()?;
        let mut recipes: Vec<Recipe> = state.recipes.values().cloned().collect();
        recipes.sort_by_key(|recipe| recipe.id);
        Ok(StoreSnapshot {
            households: state.households.clone(),
            recipes,
            meal_plan: state.meal_plan.clone(),
        })
    }

    pub fn insert(&self, recipe: Recipe) -> Result<()> {
        self.lock()?.recipes.insert(recipe.id, recipe);
        Ok(())
    }

    pub fn add_household(&self, household: Household) -> Result<()> {
        self.lock()?.households.push(household);
        Ok(())
    }

    pub fn planned_meal(&self, key: &str) -> Result<Option<RecipeId>> {
        Ok(self.lock()?.meal_plan.get(key).copied())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| RecipeError::Store(anyhow!("recipe store lock poisoned")).into())
    }
}

fn recipe_mut(state: &mut State, id: RecipeId) -> Result<&mut Recipe> {
    state
        .recipes
        .get_mut(&id)
        .ok_or_else(|| RecipeError::NotFound(id).into())
}

#[async_trait]
impl BaseRecipeStore for InMemoryRecipeStore {
    async fn fetch(&self, id: RecipeId) -> Result<Option<Recipe>> {
        Ok(self.lock()?.recipes.get(&id).cloned())
    }

    async fn update(&self, id: RecipeId, patch: &RecipePatch) -> Result<()> {
        let mut state = self.lock()?;
        recipe_mut(&mut state, id)?.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: RecipeId) -> Result<()> {
        let mut state = self.lock()?;
        state
            .recipes
            .remove(&id)
            .ok_or(RecipeError::NotFound(id))?;
        state.originals.remove(&id);
        state.meal_plan.retain(|_, planned| *planned != id);
        Ok(())
    }

    async fn set_meal(&self, slot: &MealSlot) -> Result<()> {
        let mut state = self.lock()?;
        match slot.recipe_id {
            Some(recipe_id) => {
                if !state.recipes.contains_key(&recipe_id) {
                    return Err(RecipeError::NotFound(recipe_id).into());
                }
                state.meal_plan.insert(slot.key(), recipe_id);
            }
            None => {
                state.meal_plan.remove(&slot.key());
            }
        }
        Ok(())
    }

    async fn enhance(&self, id: RecipeId) -> Result<()> {
        let mut state = self.lock()?;
        let recipe = recipe_mut(&mut state, id)?;
        let original = recipe.clone();
        recipe.enhanced = true;
        recipe.enhancement_reviewed = false;
        state.originals.insert(id, original);
        Ok(())
    }

    async fn review(&self, id: RecipeId, action: ReviewAction) -> Result<()> {
        let mut state = self.lock()?;
        match action {
            ReviewAction::Approve => {
                recipe_mut(&mut state, id)?.enhancement_reviewed = true;
                state.originals.remove(&id);
            }
            ReviewAction::Reject => {
                let current = recipe_mut(&mut state, id)?.clone();
                let mut restored = state.originals.remove(&id).unwrap_or(current.clone());
                // Moderation and ownership may have changed since enhancing.
                restored.rating = current.rating;
                restored.hidden = current.hidden;
                restored.household_id = current.household_id;
                restored.visibility = current.visibility;
                restored.enhanced = false;
                restored.enhancement_reviewed = false;
                state.recipes.insert(id, restored);
            }
        }
        Ok(())
    }

    async fn copy(&self, request: CopyRequest) -> Result<RecipeId> {
        let mut state = self.lock()?;
        let source = state
            .recipes
            .get(&request.id)
            .cloned()
            .ok_or(RecipeError::NotFound(request.id))?;

        let mut copy = if source.enhanced && !request.keep_enhanced {
            state.originals.get(&request.id).cloned().unwrap_or(source.clone())
        } else {
            source.clone()
        };
        copy.id = RecipeId::new();
        copy.household_id = self.acting_household;
        copy.visibility = Visibility::Household;
        copy.copied_from = Some(source.id);
        copy.rating = None;
        copy.hidden = false;
        if !request.keep_enhanced {
            copy.enhanced = false;
            copy.enhancement_reviewed = false;
        }

        let new_id = copy.id;
        info!(source_id = %source.id, copy_id = %new_id, keep_enhanced = request.keep_enhanced, "recipe copied");
        state.recipes.insert(new_id, copy);
        Ok(new_id)
    }

    async fn list_households(&self) -> Result<Vec<Household>> {
        Ok(self.lock()?.households.clone())
    }

    async fn transfer(&self, request: TransferRequest) -> Result<()> {
        let mut state = self.lock()?;
        let known = state
            .households
            .iter()
            .any(|household| household.id == request.target_household_id);
        if !known {
            return Err(
                RecipeError::HouseholdNotFound(request.target_household_id.to_string()).into(),
            );
        }
        recipe_mut(&mut state, request.recipe_id)?.household_id =
            Some(request.target_household_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::meal_plan::MealType;
    use chrono::NaiveDate;

    fn store_with(recipe: &Recipe) -> InMemoryRecipeStore {
        let store = InMemoryRecipeStore::new(Some(HouseholdId::new()));
        store.insert(recipe.clone()).unwrap();
        store
    }

    #[tokio::test]
    async fn reject_restores_pre_enhancement_snapshot() {
        let recipe = Recipe::new(None).with_title("Dal");
        let store = store_with(&recipe);

        store.enhance(recipe.id).await.unwrap();
        let enhanced = store.fetch(recipe.id).await.unwrap().unwrap();
        assert!(enhanced.needs_review());

        store.review(recipe.id, ReviewAction::Reject).await.unwrap();
        let restored = store.fetch(recipe.id).await.unwrap().unwrap();
        assert!(!restored.enhanced);
        assert_eq!(restored.title, "Dal");
    }

    #[tokio::test]
    async fn approve_marks_reviewed() {
        let recipe = Recipe::new(None);
        let store = store_with(&recipe);
        store.enhance(recipe.id).await.unwrap();
        store.review(recipe.id, ReviewAction::Approve).await.unwrap();
        let reviewed = store.fetch(recipe.id).await.unwrap().unwrap();
        assert!(reviewed.enhanced && reviewed.enhancement_reviewed);
    }

    #[tokio::test]
    async fn copy_is_private_and_linked() {
        let source = Recipe::new(Some(HouseholdId::new())).with_visibility(Visibility::Shared);
        let store = store_with(&source);

        let copy_id = store
            .copy(CopyRequest {
                id: source.id,
                keep_enhanced: false,
            })
            .await
            .unwrap();
        let copy = store.fetch(copy_id).await.unwrap().unwrap();
        assert_eq!(copy.copied_from, Some(source.id));
        assert_eq!(copy.visibility, Visibility::Household);
        assert_eq!(copy.household_id, store.acting_household);
    }

    #[tokio::test]
    async fn clearing_a_slot_removes_it() {
        let recipe = Recipe::new(None);
        let store = store_with(&recipe);
        let date = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();

        store
            .set_meal(&MealSlot::assign(date, MealType::Lunch, recipe.id))
            .await
            .unwrap();
        assert_eq!(store.planned_meal("2026-02-09_lunch").unwrap(), Some(recipe.id));

        store
            .set_meal(&MealSlot::clear(date, MealType::Lunch))
            .await
            .unwrap();
        assert_eq!(store.planned_meal("2026-02-09_lunch").unwrap(), None);
    }

    #[tokio::test]
    async fn transfer_requires_known_household() {
        let recipe = Recipe::new(None);
        let store = store_with(&recipe);
        let result = store
            .transfer(TransferRequest {
                recipe_id: recipe.id,
                target_household_id: HouseholdId::new(),
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_recipe_is_not_found() {
        let store = InMemoryRecipeStore::new(None);
        let err = store.delete(RecipeId::new()).await.unwrap_err();
        assert!(err.downcast_ref::<RecipeError>().is_some());
    }

    #[tokio::test]
    async fn poisoned_lock_surfaces_as_store_error() {
        let recipe = Recipe::new(None);
        let store = store_with(&recipe);
        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = store.state.lock().unwrap();
                    panic!("writer died mid-update");
                })
                .join()
        });

        let err = store.fetch(recipe.id).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecipeError>(),
            Some(RecipeError::Store(_))
        ));
        assert!(err.to_string().starts_with("Store error:"));
    }
}
