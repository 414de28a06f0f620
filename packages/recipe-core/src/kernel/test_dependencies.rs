// TestDependencies - mock implementations for testing
//
// Provides recording/scripted collaborators that can be injected into a
// RecipeKernel for tests and demos.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use super::{
    BaseDialogService, BaseNavigator, BaseNotifier, BaseRecipeStore, BaseUserSource,
    ConfirmationPrompt, DialogChoice, InMemoryRecipeStore, RecipeKernel,
};
use crate::common::auth::UserState;
use crate::common::{HouseholdId, MessageCatalog, RecipeId};
use crate::domains::households::{Household, TransferRequest};
use crate::domains::meal_plan::MealSlot;
use crate::domains::recipes::machines::ReviewAction;
use crate::domains::recipes::models::{Recipe, RecipePatch};
use crate::domains::recipes::sharing::CopyRequest;

// =============================================================================
// Mock Recipe Store
// =============================================================================

/// A mutation the store was asked to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Update { id: RecipeId, patch: RecipePatch },
    Delete { id: RecipeId },
    SetMeal { slot: MealSlot },
    Enhance { id: RecipeId },
    Review { id: RecipeId, action: ReviewAction },
    Copy { request: CopyRequest },
    Transfer { request: TransferRequest },
}

/// Store operation names accepted by [`MockRecipeStore::failing`].
pub mod ops {
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const SET_MEAL: &str = "set_meal";
    pub const ENHANCE: &str = "enhance";
    pub const REVIEW: &str = "review";
    pub const COPY: &str = "copy";
    pub const TRANSFER: &str = "transfer";
    pub const LIST_HOUSEHOLDS: &str = "list_households";
}

/// In-memory store that records every mutation and can be told to fail.
///
/// Failed calls are still recorded: the mutation was issued, it just did
/// not succeed.
pub struct MockRecipeStore {
    inner: InMemoryRecipeStore,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failing: Arc<Mutex<HashSet<&'static str>>>,
    fetches: Arc<Mutex<usize>>,
}

impl MockRecipeStore {
    pub fn new(acting_household: Option<HouseholdId>) -> Self {
        Self {
            inner: InMemoryRecipeStore::new(acting_household),
            calls: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_recipe(self, recipe: Recipe) -> Self {
        self.inner.insert(recipe).unwrap();
        self
    }

    pub fn with_household(self, household: Household) -> Self {
        self.inner.add_household(household).unwrap();
        self
    }

    /// Make every call to `operation` (see [`ops`]) fail.
    pub fn failing(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }

    pub fn inner(&self) -> &InMemoryRecipeStore {
        &self.inner
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if self.failing.lock().unwrap().contains(operation) {
            return Err(anyhow!("mock store: {} failed", operation));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseRecipeStore for MockRecipeStore {
    async fn fetch(&self, id: RecipeId) -> Result<Option<Recipe>> {
        *self.fetches.lock().unwrap() += 1;
        self.inner.fetch(id).await
    }

    async fn update(&self, id: RecipeId, patch: &RecipePatch) -> Result<()> {
        self.record(StoreCall::Update {
            id,
            patch: patch.clone(),
        });
        self.check(ops::UPDATE)?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: RecipeId) -> Result<()> {
        self.record(StoreCall::Delete { id });
        self.check(ops::DELETE)?;
        self.inner.delete(id).await
    }

    async fn set_meal(&self, slot: &MealSlot) -> Result<()> {
        self.record(StoreCall::SetMeal { slot: slot.clone() });
        self.check(ops::SET_MEAL)?;
        self.inner.set_meal(slot).await
    }

    async fn enhance(&self, id: RecipeId) -> Result<()> {
        self.record(StoreCall::Enhance { id });
        self.check(ops::ENHANCE)?;
        self.inner.enhance(id).await
    }

    async fn review(&self, id: RecipeId, action: ReviewAction) -> Result<()> {
        self.record(StoreCall::Review { id, action });
        self.check(ops::REVIEW)?;
        self.inner.review(id, action).await
    }

    async fn copy(&self, request: CopyRequest) -> Result<RecipeId> {
        self.record(StoreCall::Copy { request });
        self.check(ops::COPY)?;
        self.inner.copy(request).await
    }

    async fn list_households(&self) -> Result<Vec<Household>> {
        self.check(ops::LIST_HOUSEHOLDS)?;
        self.inner.list_households().await
    }

    async fn transfer(&self, request: TransferRequest) -> Result<()> {
        self.record(StoreCall::Transfer { request });
        self.check(ops::TRANSFER)?;
        self.inner.transfer(request).await
    }
}

// =============================================================================
// Scripted Dialogs
// =============================================================================

/// Answers prompts from a queue of choices; an empty queue answers `Cancel`.
pub struct ScriptedDialogs {
    answers: Arc<Mutex<VecDeque<DialogChoice>>>,
    prompts: Arc<Mutex<Vec<ConfirmationPrompt>>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the answer for the next prompt
    pub fn answer(self, choice: DialogChoice) -> Self {
        self.answers.lock().unwrap().push_back(choice);
        self
    }

    pub fn push_answer(&self, choice: DialogChoice) {
        self.answers.lock().unwrap().push_back(choice);
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> Vec<ConfirmationPrompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<ConfirmationPrompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl Default for ScriptedDialogs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDialogService for ScriptedDialogs {
    async fn request_confirmation(&self, prompt: ConfirmationPrompt) -> DialogChoice {
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DialogChoice::Cancel);
        let offered = prompt.offers(answer);
        self.prompts.lock().unwrap().push(prompt);
        // A scripted answer the dialog never offered is a dismissal.
        if offered {
            answer
        } else {
            DialogChoice::Cancel
        }
    }
}

// =============================================================================
// Recording Notifier / Navigator
// =============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(title, message)` pairs in the order they were shown
    pub fn notices(&self) -> Vec<(String, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|(_, message)| message).collect()
    }

    pub fn was_notified(&self, message: &str) -> bool {
        self.notices().iter().any(|(_, m)| m == message)
    }
}

impl BaseNotifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Back,
    Recipe(RecipeId),
}

#[derive(Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.lock().unwrap().clone()
    }
}

impl BaseNavigator for RecordingNavigator {
    fn go_back(&self) {
        self.history.lock().unwrap().push(Navigation::Back);
    }

    fn open_recipe(&self, id: RecipeId) {
        self.history.lock().unwrap().push(Navigation::Recipe(id));
    }
}

// =============================================================================
// Mock User Source
// =============================================================================

pub struct MockUserSource {
    state: Arc<Mutex<UserState>>,
}

impl MockUserSource {
    pub fn new(state: UserState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn set(&self, state: UserState) {
        *self.state.lock().unwrap() = state;
    }
}

impl BaseUserSource for MockUserSource {
    fn current_user(&self) -> UserState {
        self.state.lock().unwrap().clone()
    }
}

// =============================================================================
// Test Dependencies
// =============================================================================

pub struct TestDependencies {
    pub users: Arc<MockUserSource>,
    pub store: Arc<MockRecipeStore>,
    pub dialogs: Arc<ScriptedDialogs>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub catalog: Arc<MessageCatalog>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MockUserSource::new(UserState::Loading)),
            store: Arc::new(MockRecipeStore::new(None)),
            dialogs: Arc::new(ScriptedDialogs::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            navigator: Arc::new(RecordingNavigator::new()),
            catalog: Arc::new(MessageCatalog::english()),
        }
    }

    pub fn user(mut self, state: UserState) -> Self {
        self.users = Arc::new(MockUserSource::new(state));
        self
    }

    pub fn mock_store(mut self, store: MockRecipeStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    pub fn mock_dialogs(mut self, dialogs: ScriptedDialogs) -> Self {
        self.dialogs = Arc::new(dialogs);
        self
    }

    /// Convert into a RecipeKernel, keeping handles to every mock
    pub fn into_kernel(&self) -> Arc<RecipeKernel> {
        Arc::new(RecipeKernel::new(
            self.users.clone(),
            self.store.clone(),
            self.dialogs.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
            self.catalog.clone(),
        ))
    }

    /// Translated text for `key`, for asserting on notices
    pub fn text(&self, key: crate::common::MessageKey) -> String {
        self.catalog.translate(key.as_str(), &[])
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
