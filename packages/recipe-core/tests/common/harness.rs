//! Test harness for action-handler integration tests.
//!
//! Each test gets two fresh households and builds its own mock kernel with
//! exactly the recipes, user and scripted dialog answers it needs.

use std::sync::Arc;

use recipe_core::common::auth::{CurrentUser, Role, UserState};
use recipe_core::domains::households::Household;
use recipe_core::domains::recipes::{Recipe, RecipeActions};
use recipe_core::kernel::test_dependencies::{MockRecipeStore, ScriptedDialogs};
use recipe_core::kernel::{DialogChoice, RecipeKernel, TestDependencies};
use test_context::AsyncTestContext;

use super::fixtures::household;

/// Test harness with the acting household ("home") and a neighbour.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let scene = ctx.scene(ctx.member(), vec![recipe], &[]);
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub home: Household,
    pub neighbour: Household,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            home: household("Home"),
            neighbour: household("Neighbours"),
        }
    }

    async fn teardown(self) {
        // Mocks are dropped with the harness
    }
}

/// One kernel built for one test, with handles to every mock.
pub struct Scene {
    pub deps: TestDependencies,
    pub kernel: Arc<RecipeKernel>,
}

impl Scene {
    /// Action handle for `recipe`, seeded with its snapshot.
    pub fn actions(&self, recipe: &Recipe) -> RecipeActions {
        RecipeActions::with_recipe(self.kernel.clone(), recipe.clone())
    }

    /// Current stored copy of a recipe.
    pub async fn stored(&self, recipe: &Recipe) -> Option<Recipe> {
        use recipe_core::kernel::BaseRecipeStore;
        self.deps
            .store
            .fetch(recipe.id)
            .await
            .expect("fetch from mock store")
    }
}

impl TestHarness {
    /// Member of the home household
    pub fn member(&self) -> UserState {
        UserState::Loaded(CurrentUser::new(self.home.id, Role::Member))
    }

    /// Superuser of the home household
    pub fn superuser(&self) -> UserState {
        UserState::Loaded(CurrentUser::new(self.home.id, Role::Superuser))
    }

    /// Kernel where `user` acts, `recipes` exist and dialogs answer `answers` in order.
    pub fn scene(&self, user: UserState, recipes: Vec<Recipe>, answers: &[DialogChoice]) -> Scene {
        self.scene_with(user, recipes, answers, |store| store)
    }

    /// Like [`scene`](Self::scene) with a hook to configure the store (e.g. failures).
    pub fn scene_with(
        &self,
        user: UserState,
        recipes: Vec<Recipe>,
        answers: &[DialogChoice],
        configure: impl FnOnce(MockRecipeStore) -> MockRecipeStore,
    ) -> Scene {
        let acting = user.user().and_then(|u| u.household_id);
        let mut store = MockRecipeStore::new(acting)
            .with_household(self.home.clone())
            .with_household(self.neighbour.clone());
        for recipe in recipes {
            store = store.with_recipe(recipe);
        }

        let dialogs = answers
            .iter()
            .fold(ScriptedDialogs::new(), |dialogs, choice| dialogs.answer(*choice));

        let deps = TestDependencies::new()
            .user(user)
            .mock_store(configure(store))
            .mock_dialogs(dialogs);
        let kernel = deps.into_kernel();
        Scene { deps, kernel }
    }
}
