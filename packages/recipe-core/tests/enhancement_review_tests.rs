//! Enhance-then-review workflow.

mod common;

use crate::common::*;
use recipe_core::common::auth::UserState;
use recipe_core::common::MessageKey;
use recipe_core::domains::recipes::machines::ReviewAction;
use recipe_core::domains::recipes::ActionOutcome;
use recipe_core::kernel::test_dependencies::{ops, Navigation, StoreCall};
use recipe_core::kernel::{ButtonStyle, DialogChoice};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn approving_own_enhanced_recipe_calls_review_and_notifies(ctx: &TestHarness) {
    let recipe = enhanced_recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[]);
    let mut actions = scene.actions(&recipe);
    assert!(actions.needs_review());

    let outcome = actions.review_enhancement(ReviewAction::Approve).await;

    assert!(outcome.is_completed());
    assert_eq!(
        scene.deps.store.calls(),
        vec![StoreCall::Review {
            id: recipe.id,
            action: ReviewAction::Approve,
        }]
    );
    assert!(scene
        .deps
        .notifier
        .was_notified(&scene.deps.text(MessageKey::EnhancementApproved)));
    assert!(!actions.needs_review());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejecting_restores_original_content(ctx: &TestHarness) {
    let recipe = recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[DialogChoice::Confirm]);
    let mut actions = scene.actions(&recipe);

    assert!(actions.request_enhance().await.is_completed());
    assert!(actions.show_enhancement_review_modal());
    assert!(actions.needs_review());

    assert!(actions.reject_enhancement().await.is_completed());
    assert!(!actions.show_enhancement_review_modal());

    let stored = scene.stored(&recipe).await.unwrap();
    assert!(!stored.enhanced);
    assert!(scene
        .deps
        .notifier
        .was_notified(&scene.deps.text(MessageKey::EnhancementRejected)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn reviewing_foreign_recipe_is_refused(ctx: &TestHarness) {
    let recipe = enhanced_recipe_in(&ctx.neighbour, "Ramen");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[]);
    let mut actions = scene.actions(&recipe);

    let outcome = actions.review_enhancement(ReviewAction::Approve).await;

    assert_eq!(outcome, ActionOutcome::Refused);
    assert_eq!(scene.deps.store.mutation_count(), 0);
    assert!(scene.deps.notifier.was_notified(&scene.deps.text(MessageKey::CannotReview)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn failed_review_keeps_modal_open_but_shortcut_closes_it(ctx: &TestHarness) {
    let recipe = enhanced_recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene_with(ctx.member(), vec![recipe.clone()], &[], |store| {
        store.failing(ops::REVIEW)
    });
    let mut actions = scene.actions(&recipe);
    actions.set_show_enhancement_review_modal(true);

    let outcome = actions.review_enhancement(ReviewAction::Approve).await;
    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(actions.show_enhancement_review_modal());
    assert!(scene.deps.notifier.was_notified(&scene.deps.text(MessageKey::ReviewFailed)));

    let outcome = actions.approve_enhancement().await;
    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(!actions.show_enhancement_review_modal());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn enhance_cancelled_issues_no_mutation(ctx: &TestHarness) {
    let recipe = recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[DialogChoice::Cancel]);
    let mut actions = scene.actions(&recipe);

    assert_eq!(actions.request_enhance().await, ActionOutcome::Cancelled);
    assert_eq!(scene.deps.store.mutation_count(), 0);
    assert!(!actions.show_enhancement_review_modal());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn failed_enhance_does_not_open_review(ctx: &TestHarness) {
    let recipe = recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene_with(ctx.member(), vec![recipe.clone()], &[DialogChoice::Confirm], |store| {
        store.failing(ops::ENHANCE)
    });
    let mut actions = scene.actions(&recipe);

    assert_eq!(actions.request_enhance().await, ActionOutcome::Failed);
    assert!(!actions.show_enhancement_review_modal());
    assert!(scene.deps.notifier.was_notified(&scene.deps.text(MessageKey::EnhanceFailed)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn enhancing_shared_foreign_recipe_offers_copy_first(ctx: &TestHarness) {
    let recipe = shared_recipe_in(&ctx.neighbour, "Paella");
    let scene = ctx.scene(
        ctx.member(),
        vec![recipe.clone()],
        &[DialogChoice::Copy, DialogChoice::Copy],
    );
    let mut actions = scene.actions(&recipe);

    assert!(actions.request_enhance().await.is_completed());

    let prompts = scene.deps.dialogs.prompts();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0].title, scene.deps.text(MessageKey::ForeignRecipeTitle));

    let calls = scene.deps.store.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], StoreCall::Copy { .. }));
    assert!(matches!(
        scene.deps.navigator.history().as_slice(),
        [Navigation::Recipe(_)]
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn enhancing_private_foreign_recipe_only_explains(ctx: &TestHarness) {
    let recipe = recipe_in(&ctx.neighbour, "Secret sauce");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[DialogChoice::Acknowledge]);
    let mut actions = scene.actions(&recipe);

    assert_eq!(actions.request_enhance().await, ActionOutcome::Refused);

    let prompt = scene.deps.dialogs.last_prompt().unwrap();
    assert_eq!(prompt.choices(), vec![DialogChoice::Acknowledge]);
    assert_eq!(scene.deps.store.mutation_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn enhance_and_review_wait_for_user_to_load(ctx: &TestHarness) {
    let recipe = enhanced_recipe_in(&ctx.home, "Ramen");
    let scene = ctx.scene(UserState::Loading, vec![recipe.clone()], &[DialogChoice::Confirm]);
    let mut actions = scene.actions(&recipe);

    assert_eq!(actions.request_enhance().await, ActionOutcome::Refused);
    assert_eq!(
        actions.review_enhancement(ReviewAction::Approve).await,
        ActionOutcome::Refused
    );

    let wait = scene.deps.text(MessageKey::PleaseWait);
    let waits = scene.deps.notifier.messages().iter().filter(|m| **m == wait).count();
    assert_eq!(waits, 2);
    assert!(scene.deps.dialogs.prompts().is_empty());
    assert_eq!(scene.deps.store.mutation_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deleting_foreign_recipe_still_confirms_and_deletes(ctx: &TestHarness) {
    let recipe = recipe_in(&ctx.neighbour, "Borscht");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[DialogChoice::Confirm]);
    let mut actions = scene.actions(&recipe);

    assert!(actions.delete().await.is_completed());

    let prompt = scene.deps.dialogs.last_prompt().unwrap();
    assert!(prompt.buttons.iter().any(|b| b.style == ButtonStyle::Destructive));
    assert_eq!(scene.deps.store.calls(), vec![StoreCall::Delete { id: recipe.id }]);
    assert_eq!(scene.deps.navigator.history(), vec![Navigation::Back]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cancelling_copy_first_leaves_recipe_untouched(ctx: &TestHarness) {
    let recipe = shared_recipe_in(&ctx.neighbour, "Paella");
    let scene = ctx.scene(ctx.member(), vec![recipe.clone()], &[DialogChoice::Cancel]);
    let mut actions = scene.actions(&recipe);

    assert_eq!(actions.request_enhance().await, ActionOutcome::Cancelled);
    assert_eq!(scene.deps.dialogs.prompts().len(), 1);
    assert!(scene.deps.store.calls().is_empty());
    assert!(scene.deps.navigator.history().is_empty());
}
