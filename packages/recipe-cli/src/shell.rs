//! Interactive recipe browser.
//!
//! Lists recipes, then offers the actions the acting user may take on the
//! selected one. Which actions appear is driven by the handle's permission
//! flags, the same ones a graphical front-end would bind to.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::sync::Arc;

use recipe_core::common::RecipeId;
use recipe_core::domains::meal_plan::{date_key, is_past_date_now, MealType};
use recipe_core::domains::recipes::machines::{EnhancementStatus, ModerationStatus};
use recipe_core::domains::recipes::{
    ActionOutcome, Recipe, RecipeActions, RecipeEdit, Visibility,
};
use recipe_core::kernel::{InMemoryRecipeStore, RecipeKernel};

use crate::context::{PendingNavigation, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ThumbUp,
    ThumbDown,
    Enhance,
    Review,
    Copy,
    PlanMeal,
    ClearMeal,
    Edit,
    ToggleSharing,
    Transfer,
    Delete,
    Back,
}

impl MenuItem {
    fn label(&self, actions: &RecipeActions) -> String {
        match self {
            MenuItem::ThumbUp => "👍 Thumbs up".to_string(),
            MenuItem::ThumbDown => "👎 Thumbs down".to_string(),
            MenuItem::Enhance => "✨ Enhance".to_string(),
            MenuItem::Review => "🔍 Review enhancement".to_string(),
            MenuItem::Copy => "📋 Copy to my household".to_string(),
            MenuItem::PlanMeal => "📅 Plan meal".to_string(),
            MenuItem::ClearMeal => "🧹 Clear meal slot".to_string(),
            MenuItem::Edit => "✏️  Edit details".to_string(),
            MenuItem::ToggleSharing => match actions.recipe().map(|r| r.visibility) {
                Some(Visibility::Shared) => "🔒 Stop sharing".to_string(),
                _ => "🌍 Share with other households".to_string(),
            },
            MenuItem::Transfer => "🏠 Move to household".to_string(),
            MenuItem::Delete => "🗑  Delete".to_string(),
            MenuItem::Back => "⬅  Back".to_string(),
        }
    }

    /// Items shown for the current permission flags.
    fn available(actions: &RecipeActions) -> Vec<MenuItem> {
        let owned = actions.is_owned() == Some(true);
        let mut items = Vec::new();
        if owned {
            items.extend([MenuItem::ThumbUp, MenuItem::ThumbDown]);
        }
        if actions.can_enhance() {
            items.push(MenuItem::Enhance);
        }
        if owned && actions.needs_review() {
            items.push(MenuItem::Review);
        }
        if actions.can_copy() {
            items.push(MenuItem::Copy);
        }
        items.extend([MenuItem::PlanMeal, MenuItem::ClearMeal]);
        if actions.can_edit() {
            items.push(MenuItem::Edit);
            if !actions.is_copy() {
                items.push(MenuItem::ToggleSharing);
            }
        }
        if actions.capabilities().can_transfer_household {
            items.push(MenuItem::Transfer);
        }
        items.extend([MenuItem::Delete, MenuItem::Back]);
        items
    }
}

/// Browse recipes until the user exits.
pub async fn run(
    kernel: Arc<RecipeKernel>,
    store: &InMemoryRecipeStore,
    navigation: &PendingNavigation,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let recipes = store.snapshot()?.recipes;
        let mut labels: Vec<String> = recipes.iter().map(summary).collect();
        labels.push("🛑 Exit".to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt("Pick a recipe")
            .items(&labels)
            .default(0)
            .interact()?;

        let Some(recipe) = recipes.get(selection) else {
            println!("{}", "👋 Goodbye!".bright_blue());
            return Ok(());
        };

        let mut next = Some(recipe.id);
        while let Some(id) = next.take() {
            let mut actions = RecipeActions::open(kernel.clone(), id).await;
            next = recipe_menu(&mut actions, navigation, &theme).await?;
        }
    }
}

/// Act on one recipe. Returns the recipe to open next, if navigation asked for one.
async fn recipe_menu(
    actions: &mut RecipeActions,
    navigation: &PendingNavigation,
    theme: &ColorfulTheme,
) -> Result<Option<RecipeId>> {
    loop {
        let Some(recipe) = actions.recipe().cloned() else {
            println!("{}", "Recipe no longer exists.".yellow());
            return Ok(None);
        };

        println!();
        println!("{}", summary(&recipe).bold());
        print_details(&recipe);

        let items = MenuItem::available(actions);
        let labels: Vec<String> = items.iter().map(|item| item.label(actions)).collect();
        let selection = Select::with_theme(theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[selection] {
            MenuItem::ThumbUp => {
                actions.thumb_up().await;
            }
            MenuItem::ThumbDown => {
                actions.thumb_down().await;
            }
            MenuItem::Enhance => {
                actions.request_enhance().await;
                if actions.show_enhancement_review_modal() {
                    review(actions, theme).await?;
                }
            }
            MenuItem::Review => {
                actions.set_show_enhancement_review_modal(true);
                review(actions, theme).await?;
            }
            MenuItem::Copy => {
                actions.request_copy().await;
            }
            MenuItem::PlanMeal => {
                actions.set_show_plan_modal(true);
                loop {
                    let (date, meal_type) = pick_slot(theme)?;
                    let outcome = actions.plan_meal(date, meal_type).await;
                    if !offer_retry(outcome, actions.show_plan_modal(), theme)? {
                        break;
                    }
                }
                actions.set_show_plan_modal(false);
            }
            MenuItem::ClearMeal => {
                let (date, meal_type) = pick_slot(theme)?;
                actions.clear_meal(date, meal_type).await;
            }
            MenuItem::Edit => {
                actions.set_show_edit_modal(true);
                loop {
                    let edit = edit_form(&recipe, theme)?;
                    let outcome = actions.save_edits(edit).await;
                    if !offer_retry(outcome, actions.show_edit_modal(), theme)? {
                        break;
                    }
                }
                actions.set_show_edit_modal(false);
            }
            MenuItem::ToggleSharing => {
                let target = match recipe.visibility {
                    Visibility::Shared => Visibility::Household,
                    Visibility::Household => Visibility::Shared,
                };
                actions.set_visibility(target).await;
            }
            MenuItem::Transfer => {
                actions.set_show_transfer_modal(true);
                let households = actions.load_households().await;
                let names: Vec<&str> = households.iter().map(|h| h.name.as_str()).collect();
                while !households.is_empty() {
                    let picked = Select::with_theme(theme)
                        .with_prompt("Move to which household?")
                        .items(&names)
                        .interact_opt()?;
                    let Some(index) = picked else {
                        break;
                    };
                    let outcome = actions.transfer_household(&households[index]).await;
                    if !offer_retry(outcome, actions.show_transfer_modal(), theme)? {
                        break;
                    }
                }
                actions.set_show_transfer_modal(false);
            }
            MenuItem::Delete => {
                actions.delete().await;
            }
            MenuItem::Back => return Ok(None),
        }

        match navigation.take() {
            Some(Route::Back) => return Ok(None),
            Some(Route::Recipe(id)) => return Ok(Some(id)),
            None => {}
        }
    }
}

/// A failed action leaves its modal open; the shell mirrors that by
/// offering to go again instead of dropping the user's input.
fn offer_retry(outcome: ActionOutcome, modal_open: bool, theme: &ColorfulTheme) -> Result<bool> {
    if !wants_retry(outcome, modal_open) {
        return Ok(false);
    }
    Ok(Confirm::with_theme(theme)
        .with_prompt("Try again?")
        .default(true)
        .interact()?)
}

fn wants_retry(outcome: ActionOutcome, modal_open: bool) -> bool {
    modal_open && outcome == ActionOutcome::Failed
}

async fn review(actions: &mut RecipeActions, theme: &ColorfulTheme) -> Result<()> {
    let choice = Select::with_theme(theme)
        .with_prompt("Keep the enhanced version?")
        .items(&["✅ Approve", "↩️  Reject", "Later"])
        .default(0)
        .interact()?;
    match choice {
        0 => {
            actions.approve_enhancement().await;
        }
        1 => {
            actions.reject_enhancement().await;
        }
        _ => actions.set_show_enhancement_review_modal(false),
    }
    Ok(())
}

fn pick_slot(theme: &ColorfulTheme) -> Result<(NaiveDate, MealType)> {
    let today = date_key(Local::now().date_naive());
    let date: NaiveDate = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            input
                .parse::<NaiveDate>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?
        .parse()?;
    if is_past_date_now(date) {
        println!("{}", "Note: that day is already past.".yellow());
    }

    let meal_labels: Vec<&str> = MealType::ALL.iter().map(|m| m.as_str()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Meal")
        .items(&meal_labels)
        .default(0)
        .interact()?;
    Ok((date, MealType::ALL[index]))
}

fn edit_form(recipe: &Recipe, theme: &ColorfulTheme) -> Result<RecipeEdit> {
    let servings: String = Input::with_theme(theme)
        .with_prompt("Servings (blank to keep)")
        .allow_empty(true)
        .interact_text()?;
    let tags: String = Input::with_theme(theme)
        .with_prompt("Tags, comma separated (blank to keep)")
        .with_initial_text(recipe.tags.join(", "))
        .allow_empty(true)
        .interact_text()?;

    let tags: Vec<String> = tags
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    Ok(RecipeEdit {
        servings: servings.trim().parse().ok(),
        tags: (tags != recipe.tags).then_some(tags),
        ..Default::default()
    })
}

fn summary(recipe: &Recipe) -> String {
    let moderation = match ModerationStatus::of(recipe) {
        ModerationStatus::Approved => "★".bright_yellow().to_string(),
        ModerationStatus::Hidden => "⊘".dimmed().to_string(),
        ModerationStatus::Pending => "·".normal().to_string(),
    };
    let enhancement = match EnhancementStatus::of(recipe) {
        EnhancementStatus::AwaitingReview => " ✨ needs review".magenta().to_string(),
        EnhancementStatus::Reviewed => " ✨".magenta().to_string(),
        EnhancementStatus::Original => String::new(),
    };
    format!("{} {}{}", moderation, recipe.title, enhancement)
}

fn print_details(recipe: &Recipe) {
    let visibility = match recipe.visibility {
        Visibility::Shared => "shared",
        Visibility::Household => "household",
    };
    let mut facts = vec![visibility.to_string()];
    if recipe.is_copy() {
        facts.push("copy".to_string());
    }
    if let Some(servings) = recipe.servings {
        facts.push(format!("serves {}", servings));
    }
    if !recipe.tags.is_empty() {
        facts.push(recipe.tags.join(", "));
    }
    println!("  {}", facts.join(" | ").dimmed());
}

/// Non-interactive listing for `recipes list`.
pub fn print_recipes(store: &InMemoryRecipeStore) -> Result<()> {
    let snapshot = store.snapshot()?;
    for recipe in &snapshot.recipes {
        let household = recipe
            .household_id
            .and_then(|id| snapshot.households.iter().find(|h| h.id == id))
            .map(|h| h.name.as_str())
            .unwrap_or("-");
        println!("{}  {}", summary(recipe), household.dimmed());
    }
    if !snapshot.meal_plan.is_empty() {
        println!();
        println!("{}", "Meal plan".bold());
        for (slot, recipe_id) in &snapshot.meal_plan {
            let title = snapshot
                .recipes
                .iter()
                .find(|r| r.id == *recipe_id)
                .map(|r| r.title.as_str())
                .unwrap_or("(deleted)");
            println!("  {}  {}", slot, title);
        }
    }
    Ok(())
}
