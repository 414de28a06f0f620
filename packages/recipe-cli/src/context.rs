//! Terminal implementations of the engine's collaborators

use async_trait::async_trait;
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use std::sync::Mutex;
use tracing::warn;

use recipe_core::common::auth::UserState;
use recipe_core::common::RecipeId;
use recipe_core::kernel::{
    BaseDialogService, BaseNavigator, BaseNotifier, BaseUserSource, ButtonStyle,
    ConfirmationPrompt, DialogChoice,
};

/// Asks confirmation prompts with a dialoguer `Select`.
pub struct TerminalDialogs;

#[async_trait]
impl BaseDialogService for TerminalDialogs {
    async fn request_confirmation(&self, prompt: ConfirmationPrompt) -> DialogChoice {
        let asked = tokio::task::spawn_blocking(move || ask(&prompt)).await;
        match asked {
            Ok(Ok(choice)) => choice,
            Ok(Err(e)) => {
                warn!(error = %e, "dialog dismissed");
                DialogChoice::Cancel
            }
            Err(e) => {
                warn!(error = %e, "dialog task failed");
                DialogChoice::Cancel
            }
        }
    }
}

fn ask(prompt: &ConfirmationPrompt) -> anyhow::Result<DialogChoice> {
    println!();
    println!("{}", style(&prompt.title).bold());
    println!("{}", prompt.message);

    let labels: Vec<String> = prompt
        .buttons
        .iter()
        .map(|button| match button.style {
            ButtonStyle::Destructive => style(&button.label).red().to_string(),
            ButtonStyle::Cancel => style(&button.label).dim().to_string(),
            ButtonStyle::Default => button.label.clone(),
        })
        .collect();

    // Esc dismisses
    let picked = Select::with_theme(&ColorfulTheme::default())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked
        .and_then(|index| prompt.buttons.get(index))
        .map(|button| button.choice)
        .unwrap_or(DialogChoice::Cancel))
}

/// Prints notices to stdout.
pub struct TerminalNotifier;

impl BaseNotifier for TerminalNotifier {
    fn notify(&self, title: &str, message: &str) {
        println!("{} {}", style(title).cyan().bold(), message);
    }
}

/// Where the shell should go after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Back,
    Recipe(RecipeId),
}

/// Remembers the last navigation request for the shell loop to act on.
#[derive(Default)]
pub struct PendingNavigation {
    route: Mutex<Option<Route>>,
}

impl PendingNavigation {
    pub fn take(&self) -> Option<Route> {
        self.route.lock().ok().and_then(|mut route| route.take())
    }

    fn set(&self, next: Route) {
        if let Ok(mut route) = self.route.lock() {
            *route = Some(next);
        }
    }
}

impl BaseNavigator for PendingNavigation {
    fn go_back(&self) {
        self.set(Route::Back);
    }

    fn open_recipe(&self, id: RecipeId) {
        self.set(Route::Recipe(id));
    }
}

/// The configured user; the shell never changes identity mid-session.
pub struct ConfiguredUser {
    state: UserState,
}

impl ConfiguredUser {
    pub fn new(state: UserState) -> Self {
        Self { state }
    }
}

impl BaseUserSource for ConfiguredUser {
    fn current_user(&self) -> UserState {
        self.state.clone()
    }
}
