use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::common::auth::{CurrentUser, Role, UserState};
use crate::common::{HouseholdId, MessageCatalog};

/// Engine configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: String,
    pub messages_path: Option<PathBuf>,
    pub data_path: Option<PathBuf>,
    pub household_id: Option<HouseholdId>,
    pub role: Role,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            locale: env::var("RECIPES_LOCALE").unwrap_or_else(|_| "en".to_string()),
            messages_path: env::var("RECIPES_MESSAGES_PATH").ok().map(PathBuf::from),
            data_path: env::var("RECIPES_DATA_PATH").ok().map(PathBuf::from),
            household_id: env::var("RECIPES_HOUSEHOLD_ID")
                .ok()
                .map(|raw| HouseholdId::parse(&raw))
                .transpose()
                .context("RECIPES_HOUSEHOLD_ID must be a valid UUID")?,
            role: env::var("RECIPES_ROLE")
                .unwrap_or_else(|_| "member".to_string())
                .parse()
                .map_err(anyhow::Error::msg)
                .context("RECIPES_ROLE must be 'member' or 'superuser'")?,
        })
    }

    /// The acting user described by this configuration.
    ///
    /// Without a household id the user is signed in but owns only recipes
    /// that have no household either.
    pub fn user_state(&self) -> UserState {
        UserState::Loaded(CurrentUser {
            household_id: self.household_id,
            role: self.role,
        })
    }

    /// English defaults, overlaid with `messages_path` when set.
    pub fn catalog(&self) -> Result<MessageCatalog> {
        match &self.messages_path {
            Some(path) => MessageCatalog::load(&self.locale, path),
            None => Ok(MessageCatalog::english()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            locale: "en".to_string(),
            messages_path: None,
            data_path: None,
            household_id: None,
            role: Role::Member,
        }
    }

    #[test]
    fn user_without_household_is_still_loaded() {
        let state = config().user_state();
        assert!(!state.is_loading());
        assert_eq!(state.user().and_then(|u| u.household_id), None);
    }

    #[test]
    fn superuser_role_carries_capabilities() {
        let cfg = Config {
            role: Role::Superuser,
            household_id: Some(HouseholdId::new()),
            ..config()
        };
        assert!(cfg.user_state().capabilities().can_transfer_household);
    }

    #[test]
    fn catalog_defaults_to_english() {
        let catalog = config().catalog().unwrap();
        assert_eq!(catalog.locale(), "en");
    }
}
