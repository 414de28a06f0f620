mod context;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use recipe_core::kernel::{InMemoryRecipeStore, RecipeKernel};
use recipe_core::Config;

use crate::context::{ConfiguredUser, PendingNavigation, TerminalDialogs, TerminalNotifier};

#[derive(Parser)]
#[command(name = "recipes", about = "Household recipe shell", version)]
struct Cli {
    /// JSON store snapshot (overrides RECIPES_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Write changes back to the data file on exit
    #[arg(long, global = true)]
    save: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every recipe with its status
    List,
    /// Browse recipes and act on them (default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so they do not interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli
        .data
        .or_else(|| config.data_path.clone())
        .context("No recipe data: pass --data or set RECIPES_DATA_PATH")?;

    let store = Arc::new(InMemoryRecipeStore::load(config.household_id, &data_path)?);
    let navigation = Arc::new(PendingNavigation::default());
    let kernel = Arc::new(RecipeKernel::new(
        Arc::new(ConfiguredUser::new(config.user_state())),
        store.clone(),
        Arc::new(TerminalDialogs),
        Arc::new(TerminalNotifier),
        navigation.clone(),
        Arc::new(config.catalog()?),
    ));

    print_banner();

    match cli.command.unwrap_or(Command::Shell) {
        Command::List => shell::print_recipes(&store)?,
        Command::Shell => shell::run(kernel, &store, &navigation).await?,
    }

    if cli.save {
        let json = serde_json::to_string_pretty(&store.snapshot()?)?;
        std::fs::write(&data_path, json)
            .with_context(|| format!("Failed to write {}", data_path.display()))?;
        println!("{} {}", "Saved".bright_green(), data_path.display());
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║          Household Recipes             ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
    println!();
}
