// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipebook::application::commands::*;
use recipebook::application::dto::{render_detail, render_status, render_summaries};
use recipebook::application::{AppState, ErrorResponse, ListQuery, RecipeEditForm, RecipeForm};
use recipebook::config::AppConfig;
use recipebook::error::{AppError, AppResult};
use recipebook::persistence::UserNotifier;

#[derive(Parser)]
#[command(name = "recipebook", version, about = "Local recipe catalog")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the recipe database
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// error, warn, info, debug or trace. RUST_LOG wins when set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Keep recipes in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Don't write the default recipes into an empty collection
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List recipes, optionally filtered
    List {
        /// Case-insensitive title search
        #[arg(long, short)]
        search: Option<String>,
        /// all, easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,
        /// Maximum prep + cook minutes (0 = no limit)
        #[arg(long)]
        max_time: Option<u32>,
        /// all, veg or non-veg
        #[arg(long = "type")]
        recipe_type: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe
    Show {
        id: u64,
        #[arg(long)]
        json: bool,
    },
    /// Add a recipe
    Add(AddArgs),
    /// Change fields of an existing recipe
    Edit {
        id: u64,
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Delete a recipe
    Delete { id: u64 },
    /// Write all recipes as JSON to a file, or stdout
    Export { path: Option<PathBuf> },
    /// Replace all recipes with the JSON array in a file
    Import { path: PathBuf },
    /// Remove every stored recipe
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Check that storage works
    Status {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value_t = 0)]
    prep_time: u32,
    #[arg(long, default_value_t = 0)]
    cook_time: u32,
    /// easy, medium or hard
    #[arg(long)]
    difficulty: String,
    /// veg or non-veg
    #[arg(long = "type")]
    recipe_type: String,
    #[arg(long, default_value = "")]
    image_url: String,
    /// Repeat for each ingredient
    #[arg(long = "ingredient", required = true)]
    ingredients: Vec<String>,
    /// Repeat for each step, in order
    #[arg(long = "step", required = true)]
    steps: Vec<String>,
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    prep_time: Option<u32>,
    #[arg(long)]
    cook_time: Option<u32>,
    #[arg(long)]
    difficulty: Option<String>,
    #[arg(long = "type")]
    recipe_type: Option<String>,
    /// Pass an empty string to remove the image
    #[arg(long)]
    image_url: Option<String>,
    /// Replaces the whole ingredient list
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Replaces the whole step list
    #[arg(long = "step")]
    steps: Vec<String>,
}

/// Prints user-facing warnings to stderr
struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

fn init_logging(level: &str) -> Result<()> {
    let level: tracing::Level = level.parse().context("Invalid log level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.no_seed {
        config.seed_defaults = false;
    }
    Ok(config)
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

fn run(command: Command, state: &AppState) -> AppResult<String> {
    match command {
        Command::List {
            search,
            difficulty,
            max_time,
            recipe_type,
            json,
        } => {
            let query = ListQuery {
                search,
                difficulty,
                max_time,
                recipe_type,
            };
            let recipes = list_recipes(state, query)?;
            if json {
                to_json(&recipes)
            } else {
                Ok(render_summaries(&recipes))
            }
        }
        Command::Show { id, json } => {
            let recipe = get_recipe(state, id)?;
            if json {
                to_json(&recipe)
            } else {
                Ok(render_detail(&recipe))
            }
        }
        Command::Add(args) => {
            let form = RecipeForm {
                title: args.title,
                description: args.description,
                prep_time: args.prep_time,
                cook_time: args.cook_time,
                difficulty: args.difficulty,
                recipe_type: args.recipe_type,
                image_url: args.image_url,
                ingredients: args.ingredients,
                steps: args.steps,
            };
            let recipe = create_recipe(state, form)?;
            Ok(format!("Added recipe #{} '{}'\n", recipe.id, recipe.title))
        }
        Command::Edit { id, changes } => {
            let form = RecipeEditForm {
                title: changes.title,
                description: changes.description,
                prep_time: changes.prep_time,
                cook_time: changes.cook_time,
                difficulty: changes.difficulty,
                recipe_type: changes.recipe_type,
                image_url: changes.image_url,
                ingredients: non_empty(changes.ingredients),
                steps: non_empty(changes.steps),
            };
            let recipe = edit_recipe(state, id, form)?;
            Ok(format!("Updated recipe #{} '{}'\n", recipe.id, recipe.title))
        }
        Command::Delete { id } => {
            delete_recipe(state, id)?;
            Ok(format!("Deleted recipe #{}\n", id))
        }
        Command::Export { path } => {
            let json = export_recipes(state)?;
            match path {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    Ok(format!("Exported recipes to {}\n", path.display()))
                }
                None => Ok(json + "\n"),
            }
        }
        Command::Import { path } => {
            let raw = std::fs::read_to_string(&path)?;
            let count = import_recipes(state, &raw)?;
            Ok(format!("Imported {} recipes from {}\n", count, path.display()))
        }
        Command::Reset { yes } => {
            if !yes {
                return Err(AppError::Other(
                    "Refusing to delete every recipe without --yes".to_string(),
                ));
            }
            reset_recipes(state);
            Ok("All recipes removed\n".to_string())
        }
        Command::Status { json } => {
            let status = storage_status(state);
            if json {
                to_json(&status)
            } else {
                Ok(render_status(&status))
            }
        }
    }
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn fail(error: AppError) -> ExitCode {
    let response = ErrorResponse::from_app_error(error);
    eprintln!("{}", response);
    ExitCode::from(response.exit_code() as u8)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. CONFIGURATION
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging("warn");
            return fail(e);
        }
    };

    // 2. LOGGING
    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("error: {:#}", e);
        return ExitCode::from(2);
    }

    // 3. STATE (built once, passed to every handler)
    let notifier: Arc<dyn UserNotifier> = Arc::new(ConsoleNotifier);
    let state = if cli.ephemeral {
        AppState::in_memory(config, notifier)
    } else {
        match AppState::open(config, notifier) {
            Ok(state) => state,
            Err(e) => return fail(e),
        }
    };
    state.bootstrap();

    // 4. DISPATCH
    match run(cli.command, &state) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}
