//! # CLI Layer
//!
//! This module is **one possible UI client** for econotes, not the application
//! itself. It is the only place that parses arguments, touches stdout/stderr,
//! sets up logging or picks the data directory.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{print_messages, print_notes, print_tasks, print_total};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use econotes::api::{CmdMessage, EcoNotesApi};
use econotes::config::EcoConfig;
use econotes::draft::{Analyzer, NoteDraft};
use econotes::error::{EcoError, Result};
use econotes::model::{Category, CategoryFilter, NoteId};
use econotes::store::fs_backend::FsBackend;
use econotes::store::StorageBackend;
use econotes::suggest::{KeywordSuggester, SuggestionProvider, ECO_TASKS};
use log::{debug, info};
use std::path::PathBuf;

/// Overrides the data directory (notes file and config.json).
const HOME_ENV: &str = "ECONOTES_HOME";

struct AppContext {
    api: EcoNotesApi<FsBackend>,
    config: EcoConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            category,
            tasks,
            suggest,
        }) => handle_add(&mut ctx, title, content, category, tasks, suggest),
        Some(Commands::List {
            search,
            category,
            json,
        }) => handle_list(&mut ctx, search, category, json),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Toggle { id, task }) => handle_toggle(&mut ctx, id, task.join(" ")),
        Some(Commands::Points) => handle_points(&ctx),
        Some(Commands::Suggest { content }) => handle_suggest(&ctx, content.join(" ")),
        Some(Commands::Tasks) => {
            print_tasks(&ECO_TASKS[..]);
            Ok(())
        }
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, String::new(), CategoryFilter::All, false),
    }
}

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "econotes", "econotes")
        .ok_or_else(|| EcoError::Store("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = EcoConfig::load(&data_dir)?;
    info!(
        "Using data dir {} (slot '{}')",
        data_dir.display(),
        config.storage_key
    );

    let backend = FsBackend::new(data_dir.clone());
    let api = EcoNotesApi::open(backend, config.storage_key.clone());

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn suggester(config: &EcoConfig) -> KeywordSuggester {
    let settings = config.suggest_settings();
    match config.seed {
        Some(seed) => KeywordSuggester::seeded(seed, settings),
        None => KeywordSuggester::from_entropy(settings),
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(EcoError::Io)?;
    Ok(runtime.block_on(future))
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    category: Category,
    tasks: Vec<String>,
    suggest: bool,
) -> Result<()> {
    let mut draft = NoteDraft::new(title, content, category);
    for task in tasks {
        draft.accept_suggestion(task);
    }

    if suggest {
        let analyzer = Analyzer::new(suggester(&ctx.config));
        let suggestions = block_on(analyzer.analyze(&draft))??;
        if suggestions.is_empty() {
            print_messages(&[CmdMessage::info("Content too short for suggestions")]);
        }
        for task in suggestions {
            debug!("Accepting suggestion: {}", task);
            if draft.accept_suggestion(task.clone()) {
                print_messages(&[CmdMessage::info(format!("Suggested: {}", task))]);
            }
        }
    }

    let result = ctx.api.add_draft(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: String,
    category: CategoryFilter,
    json: bool,
) -> Result<()> {
    ctx.api.set_search_query(search);
    ctx.api.set_category_filter(category);
    let result = ctx.api.list_notes()?;
    let total = result.total_points.unwrap_or_default();

    if json {
        let out = serde_json::json!({
            "notes": result.listed_notes,
            "totalPoints": total,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_notes(&result.listed_notes);
    println!();
    print_total(total);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: NoteId) -> Result<()> {
    let result = ctx.api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, id: NoteId, task: String) -> Result<()> {
    let result = ctx.api.toggle_eco_task(id, &task)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_points(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.points_summary()?;
    print_total(result.total_points.unwrap_or_default());
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, content: String) -> Result<()> {
    let suggestions = block_on(suggester(&ctx.config).suggest(&content))??;
    if suggestions.is_empty() {
        print_messages(&[CmdMessage::info("Content too short for suggestions")]);
    } else {
        print_tasks(&suggestions);
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let store = ctx.api.store();
    println!("{}", store.backend().slot_path(store.key()).display());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in [
                "storage-key",
                "suggestion-delay-ms",
                "max-suggestions",
                "min-content-len",
                "seed",
            ] {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!("{} = {}", key, value))]);
        }
    }
    Ok(())
}
