//! CLI for the navmark bookmark store.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use navmark_core::bookmarks::{BookmarkService, NewCategory, NewItem};
use navmark_core::config::{self, NavConfig};
use navmark_core::store::JsonFileStore;
use navmark_core::Level;
use std::path::PathBuf;

use commands::{
    run_add, run_add_category, run_categories, run_check, run_click, run_delete, run_normalize,
    run_normalize_url, run_repair, run_save, run_search, run_show, run_trash,
};

/// Top-level CLI for navmark.
#[derive(Debug, Parser)]
#[command(name = "navmark")]
#[command(about = "navmark: normalized, level-filtered bookmark navigation data", long_about = None)]
pub struct Cli {
    /// Account whose bookmarks to operate on (defaults to the configured admin).
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the bookmarks visible at a permission level as JSON.
    Show {
        /// Visitor level: 0-3 or guest/user/vip/admin.
        #[arg(long, default_value = "guest")]
        level: Level,
    },

    /// Replace the dataset with a JSON document (`-` reads stdin).
    Save {
        /// Path to `{content: {categories, items}}` or `{categories, items}`.
        path: PathBuf,
    },

    /// Normalize one or more URLs and print the results.
    NormalizeUrl {
        /// Raw URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Normalize a dataset document and print it, without storing anything.
    Normalize {
        /// Path to the document (`-` reads stdin).
        path: PathBuf,
    },

    /// Add a bookmark.
    Add {
        url: String,
        #[arg(long)]
        name: Option<String>,
        /// Category id.
        #[arg(long, default_value = "0")]
        category: i64,
        #[arg(long)]
        description: Option<String>,
        /// Tag (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Minimum visitor level.
        #[arg(long, default_value = "guest")]
        level: Level,
    },

    /// Add a category.
    AddCategory {
        name: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, default_value = "guest")]
        level: Level,
    },

    /// Check whether a URL is already bookmarked.
    Check { url: String },

    /// Search bookmarks; without a query, list recently visited ones.
    Search {
        query: Option<String>,
        /// Maximum number of results (defaults to `search_limit` from config).
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List categories (id and name).
    Categories,

    /// Record a visit to a bookmark.
    Click { id: i64 },

    /// Move a bookmark to the recycle bin.
    Delete { id: i64 },

    /// Manage the recycle bin.
    Trash {
        #[command(subcommand)]
        action: TrashAction,
    },

    /// Re-number bookmarks whose ids collide.
    Repair,
}

#[derive(Debug, Subcommand)]
pub enum TrashAction {
    /// List deleted bookmarks.
    List,
    /// Restore a deleted bookmark into the current user's dataset.
    Restore { id: i64 },
    /// Permanently delete one entry.
    Purge { id: i64 },
    /// Permanently delete everything.
    Empty,
}

/// Shared state handed to command handlers.
pub struct Context {
    pub cfg: NavConfig,
    pub user: String,
    pub service: BookmarkService<JsonFileStore>,
}

impl Context {
    fn new(cfg: NavConfig, user: Option<String>) -> Result<Self> {
        let store = JsonFileStore::new(cfg.resolve_data_dir()?);
        tracing::debug!(data_dir = %store.root().display(), "using data directory");
        let service = BookmarkService::new(store, cfg.admin_username.clone())
            .with_max_text_len(cfg.max_text_len);
        let user = user.unwrap_or_else(|| service.admin_username().to_string());
        Ok(Self { cfg, user, service })
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // Pure transforms never touch the data directory.
        let open = move || Context::new(cfg, cli.user);
        match cli.command {
            CliCommand::NormalizeUrl { urls } => run_normalize_url(&urls)?,
            CliCommand::Normalize { path } => run_normalize(&path)?,
            CliCommand::Show { level } => run_show(&open()?, level)?,
            CliCommand::Save { path } => run_save(&open()?, &path)?,
            CliCommand::Add {
                url,
                name,
                category,
                description,
                tags,
                level,
            } => {
                let new = NewItem {
                    name,
                    url,
                    description,
                    category_id: category,
                    tags,
                    level,
                };
                run_add(&open()?, new)?
            }
            CliCommand::AddCategory { name, icon, level } => {
                run_add_category(&open()?, NewCategory { name, icon, level })?
            }
            CliCommand::Check { url } => run_check(&open()?, &url)?,
            CliCommand::Search { query, limit } => {
                let ctx = open()?;
                let limit = limit.unwrap_or(ctx.cfg.search_limit);
                run_search(&ctx, query.as_deref().unwrap_or(""), limit)?
            }
            CliCommand::Categories => run_categories(&open()?)?,
            CliCommand::Click { id } => run_click(&open()?, id)?,
            CliCommand::Delete { id } => run_delete(&open()?, id)?,
            CliCommand::Trash { action } => run_trash(&open()?, action)?,
            CliCommand::Repair => run_repair(&open()?)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
