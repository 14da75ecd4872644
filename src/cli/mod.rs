//! Command-line interface for todos
//!
//! This module defines the CLI structure using clap derive macros. Each
//! invocation seeds a fresh list, runs one operation and renders the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

mod todo;

/// todos - month/year scoped todo lists
///
/// Load todos from a seed file, then list, query, add, edit or delete them.
/// Changes are shown but never written back to the seed.
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seed file with initial todos (.json, .jsonl or .toml)
    #[arg(long, global = true, env = "TODOS_SEED")]
    pub seed: Option<PathBuf>,

    /// Seed with the built-in sample todos
    #[arg(long, global = true, conflicts_with = "seed")]
    pub sample: bool,

    /// Path to a config file (defaults to ./.todos.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Plain-text output even when the config turns JSON on
    #[arg(long, global = true, conflicts_with = "json")]
    pub no_json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all todos
    List,

    /// Show one todo
    Show {
        /// Todo id
        id: u64,
    },

    /// List completed todos, optionally within a month/year
    Completed {
        /// Month as written in the todo (e.g. "1")
        #[arg(long, requires = "year")]
        month: Option<String>,

        /// Year as written in the todo (e.g. "2017")
        #[arg(long, requires = "month")]
        year: Option<String>,
    },

    /// List todos within a month/year
    Within {
        /// Month as written in the todo (e.g. "1")
        #[arg(long)]
        month: String,

        /// Year as written in the todo (e.g. "2017")
        #[arg(long)]
        year: String,
    },

    /// Add a todo
    Add {
        /// Title
        title: String,

        /// Month (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<String>,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a todo
    Delete {
        /// Todo id
        id: u64,
    },

    /// Mark a todo completed
    Complete {
        /// Todo id
        id: u64,
    },

    /// Mark a todo not completed
    Reopen {
        /// Todo id
        id: u64,
    },

    /// Change a todo's fields
    Edit {
        /// Todo id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New month
        #[arg(long)]
        month: Option<String>,

        /// New year
        #[arg(long)]
        year: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
}

impl Cli {
    /// Load `--config`, or `.todos.toml` from the working directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::load_from_dir(&std::env::current_dir()?)),
        }
    }

    /// Whether results and errors render as JSON.
    pub fn json_output(&self, config: &Config) -> bool {
        !self.no_json && (self.json || config.output.json)
    }

    /// Execute the CLI command
    pub fn run(self, config: Config) -> Result<()> {
        let json = self.json_output(&config);
        let ctx = todo::load_context(
            &config,
            todo::SeedSource {
                seed: self.seed,
                sample: self.sample,
            },
        )?;
        let quiet = self.quiet;

        match self.command {
            Commands::List => todo::run_list(ctx, todo::ListOptions { json, quiet }),
            Commands::Show { id } => todo::run_show(ctx, todo::ShowOptions { id, json, quiet }),
            Commands::Completed { month, year } => todo::run_completed(
                ctx,
                todo::CompletedOptions {
                    window: month.zip(year),
                    json,
                    quiet,
                },
            ),
            Commands::Within { month, year } => todo::run_within(
                ctx,
                todo::WithinOptions {
                    month,
                    year,
                    json,
                    quiet,
                },
            ),
            Commands::Add {
                title,
                month,
                year,
                description,
            } => todo::run_add(
                ctx,
                todo::AddOptions {
                    title,
                    month,
                    year,
                    description,
                    json,
                    quiet,
                },
            ),
            Commands::Delete { id } => {
                todo::run_delete(ctx, todo::DeleteOptions { id, json, quiet })
            }
            Commands::Complete { id } => todo::run_set_completed(
                ctx,
                todo::SetCompletedOptions {
                    id,
                    completed: true,
                    json,
                    quiet,
                },
            ),
            Commands::Reopen { id } => todo::run_set_completed(
                ctx,
                todo::SetCompletedOptions {
                    id,
                    completed: false,
                    json,
                    quiet,
                },
            ),
            Commands::Edit {
                id,
                title,
                month,
                year,
                description,
            } => todo::run_edit(
                ctx,
                todo::EditOptions {
                    id,
                    title,
                    month,
                    year,
                    description,
                    json,
                    quiet,
                },
            ),
        }
    }
}
