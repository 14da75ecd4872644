//! todos - in-memory todo lists
//!
//! Tasks carry a title, a month/year scope, a description and a completion
//! flag. A [`list::TodoList`] owns them and assigns ids; a
//! [`manager::TodoManager`] answers read-only queries over a list.
//!
//! # Module Organization
//!
//! - `todo`: the `Todo` record, raw `TodoData` input and field validation
//! - `list`: `TodoList`, the owning collection (init/add/delete/update/find)
//! - `manager`: `TodoManager`, completed and month/year views
//! - `clock`: calendar source for default month/year
//! - `error`: error types and result aliases
//! - `config`: configuration loading from `.todos.toml`
//! - `seed`: initial records from JSON, JSONL or TOML files
//! - `output`: human and JSON rendering for the CLI
//! - `cli`: command-line interface using clap

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod list;
pub mod manager;
pub mod output;
pub mod seed;
pub mod todo;

pub use error::{Error, Result};
pub use list::TodoList;
pub use manager::TodoManager;
pub use todo::{Todo, TodoData};
