//! Initial todo records for bulk loading.
//!
//! Seed files are read as `.json` (array), `.jsonl` (one record per line) or
//! `.toml` (`[[todos]]` tables). Records are raw [`TodoData`]; validation is
//! left to [`crate::list::TodoList::init`].

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::todo::TodoData;

#[derive(Debug, Deserialize)]
struct TomlSeed {
    #[serde(default)]
    todos: Vec<TodoData>,
}

/// Read seed records from `path`, choosing the format by extension.
pub fn load_items(path: &Path) -> Result<Vec<TodoData>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let items: Vec<TodoData> = match extension.as_deref() {
        Some("json") => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        Some("jsonl") => read_jsonl(path)?,
        Some("toml") => {
            let content = fs::read_to_string(path)?;
            let seed: TomlSeed = toml::from_str(&content)?;
            seed.todos
        }
        _ => {
            return Err(Error::InvalidArgument(format!(
                "unsupported seed file '{}' (expected .json, .jsonl or .toml)",
                path.display()
            )))
        }
    };

    tracing::debug!(path = %path.display(), records = items.len(), "seed loaded");
    Ok(items)
}

fn read_jsonl(path: &Path) -> Result<Vec<TodoData>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }

    Ok(records)
}

/// The five grocery records the app ships as demo data. Several leave
/// month or year blank so they pick up the current date.
pub fn sample_items() -> Vec<TodoData> {
    vec![
        TodoData::new("Buy Milk")
            .month("1")
            .year("2017")
            .description("Milk for baby"),
        TodoData::new("Buy Apples")
            .month("")
            .year("2017")
            .description("An apple a day keeps the doctor away"),
        TodoData::new("Buy chocolate")
            .month("1")
            .year("")
            .description("For the cheat day"),
        TodoData::new("Buy Veggies")
            .month("")
            .year("")
            .description("For the daily fiber needs"),
        TodoData::new("Buy Cookies")
            .month("")
            .year("")
            .description(""),
    ]
}
