//! Rendering of todo results for the CLI.
//!
//! Every command produces a [`TodoReport`] for terminals and a serializable
//! payload for `--json`. Errors render as `error: <msg>` on stderr or as a
//! JSON envelope whose `error.msg` is the canonical message.

use serde::Serialize;

use crate::error::{Error, ErrorMsg, Result};
use crate::todo::Todo;

pub const SCHEMA_VERSION: &str = "todos.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Plain-text view of one command's result: a header, `key: value` fields,
/// the todos involved and an optional trailing note.
#[derive(Debug, Clone)]
pub struct TodoReport {
    header: String,
    fields: Vec<(String, String)>,
    todos: Vec<String>,
    note: Option<String>,
}

impl TodoReport {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fields: Vec::new(),
            todos: Vec::new(),
            note: None,
        }
    }

    /// Report listing `todos`, headed by their count.
    pub fn listing(header: impl Into<String>, todos: &[Todo]) -> Self {
        let mut report = Self::new(header);
        report.field("Total", todos.len().to_string());
        report.todos = todos.iter().map(todo_line).collect();
        report
    }

    /// Report describing one todo field by field.
    pub fn single(header: impl Into<String>, todo: &Todo) -> Self {
        let mut report = Self::new(header);
        report.field("ID", todo.id.to_string());
        report.field("Title", todo.title.clone());
        report.field("Month", todo.month.clone());
        report.field("Year", todo.year.clone());
        if !todo.description.is_empty() {
            report.field("Description", todo.description.clone());
        }
        report.field("Completed", todo.completed.to_string());
        report
    }

    pub fn field(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn note(&mut self, note: impl Into<String>) -> &mut Self {
        self.note = Some(note.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = self.header.clone();
        for (key, value) in &self.fields {
            out.push_str(&format!("\n  {key}: {value}"));
        }
        if !self.todos.is_empty() {
            out.push('\n');
            for line in &self.todos {
                out.push_str(&format!("\n  {line}"));
            }
        }
        if let Some(note) = &self.note {
            out.push_str(&format!("\n\nnote: {note}"));
        }
        out
    }
}

/// One-line rendering used in listings: `[x] #2 1/2017 Buy Apples`.
pub fn todo_line(todo: &Todo) -> String {
    let mark = if todo.completed { "x" } else { " " };
    let mut line = format!(
        "[{mark}] #{} {}/{} {}",
        todo.id, todo.month, todo.year, todo.title
    );
    if !todo.description.is_empty() {
        line.push_str(&format!(" ({})", todo.description));
    }
    line
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    report: &TodoReport,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
            #[serde(skip_serializing_if = "Option::is_none")]
            note: Option<&'a str>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            note: report.note.as_deref(),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if !options.quiet {
        println!("{}", report.render());
    }
    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    let hint = error_hint(err);
    if json {
        #[derive(Serialize)]
        struct ErrorBody {
            #[serde(flatten)]
            msg: ErrorMsg,
            code: i32,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody,
            #[serde(skip_serializing_if = "Option::is_none")]
            hint: Option<&'static str>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                msg: ErrorMsg::from(err),
                code: err.exit_code(),
            },
            hint,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

/// Name of the subcommand being run, skipping global flags and their values.
pub fn infer_command_name_from_args() -> String {
    let mut skip_value = false;

    for arg in std::env::args().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        if arg.starts_with('-') {
            skip_value = matches!(arg.as_str(), "--seed" | "--config");
            continue;
        }
        return arg;
    }

    "todos".to_string()
}

fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::InvalidId => Some("run `todos list` to see existing ids"),
        Error::InvalidInput => Some("a todo needs a non-empty title, month and year"),
        Error::InvalidConfig(_) => Some("fix .todos.toml then retry"),
        _ => None,
    }
}
