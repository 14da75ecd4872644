//! todos command implementations.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::list::TodoList;
use crate::manager::TodoManager;
use crate::output::{emit_success, OutputOptions, TodoReport};
use crate::seed;
use crate::todo::{Todo, TodoData};

pub struct SeedSource {
    pub seed: Option<PathBuf>,
    pub sample: bool,
}

pub struct TodoContext {
    pub list: TodoList,
}

pub struct ListOptions {
    pub json: bool,
    pub quiet: bool,
}

pub struct ShowOptions {
    pub id: u64,
    pub json: bool,
    pub quiet: bool,
}

pub struct CompletedOptions {
    pub window: Option<(String, String)>,
    pub json: bool,
    pub quiet: bool,
}

pub struct WithinOptions {
    pub month: String,
    pub year: String,
    pub json: bool,
    pub quiet: bool,
}

pub struct AddOptions {
    pub title: String,
    pub month: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DeleteOptions {
    pub id: u64,
    pub json: bool,
    pub quiet: bool,
}

pub struct SetCompletedOptions {
    pub id: u64,
    pub completed: bool,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub id: u64,
    pub title: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TodoListOutput {
    total: usize,
    todos: Vec<Todo>,
}

#[derive(Serialize)]
struct TodoChangeOutput {
    todo: Todo,
    remaining: usize,
}

pub fn load_context(config: &Config, source: SeedSource) -> Result<TodoContext> {
    let clock = config.clock.clock()?;

    let items = if source.sample {
        seed::sample_items()
    } else {
        match source.seed.or_else(|| config.seed.clone()) {
            Some(path) => seed::load_items(&path)?,
            None => Vec::new(),
        }
    };

    let mut list = TodoList::with_clock(clock);
    list.init(items);
    Ok(TodoContext { list })
}

pub fn run_list(ctx: TodoContext, options: ListOptions) -> Result<()> {
    let todos = TodoManager::new(&ctx.list).get_all_todos();
    emit_list(
        "list",
        "Todos",
        Vec::new(),
        todos,
        options.json,
        options.quiet,
    )
}

pub fn run_show(ctx: TodoContext, options: ShowOptions) -> Result<()> {
    let todo = ctx.list.find_todo_by_id(options.id)?;

    let report = TodoReport::single(format!("Todo #{}", todo.id), &todo);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "show",
        &todo,
        &report,
    )
}

pub fn run_completed(ctx: TodoContext, options: CompletedOptions) -> Result<()> {
    let manager = TodoManager::new(&ctx.list);
    let (todos, filters) = match options.window {
        Some((month, year)) => {
            let todos = manager.get_all_complete_within_time(&month, &year);
            (todos, vec![("Month", month), ("Year", year)])
        }
        None => (manager.get_all_complete(), Vec::new()),
    };
    emit_list(
        "completed",
        "Completed todos",
        filters,
        todos,
        options.json,
        options.quiet,
    )
}

pub fn run_within(ctx: TodoContext, options: WithinOptions) -> Result<()> {
    let todos = TodoManager::new(&ctx.list).get_all_within_time(&options.month, &options.year);
    emit_list(
        "within",
        "Todos within time",
        vec![("Month", options.month), ("Year", options.year)],
        todos,
        options.json,
        options.quiet,
    )
}

pub fn run_add(mut ctx: TodoContext, options: AddOptions) -> Result<()> {
    let data = TodoData {
        title: Some(options.title),
        month: options.month,
        year: options.year,
        description: options.description,
        ..TodoData::default()
    };
    let todo = ctx.list.add(data)?;
    emit_change(
        "add",
        "Todo added",
        todo,
        ctx.list.len(),
        options.json,
        options.quiet,
    )
}

pub fn run_delete(mut ctx: TodoContext, options: DeleteOptions) -> Result<()> {
    let todo = ctx.list.delete(options.id)?;
    emit_change(
        "delete",
        "Todo deleted",
        todo,
        ctx.list.len(),
        options.json,
        options.quiet,
    )
}

pub fn run_set_completed(mut ctx: TodoContext, options: SetCompletedOptions) -> Result<()> {
    let mut patch = TodoData::from(ctx.list.find_todo_by_id(options.id)?);
    patch.completed = Some(options.completed);
    let todo = ctx.list.update(patch)?;

    let (command, header) = if options.completed {
        ("complete", "Todo completed")
    } else {
        ("reopen", "Todo reopened")
    };
    emit_change(
        command,
        header,
        todo,
        ctx.list.len(),
        options.json,
        options.quiet,
    )
}

pub fn run_edit(mut ctx: TodoContext, options: EditOptions) -> Result<()> {
    if options.title.is_none()
        && options.month.is_none()
        && options.year.is_none()
        && options.description.is_none()
    {
        return Err(Error::InvalidArgument(
            "nothing to edit (pass --title, --month, --year or --description)".to_string(),
        ));
    }

    let mut patch = TodoData::from(ctx.list.find_todo_by_id(options.id)?);
    if options.title.is_some() {
        patch.title = options.title;
    }
    if options.month.is_some() {
        patch.month = options.month;
    }
    if options.year.is_some() {
        patch.year = options.year;
    }
    if options.description.is_some() {
        patch.description = options.description;
    }
    let todo = ctx.list.update(patch)?;

    emit_change(
        "edit",
        "Todo updated",
        todo,
        ctx.list.len(),
        options.json,
        options.quiet,
    )
}

fn emit_list(
    command: &str,
    header: &str,
    filters: Vec<(&str, String)>,
    todos: Vec<Todo>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut report = TodoReport::listing(header, &todos);
    for (key, value) in filters {
        report.field(key, value);
    }

    let output = TodoListOutput {
        total: todos.len(),
        todos,
    };

    emit_success(OutputOptions { json, quiet }, command, &output, &report)
}

fn emit_change(
    command: &str,
    header: &str,
    todo: Todo,
    remaining: usize,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut report = TodoReport::single(header, &todo);
    report
        .field("Total", remaining.to_string())
        .note("changes are not written back to the seed file");

    let output = TodoChangeOutput { todo, remaining };

    emit_success(OutputOptions { json, quiet }, command, &output, &report)
}
