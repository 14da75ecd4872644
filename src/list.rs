//! The authoritative todo collection.
//!
//! `TodoList` owns its todos and hands out clones only. Identifiers are
//! assigned here, start at 1 and grow by one per successful `add` until the
//! next `init`.

use tracing::{debug, trace};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::todo::{validate, Todo, TodoData, NEW_TODO_FIELDS, TODO_FIELDS};

const FIRST_ID: u64 = 1;

#[derive(Debug, Clone)]
pub struct TodoList {
    todos: Vec<Todo>,
    next_id: u64,
    clock: Clock,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::with_clock(Clock::default())
    }

    /// Empty list whose month/year defaults come from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            todos: Vec::new(),
            next_id: FIRST_ID,
            clock,
        }
    }

    /// Reset the list and load `items` in order.
    ///
    /// Items without a title are skipped; the returned list may be shorter
    /// than the input.
    pub fn init<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = TodoData>,
    {
        self.todos.clear();
        self.next_id = FIRST_ID;

        let mut skipped = 0usize;
        for item in items {
            if self.add(item).is_err() {
                skipped += 1;
            }
        }
        debug!(loaded = self.todos.len(), skipped, "todo list initialized");
        self
    }

    pub fn add(&mut self, item: TodoData) -> Result<Todo> {
        validate(&item, NEW_TODO_FIELDS)?;

        let todo = Todo::create_on(&item, self.next_id, self.clock.today());
        self.todos.push(todo.clone());
        self.next_id += 1;
        trace!(id = todo.id, title = %todo.title, "todo added");
        Ok(todo)
    }

    pub fn delete(&mut self, id: impl Into<Option<u64>>) -> Result<Todo> {
        let idx = self.find_todo_idx(id.into()).ok_or(Error::InvalidId)?;
        let removed = self.todos.remove(idx);
        trace!(id = removed.id, "todo deleted");
        Ok(removed)
    }

    /// Replace a stored todo with a full payload.
    ///
    /// `patch` must carry title, month, year, id and completed; the usual
    /// source is a todo read out of this list, modified and passed back.
    /// Partial patches are rejected.
    pub fn update(&mut self, patch: TodoData) -> Result<Todo> {
        validate(&patch, TODO_FIELDS)?;
        let idx = self.find_todo_idx(patch.id).ok_or(Error::InvalidInput)?;

        let todo = &mut self.todos[idx];
        todo.apply(&patch);
        trace!(id = todo.id, completed = todo.completed, "todo updated");
        Ok(todo.clone())
    }

    pub fn find_todo_by_id(&self, id: impl Into<Option<u64>>) -> Result<Todo> {
        self.find_todo_idx(id.into())
            .map(|idx| self.todos[idx].clone())
            .ok_or(Error::InvalidId)
    }

    pub fn get_all_todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Id the next successful `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn find_todo_idx(&self, id: Option<u64>) -> Option<usize> {
        let id = id?;
        self.todos.iter().position(|todo| todo.id == id)
    }
}
