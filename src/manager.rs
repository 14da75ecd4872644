//! Read-only queries over a [`TodoList`].

use crate::list::TodoList;
use crate::todo::Todo;

/// Derived views over a borrowed list. Every call recomputes from the
/// list's current contents.
#[derive(Debug, Clone, Copy)]
pub struct TodoManager<'a> {
    list: &'a TodoList,
}

impl<'a> TodoManager<'a> {
    pub fn new(list: &'a TodoList) -> Self {
        Self { list }
    }

    pub fn get_all_todos(&self) -> Vec<Todo> {
        self.list.get_all_todos()
    }

    pub fn get_all_complete(&self) -> Vec<Todo> {
        self.filtered(|todo| todo.completed)
    }

    pub fn get_all_within_time(&self, month: &str, year: &str) -> Vec<Todo> {
        self.filtered(|todo| todo.is_within_month_year(month, year))
    }

    pub fn get_all_complete_within_time(&self, month: &str, year: &str) -> Vec<Todo> {
        self.filtered(|todo| todo.completed && todo.is_within_month_year(month, year))
    }

    fn filtered(&self, keep: impl Fn(&Todo) -> bool) -> Vec<Todo> {
        let mut todos = self.list.get_all_todos();
        todos.retain(keep);
        todos
    }
}
