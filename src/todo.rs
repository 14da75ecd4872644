//! Todo records and the raw data they are built from.
//!
//! A [`Todo`] is only ever constructed by a [`crate::list::TodoList`]; callers
//! hand in [`TodoData`] and get clones back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{Error, Result};

/// A single task scoped to a month and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub month: String,
    pub year: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Build a todo, defaulting month/year from the local calendar date.
    pub fn create(data: &TodoData, id: u64) -> Self {
        Self::create_on(data, id, Clock::Local.today())
    }

    /// Build a todo, defaulting month/year from `today`.
    ///
    /// The caller validates `data` first; a missing title becomes empty.
    pub fn create_on(data: &TodoData, id: u64, today: NaiveDate) -> Self {
        Self {
            id,
            title: data.title.clone().unwrap_or_default(),
            month: non_empty(data.month.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| today.month().to_string()),
            year: non_empty(data.year.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| today.year().to_string()),
            description: data.description.clone().unwrap_or_default(),
            completed: false,
        }
    }

    /// Textual match on month and year. `"01"` does not match `"1"`.
    pub fn is_within_month_year(&self, month: &str, year: &str) -> bool {
        self.month == month && self.year == year
    }

    /// Overwrite every present field of `patch` except the id.
    pub(crate) fn apply(&mut self, patch: &TodoData) {
        if let Some(title) = non_empty(patch.title.as_deref()) {
            self.title = title.to_string();
        }
        if let Some(month) = non_empty(patch.month.as_deref()) {
            self.month = month.to_string();
        }
        if let Some(year) = non_empty(patch.year.as_deref()) {
            self.year = year.to_string();
        }
        if let Some(description) = patch.description.as_ref() {
            self.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Raw task data: creation input and full-update payload.
///
/// Every field is optional so that seed files and update payloads can be
/// checked for presence with [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_present(&self, field: TodoField) -> bool {
        match field {
            TodoField::Id => self.id.is_some(),
            TodoField::Title => non_empty(self.title.as_deref()).is_some(),
            TodoField::Month => non_empty(self.month.as_deref()).is_some(),
            TodoField::Year => non_empty(self.year.as_deref()).is_some(),
            TodoField::Description => non_empty(self.description.as_deref()).is_some(),
            TodoField::Completed => self.completed.is_some(),
        }
    }
}

impl From<Todo> for TodoData {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: Some(todo.title),
            month: Some(todo.month),
            year: Some(todo.year),
            description: Some(todo.description),
            completed: Some(todo.completed),
        }
    }
}

impl From<&Todo> for TodoData {
    fn from(todo: &Todo) -> Self {
        todo.clone().into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Id,
    Title,
    Month,
    Year,
    Description,
    Completed,
}

/// Fields a creation payload must carry.
pub const NEW_TODO_FIELDS: &[TodoField] = &[TodoField::Title];

/// Fields a full-update payload must carry.
pub const TODO_FIELDS: &[TodoField] = &[
    TodoField::Title,
    TodoField::Month,
    TodoField::Year,
    TodoField::Id,
    TodoField::Completed,
];

/// Check that every `required` field is present. `Some(false)` counts as
/// present; `None` and `Some("")` do not.
pub fn validate(data: &TodoData, required: &[TodoField]) -> Result<()> {
    if required.iter().all(|field| data.is_present(*field)) {
        Ok(())
    } else {
        Err(Error::InvalidInput)
    }
}

pub fn is_valid_new_todo(data: &TodoData) -> bool {
    validate(data, NEW_TODO_FIELDS).is_ok()
}

pub fn is_valid_todo(data: &TodoData) -> bool {
    validate(data, TODO_FIELDS).is_ok()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")
    }

    #[test]
    fn create_keeps_supplied_fields() {
        let data = TodoData::new("Buy Milk")
            .month("1")
            .year("2017")
            .description("Milk for baby");
        let todo = Todo::create_on(&data, 1, jan_2024());
        assert_eq!(
            todo,
            Todo {
                id: 1,
                title: "Buy Milk".to_string(),
                month: "1".to_string(),
                year: "2017".to_string(),
                description: "Milk for baby".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn create_defaults_empty_and_missing_time_fields() {
        let today = NaiveDate::from_ymd_opt(2023, 11, 2).expect("date");
        let empty = TodoData::new("Buy Cookies").month("").year("");
        let todo = Todo::create_on(&empty, 5, today);
        assert_eq!(todo.month, "11");
        assert_eq!(todo.year, "2023");
        assert_eq!(todo.description, "");

        let missing = TodoData::new("Buy Veggies");
        let todo = Todo::create_on(&missing, 6, today);
        assert_eq!(todo.month, "11");
        assert_eq!(todo.year, "2023");
    }

    #[test]
    fn create_uses_local_calendar() {
        let today = Clock::Local.today();
        let todo = Todo::create(&TodoData::new("Buy Veggies"), 4);
        assert_eq!(todo.id, 4);
        assert_eq!(todo.month, today.month().to_string());
        assert_eq!(todo.year, today.year().to_string());
    }

    #[test]
    fn create_ignores_caller_id_and_completed() {
        let mut data = TodoData::new("Sneaky").completed(true);
        data.id = Some(99);
        let todo = Todo::create_on(&data, 3, jan_2024());
        assert_eq!(todo.id, 3);
        assert!(!todo.completed);
    }

    #[test]
    fn month_year_match_is_textual() {
        let todo = Todo::create_on(&TodoData::new("t").month("1").year("2017"), 1, jan_2024());
        assert!(todo.is_within_month_year("1", "2017"));
        assert!(!todo.is_within_month_year("01", "2017"));
        assert!(!todo.is_within_month_year("1", "2016"));
    }

    #[test]
    fn new_todo_requires_title() {
        assert!(is_valid_new_todo(&TodoData::new("x")));
        assert!(!is_valid_new_todo(&TodoData::new("")));
        assert!(!is_valid_new_todo(&TodoData::default()));
    }

    #[test]
    fn full_todo_requires_every_field_but_description() {
        let todo = Todo::create_on(&TodoData::new("Buy Apples").year("2017"), 2, jan_2024());
        let mut data = TodoData::from(&todo);
        data.description = None;
        assert!(is_valid_todo(&data));

        let mut data = TodoData::from(&todo);
        data.completed = None;
        assert!(!is_valid_todo(&data));

        let mut data = TodoData::from(&todo);
        data.title = Some(String::new());
        assert!(!is_valid_todo(&data));

        assert!(!is_valid_todo(&TodoData::new("partial")));
    }

    #[test]
    fn false_completed_is_present() {
        let data = TodoData::default().completed(false);
        assert!(data.is_present(TodoField::Completed));
    }

    #[test]
    fn apply_overwrites_all_but_id() {
        let mut todo = Todo::create_on(&TodoData::new("a").month("1").year("2017"), 1, jan_2024());
        let mut patch = TodoData::new("b")
            .month("2")
            .year("2018")
            .description("")
            .completed(true);
        patch.id = Some(40);
        todo.apply(&patch);
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "b");
        assert_eq!(todo.month, "2");
        assert_eq!(todo.year, "2018");
        assert_eq!(todo.description, "");
        assert!(todo.completed);
    }

    #[test]
    fn data_deserializes_with_missing_fields() {
        let data: TodoData =
            serde_json::from_str(r#"{"title":"Buy chocolate","month":"1","year":""}"#)
                .expect("parse");
        assert_eq!(data.title.as_deref(), Some("Buy chocolate"));
        assert_eq!(data.year.as_deref(), Some(""));
        assert!(data.description.is_none());
        assert!(data.id.is_none());
    }
}
