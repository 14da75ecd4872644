use todos::output::{todo_line, TodoReport};
use todos::Todo;

fn buy_apples() -> Todo {
    Todo {
        id: 2,
        title: "Buy Apples".to_string(),
        month: "3".to_string(),
        year: "2017".to_string(),
        description: "An apple a day".to_string(),
        completed: true,
    }
}

#[test]
fn listing_counts_and_lists_todos() {
    let plain = Todo {
        id: 1,
        title: "Buy Milk".to_string(),
        month: "1".to_string(),
        year: "2017".to_string(),
        description: String::new(),
        completed: false,
    };
    let mut report = TodoReport::listing("Todos within time", &[plain, buy_apples()]);
    report.field("Month", "1");

    assert_eq!(
        report.render(),
        "Todos within time\n  Total: 2\n  Month: 1\n\n  [ ] #1 1/2017 Buy Milk\n  [x] #2 3/2017 Buy Apples (An apple a day)"
    );
}

#[test]
fn empty_listing_has_no_todo_block() {
    let report = TodoReport::listing("Completed todos", &[]);
    assert_eq!(report.render(), "Completed todos\n  Total: 0");
}

#[test]
fn single_shows_each_field_and_note() {
    let mut report = TodoReport::single("Todo deleted", &buy_apples());
    report
        .field("Total", "4")
        .note("changes are not written back to the seed file");

    let rendered = report.render();
    assert!(rendered.starts_with("Todo deleted\n  ID: 2\n  Title: Buy Apples"));
    assert!(rendered.contains("\n  Description: An apple a day"));
    assert!(rendered.contains("\n  Completed: true\n  Total: 4"));
    assert!(rendered.ends_with("\n\nnote: changes are not written back to the seed file"));
}

#[test]
fn single_skips_empty_description() {
    let todo = Todo {
        description: String::new(),
        ..buy_apples()
    };
    let rendered = TodoReport::single("Todo #2", &todo).render();
    assert!(!rendered.contains("Description"));
}

#[test]
fn bare_report_is_just_the_header() {
    assert_eq!(TodoReport::new("Todos").render(), "Todos");
}

#[test]
fn todo_line_marks_completion_and_description() {
    let todo = buy_apples();
    assert_eq!(todo_line(&todo), "[x] #2 3/2017 Buy Apples (An apple a day)");

    let plain = Todo {
        description: String::new(),
        completed: false,
        ..todo
    };
    assert_eq!(todo_line(&plain), "[ ] #2 3/2017 Buy Apples");
}
