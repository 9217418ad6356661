//! Domain tests for tasks and filters.

use crate::task::domain::{Task, TaskId, TasksFilterType};
use rstest::{fixture, rstest};

#[fixture]
fn mixed_tasks() -> Vec<Task> {
    vec![
        Task::new("active one", ""),
        Task::new("done", "").completed(),
        Task::new("active two", "with description"),
    ]
}

#[rstest]
fn new_tasks_are_active_with_unique_ids() {
    let first = Task::new("title", "description");
    let second = Task::new("title", "description");

    assert!(first.is_active());
    assert!(!first.is_completed());
    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
}

#[rstest]
fn completing_keeps_identity_and_fields() {
    let task = Task::with_id(TaskId::from("42"), "Title", "Description");
    let done = task.completed();

    assert_eq!(done.id(), task.id());
    assert_eq!(done.title(), "Title");
    assert_eq!(done.description(), "Description");
    assert!(done.is_completed());
    assert_eq!(done.activated(), task);
}

#[rstest]
#[case("", "", true)]
#[case("title", "", false)]
#[case("", "description", false)]
fn emptiness_requires_both_fields_empty(
    #[case] title: &str,
    #[case] description: &str,
    #[case] expected: bool,
) {
    assert_eq!(Task::new(title, description).is_empty(), expected);
}

#[rstest]
fn title_for_list_falls_back_to_description() {
    assert_eq!(Task::new("", "only description").title_for_list(), "only description");
    assert_eq!(Task::new("title", "description").title_for_list(), "title");
}

#[rstest]
fn active_filter_is_idempotent(mixed_tasks: Vec<Task>) {
    let once = TasksFilterType::Active.apply(&mixed_tasks);
    let twice = TasksFilterType::Active.apply(&once);

    assert_eq!(once.len(), 2);
    assert_eq!(once, twice);
}

#[rstest]
#[case(TasksFilterType::All, 3)]
#[case(TasksFilterType::Active, 2)]
#[case(TasksFilterType::Completed, 1)]
fn filters_select_expected_tasks(
    mixed_tasks: Vec<Task>,
    #[case] filter: TasksFilterType,
    #[case] expected: usize,
) {
    let filtered = filter.apply(&mixed_tasks);

    assert_eq!(filtered.len(), expected);
    assert!(filtered.iter().all(|task| filter.matches(task)));
}

#[rstest]
fn tasks_round_trip_through_json() {
    let task = Task::new("Serialise", "me").completed();
    let json = serde_json::to_string(&task).expect("serialise task");
    let decoded: Task = serde_json::from_str(&json).expect("deserialise task");
    assert_eq!(decoded, task);
}
