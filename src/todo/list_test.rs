use super::{TodoError, TodoList};

#[test]
fn new_list_is_empty() {
    let list = TodoList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.remaining(), 0);
}

#[test]
fn add_trims_title_and_assigns_increasing_ids() {
    let mut list = TodoList::new();
    let first = list.add("  buy milk ").unwrap().id;
    let second = list.add("walk dog").unwrap().id;

    assert!(second > first);
    assert_eq!(list.items()[0].title, "buy milk");
    assert!(!list.items()[0].completed);
}

#[test]
fn add_rejects_blank_title() {
    let mut list = TodoList::new();
    assert_eq!(list.add("   ").unwrap_err(), TodoError::EmptyTitle);
    assert!(list.is_empty());
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut list = TodoList::new();
    let a = list.add("a").unwrap().id;
    list.remove(a).unwrap();
    let b = list.add("b").unwrap().id;
    assert!(b > a);
}

#[test]
fn toggle_flips_completion() {
    let mut list = TodoList::new();
    let id = list.add("task").unwrap().id;

    assert!(list.toggle(id).unwrap());
    assert_eq!(list.remaining(), 0);
    assert!(!list.toggle(id).unwrap());
    assert_eq!(list.remaining(), 1);
}

#[test]
fn unknown_ids_are_reported() {
    let mut list = TodoList::new();
    assert_eq!(list.toggle(42), Err(TodoError::NotFound(42)));
    assert_eq!(list.remove(42), Err(TodoError::NotFound(42)));
}

#[test]
fn clear_completed_keeps_open_items_in_order() {
    let mut list = TodoList::new();
    let a = list.add("a").unwrap().id;
    list.add("b").unwrap();
    let c = list.add("c").unwrap().id;
    list.add("d").unwrap();
    list.toggle(a).unwrap();
    list.toggle(c).unwrap();

    assert_eq!(list.clear_completed(), 2);
    let titles: Vec<_> = list.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "d"]);
}

#[test]
fn persisted_list_keeps_id_counter() {
    let mut list = TodoList::new();
    let a = list.add("a").unwrap().id;
    list.remove(a).unwrap();

    let json = serde_json::to_string(&list).unwrap();
    let mut restored: TodoList = serde_json::from_str(&json).unwrap();
    let b = restored.add("b").unwrap().id;
    assert!(b > a);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(TodoError::NotFound(7).to_string(), "Todo not found: 7");
    assert_eq!(
        TodoError::EmptyTitle.to_string(),
        "Todo title must not be empty"
    );
}

#[test]
fn restored_list_never_reissues_stored_ids() {
    let json = r#"{"items":[{"id":1,"title":"old","completed":false}],"next_id":1}"#;
    let mut list: TodoList = serde_json::from_str(json).unwrap();

    let new_id = list.add("new").unwrap().id;
    assert_eq!(new_id, 2);

    assert!(list.toggle(new_id).unwrap());
    let flags: Vec<_> = list.items().iter().map(|i| i.completed).collect();
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn restored_list_without_counter_starts_after_largest_id() {
    let json = r#"{"items":[{"id":3,"title":"a"},{"id":9,"title":"b"}]}"#;
    let mut list: TodoList = serde_json::from_str(json).unwrap();
    assert_eq!(list.add("c").unwrap().id, 10);
}

#[test]
fn restored_list_keeps_larger_counter() {
    let json = r#"{"items":[{"id":2,"title":"a"}],"next_id":50}"#;
    let mut list: TodoList = serde_json::from_str(json).unwrap();
    assert_eq!(list.add("b").unwrap().id, 50);
}

#[test]
fn restore_rejects_duplicate_ids() {
    let json = r#"{"items":[{"id":1,"title":"a"},{"id":1,"title":"b"}],"next_id":2}"#;
    let err = serde_json::from_str::<TodoList>(json).unwrap_err();
    assert!(err.to_string().contains("Stored todo id 1"));
}

#[test]
fn restore_rejects_out_of_order_ids() {
    let json = r#"{"items":[{"id":5,"title":"a"},{"id":2,"title":"b"}],"next_id":6}"#;
    assert!(serde_json::from_str::<TodoList>(json).is_err());
}

#[test]
fn restore_rejects_blank_titles() {
    let json = r#"{"items":[{"id":1,"title":"   "}],"next_id":2}"#;
    let err = serde_json::from_str::<TodoList>(json).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn restore_trims_titles() {
    let json = r#"{"items":[{"id":1,"title":"  a  "}],"next_id":2}"#;
    let list: TodoList = serde_json::from_str(json).unwrap();
    assert_eq!(list.items()[0].title, "a");
}

#[test]
fn restore_rejects_max_id() {
    let json = format!(r#"{{"items":[{{"id":{},"title":"a"}}]}}"#, u64::MAX);
    assert!(serde_json::from_str::<TodoList>(&json).is_err());
}

#[test]
fn add_reports_exhausted_ids_instead_of_overflowing() {
    let json = format!(r#"{{"items":[],"next_id":{}}}"#, u64::MAX);
    let mut list: TodoList = serde_json::from_str(&json).unwrap();

    assert_eq!(list.add("x").unwrap_err(), TodoError::IdsExhausted);
    assert!(list.is_empty());
}
