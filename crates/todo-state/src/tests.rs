//! End-to-end Tests
//!
//! Drives the seed list through search, add and toggle the way the UI does.

use crate::{add_todo, filter_todos, toggle_todo, AppConfig, TodoError, TodoKey, TodoStats};

fn texts(todos: &[crate::Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_search_add_toggle_scenario() {
    let config = AppConfig::default();
    let mut todos = config.seed.clone();

    let view = filter_todos(&todos, "buy");
    assert_eq!(texts(&view), vec!["Buy Bread", "Buy Milk", "Buy Flowers"]);

    let err = add_todo(&mut todos, "buy bread", &config.rules).unwrap_err();
    assert!(matches!(err, TodoError::AlreadyExists(_)));
    assert_eq!(todos.len(), 4);

    let flipped = toggle_todo(&mut todos, &TodoKey::from("Buy Milk"));
    assert_eq!(flipped, 1);
    assert!(todos[2].is_done);
    assert!(todos[0].is_done);
    assert!(!todos[1].is_done);
    assert!(!todos[3].is_done);
    assert_eq!(texts(&todos), vec!["Cook Supper", "Buy Bread", "Buy Milk", "Buy Flowers"]);
}

#[test]
fn test_view_follows_collection_changes() {
    let config = AppConfig::default();
    let mut todos = config.seed.clone();

    add_todo(&mut todos, "Buy Eggs", &config.rules).unwrap();
    let key = {
        let view = filter_todos(&todos, "buy");
        assert_eq!(texts(&view), vec!["Buy Bread", "Buy Milk", "Buy Flowers", "Buy Eggs"]);
        view[1].key()
    };

    // Toggling from the filtered view targets the same entry in the collection
    toggle_todo(&mut todos, &key);
    let view = filter_todos(&todos, "MILK");
    assert_eq!(view.len(), 1);
    assert!(view[0].is_done);

    let stats = TodoStats::collect(&todos, &view);
    assert_eq!(stats, TodoStats { total: 5, done: 2, visible: 1 });
}

#[test]
fn test_keys_stay_unique() {
    let config = AppConfig::default();
    let mut todos = config.seed.clone();

    let accepted: Vec<bool> = ["Buy Eggs", "BUY EGGS", "buy eggs", "Cook supper", "Read Book"]
        .into_iter()
        .map(|text| add_todo(&mut todos, text, &config.rules).is_ok())
        .collect();
    assert_eq!(accepted, vec![true, false, false, false, true]);

    let mut keys: Vec<TodoKey> = todos.iter().map(|t| t.key()).collect();
    let len = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), len);
    assert_eq!(len, 6);
}
