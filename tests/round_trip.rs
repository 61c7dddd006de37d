use jot::io::persistence::{TODOS_KEY, load_todos, save_todos};
use jot::io::store::{FileStore, KeyValueStore};
use jot::model::Todo;
use jot::screen::TodoScreen;
use pretty_assertions::assert_eq;

fn sample() -> Vec<Todo> {
    vec![
        Todo::new("3f1c", "Buy milk"),
        Todo::new("0a9e", "Walk dog"),
        Todo::new("77b2", ""),
        Todo::new("c4d0", "Ünïcödé \"quotes\" and 你好"),
    ]
}

#[test]
fn round_trip_through_file_store() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("store.json");

    let mut store = FileStore::open(&path);
    save_todos(&mut store, &sample()).unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(load_todos(&reopened).unwrap(), Some(sample()));
}

#[test]
fn screen_reload_sees_previous_session() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("store.json");

    let mut first = TodoScreen::load(FileStore::open(&path));
    first.set_new_todo("Buy milk");
    let a = first.add().unwrap().unwrap();
    first.set_new_todo("Walk dog");
    let b = first.add().unwrap().unwrap();
    first.start_edit(&a, "Buy milk");
    first.set_edit_buffer("Buy oat milk");
    first.commit_edit().unwrap();
    first.set_search_query("dog");

    let second = TodoScreen::load(FileStore::open(&path));
    assert_eq!(
        second.todos(),
        &[Todo::new(a, "Buy oat milk"), Todo::new(b, "Walk dog")]
    );
    assert_eq!(second.ui.search_query, "");
}

#[test]
fn stored_value_is_a_plain_json_array() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path().join("store.json"));
    save_todos(&mut store, &[Todo::new("1", "Buy milk")]).unwrap();

    let raw = store.get(TODOS_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"[{"id":"1","text":"Buy milk"}]"#);
}

#[test]
fn add_recovers_from_corrupt_store_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("store.json");
    std::fs::write(&path, "not json {{{").unwrap();

    let mut screen = TodoScreen::load(FileStore::open(&path));
    assert!(screen.todos().is_empty());
    let id = screen.add_text("Buy milk").unwrap().unwrap();

    let reopened = TodoScreen::load(FileStore::open(&path));
    assert_eq!(reopened.todos(), &[Todo::new(id, "Buy milk")]);
}
