use crate::RememberedEmailStore;

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> RememberedEmailStore {
    RememberedEmailStore::new(temp.path().join("remembered_email.json"))
}

#[test]
fn given_no_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let result = store.load();

    assert_that!(result, ok(none()));
}

#[test]
fn given_saved_email_when_load_then_same_email() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    // When
    store.save("user@example.com").unwrap();
    let loaded = store.load().unwrap();

    // Then
    assert_that!(
        loaded.as_ref().map(|r| r.email.as_str()),
        some(eq("user@example.com"))
    );
}

#[test]
fn given_second_save_when_load_then_latest_wins() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save("first@example.com").unwrap();
    store.save("second@example.com").unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_that!(loaded.email.as_str(), eq("second@example.com"));
}

#[test]
fn given_save_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save("user@example.com").unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_that!(entries.len(), eq(1));
}

#[test]
fn given_missing_parent_dir_when_save_then_created() {
    let temp = TempDir::new().unwrap();
    let store = RememberedEmailStore::new(temp.path().join("nested/dir/email.json"));

    let result = store.save("user@example.com");

    assert_that!(result, ok(anything()));
    assert!(store.path().exists());
}

#[test]
fn given_corrupted_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "{ not json").unwrap();

    let result = store.load();

    assert_that!(result, ok(none()));
}

#[test]
fn given_saved_email_when_clear_twice_then_true_then_false() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save("user@example.com").unwrap();

    // When
    let first = store.clear().unwrap();
    let second = store.clear().unwrap();

    // Then
    assert_that!(first, eq(true));
    assert_that!(second, eq(false));
    assert_that!(store.load(), ok(none()));
}
