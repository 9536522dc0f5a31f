use std::fs;
use std::path::PathBuf;

use super::*;
use auth::{TOKEN_KEY, USER_KEY};

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("auth-cli-store-{}.json", uuid::Uuid::new_v4()))
}

struct Cleanup(PathBuf);

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn missing_file_reads_as_empty() {
    let path = temp_path();
    let store = FileStorage::new(&path);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!path.exists());
}

#[test]
fn values_survive_a_new_handle() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());

    FileStorage::new(&path).set(TOKEN_KEY, "abc");
    FileStorage::new(&path).set(USER_KEY, r#"{"id":1}"#);

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(reopened.get(USER_KEY).as_deref(), Some(r#"{"id":1}"#));
}

#[test]
fn remove_deletes_only_that_key() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());
    let store = FileStorage::new(&path);
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, "null");

    store.remove(TOKEN_KEY);
    store.remove(TOKEN_KEY);

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY).as_deref(), Some("null"));
}

#[test]
fn garbage_file_reads_as_empty_and_is_replaced_on_write() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());
    fs::write(&path, "not json").unwrap();
    let store = FileStorage::new(&path);

    assert_eq!(store.get(TOKEN_KEY), None);
    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
}
