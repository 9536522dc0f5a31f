use super::*;

#[test]
fn empty_store_returns_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(store.is_empty());
}

#[test]
fn set_then_get_returns_value() {
    let store = MemoryStorage::new();
    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn set_overwrites_previous_value() {
    let store = MemoryStorage::new();
    store.set(USER_KEY, "1");
    store.set(USER_KEY, "2");
    assert_eq!(store.get(USER_KEY).as_deref(), Some("2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_is_idempotent() {
    let store = MemoryStorage::with_entries([(TOKEN_KEY, "abc"), ("other", "x")]);
    store.remove(TOKEN_KEY);
    store.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get("other").as_deref(), Some("x"));
}
