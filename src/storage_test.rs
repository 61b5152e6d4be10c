use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    assert!(storage.get(ACCESS_TOKEN_KEY).is_none());

    storage.set(ACCESS_TOKEN_KEY, "tok123");
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok123"));

    storage.remove(ACCESS_TOKEN_KEY);
    assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let alias = storage.clone();
    alias.set(USER_KEY, "{}");
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_a_browser() {
    let storage = BrowserStorage;
    storage.set(REFRESH_TOKEN_KEY, "ref456");
    assert!(storage.get(REFRESH_TOKEN_KEY).is_none());
    storage.remove(REFRESH_TOKEN_KEY);
}
