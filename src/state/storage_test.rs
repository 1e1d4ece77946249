use super::*;

#[test]
fn memory_storage_clones_share_slots() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.set(TOKEN_KEY, "tok1");
    assert_eq!(view.get(TOKEN_KEY).as_deref(), Some("tok1"));
    view.remove(TOKEN_KEY);
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.is_empty());
}

#[test]
fn flag_round_trips_through_storage_encoding() {
    assert_eq!(encode_flag(true), "true");
    assert_eq!(encode_flag(false), "false");
    assert!(decode_flag(Some("true")));
    assert!(!decode_flag(Some("false")));
}

#[test]
fn decode_flag_rejects_missing_and_unexpected_values() {
    assert!(!decode_flag(None));
    assert!(!decode_flag(Some("TRUE")));
    assert!(!decode_flag(Some("1")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set(TOKEN_KEY, "tok1");
    assert!(storage.get(TOKEN_KEY).is_none());
}
