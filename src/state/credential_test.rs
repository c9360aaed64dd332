use super::*;

// =============================================================
// Cookie string helpers
// =============================================================

#[test]
fn cookie_value_finds_named_cookie() {
    assert_eq!(cookie_value("csrftoken=abc; some_api=k-123", "some_api"), Some("k-123".to_owned()));
    assert_eq!(cookie_value("some_api=k-123", "some_api"), Some("k-123".to_owned()));
}

#[test]
fn cookie_value_missing_or_empty_is_none() {
    assert_eq!(cookie_value("", "some_api"), None);
    assert_eq!(cookie_value("csrftoken=abc", "some_api"), None);
    assert_eq!(cookie_value("some_api=; csrftoken=abc", "some_api"), None);
}

#[test]
fn cookie_value_does_not_match_name_prefix() {
    assert_eq!(cookie_value("some_api_old=stale", "some_api"), None);
}

#[test]
fn cookie_value_keeps_equals_inside_value() {
    assert_eq!(cookie_value("some_api=a=b", "some_api"), Some("a=b".to_owned()));
}

#[test]
fn expired_cookie_sets_path_and_epoch_expiry() {
    assert_eq!(
        expired_cookie("some_api", "/"),
        "some_api=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
}

// =============================================================
// MemoryCredentialStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryCredentialStore::new();
    assert_eq!(store.get(), None);
    assert!(!store.has());
}

#[test]
fn memory_store_reports_credential() {
    let store = MemoryCredentialStore::with_credential("k");
    assert_eq!(store.get().as_deref(), Some("k"));
    assert!(store.has());
}

#[test]
fn memory_store_empty_value_is_absent() {
    let store = MemoryCredentialStore::with_credential("");
    assert!(!store.has());
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryCredentialStore::with_credential("k");
    store.clear();
    store.clear();
    assert!(!store.has());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cookie_store_is_empty_outside_browser() {
    let store = CookieCredentialStore::new(&AuthConfig::default());
    assert!(!store.has());
    store.clear();
}
