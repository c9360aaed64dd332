use super::*;

#[test]
fn bare_login_url_without_location() {
    assert_eq!(build_login_url(None, None, true), "/login/");
}

#[test]
fn next_carries_pathname() {
    assert_eq!(build_login_url(Some("/a/b"), None, true), "/login/?next=/a/b");
    assert_eq!(
        build_login_url(Some("/some-path/index.html"), None, true),
        "/login/?next=/some-path/index.html"
    );
}

#[test]
fn next_escapes_hash_route() {
    assert_eq!(build_login_url(Some("/a/b"), Some("#/c"), true), "/login/?next=/a/b%23/c");
    assert_eq!(
        build_login_url(Some("/some-path/index.html"), Some("#/some-route"), true),
        "/login/?next=/some-path/index.html%23/some-route"
    );
}

#[test]
fn redirect_suppressed_when_not_requested() {
    assert_eq!(build_login_url(Some("/a/b"), Some("#/c"), false), "/login/");
}

#[test]
fn root_path_and_root_hash_route_are_not_targets() {
    assert_eq!(build_login_url(Some("/"), Some("#/"), true), "/login/");
    assert_eq!(build_login_url(Some("/"), None, true), "/login/");
}

#[test]
fn hash_without_pathname_yields_hash_only_target() {
    assert_eq!(build_login_url(None, Some("#/reports"), true), "/login/?next=%23/reports");
    assert_eq!(build_login_url(Some("/"), Some("#/reports"), true), "/login/?next=%23/reports");
}

#[test]
fn root_hash_route_dropped_but_pathname_kept() {
    assert_eq!(build_login_url(Some("/app/"), Some("#/"), true), "/login/?next=/app/");
}

#[test]
fn empty_strings_behave_like_absent_values() {
    assert_eq!(build_login_url(Some(""), Some(""), true), "/login/");
}

#[test]
fn output_is_deterministic() {
    let first = build_login_url(Some("/x"), Some("#/y"), true);
    let second = build_login_url(Some("/x"), Some("#/y"), true);
    assert_eq!(first, second);
}
