//! Login URL construction with a post-login `next=` target.
//!
//! The backend login view redirects to `next` after a successful sign-in, so
//! the current pathname and SPA hash route are folded into that parameter.
//! `#` is written as `%23`; a raw `#` would end the query string and the hash
//! route would never reach the server.

#[cfg(test)]
#[path = "login_url_test.rs"]
mod login_url_test;

/// Fixed server-side login page.
pub const LOGIN_PATH: &str = "/login/";

const ROOT_PATH: &str = "/";
const ROOT_HASH_ROUTE: &str = "#/";
const ENCODED_HASH: &str = "%23";

/// Build the login URL, optionally carrying the current location as `next`.
///
/// Root values (`/` pathname, `#/` hash route) are not useful return targets
/// and are left out. When neither part is useful, or `include_redirect` is
/// false, the bare login path is returned.
pub fn build_login_url(current_path: Option<&str>, current_hash: Option<&str>, include_redirect: bool) -> String {
    build_login_url_with_base(LOGIN_PATH, current_path, current_hash, include_redirect)
}

pub(crate) fn build_login_url_with_base(
    base: &str,
    current_path: Option<&str>,
    current_hash: Option<&str>,
    include_redirect: bool,
) -> String {
    let path = useful_path(current_path);
    let hash = useful_hash(current_hash);
    if !include_redirect || (path.is_none() && hash.is_none()) {
        return base.to_owned();
    }
    format!("{base}?next={}{}", path.unwrap_or_default(), hash.unwrap_or_default())
}

fn useful_path(path: Option<&str>) -> Option<&str> {
    path.filter(|p| !p.is_empty() && *p != ROOT_PATH)
}

fn useful_hash(hash: Option<&str>) -> Option<String> {
    let hash = hash.filter(|h| !h.is_empty() && *h != ROOT_HASH_ROUTE)?;
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    Some(format!("{ENCODED_HASH}{fragment}"))
}
