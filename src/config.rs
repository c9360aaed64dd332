//! Auth configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so deploy-specific
//! values (API base, cookie name) are baked in via `option_env!` when the
//! client is compiled. Unset or unsubstituted values fall back to defaults
//! matching the backend's stock deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::login_url::build_login_url_with_base;

pub const DEFAULT_COOKIE_NAME: &str = "some_api";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_LOGIN_PATH: &str = "/login/";
pub const DEFAULT_API_BASE: &str = "/api/1.0/";

/// Marker left behind when the build pipeline did not substitute a value.
const UNSUBSTITUTED_PREFIX: &str = "@@";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Name of the cookie carrying the API key.
    pub cookie_name: String,
    /// Path attribute the server sets on the cookie; clearing must match it.
    pub cookie_path: String,
    /// Server-rendered login page.
    pub login_path: String,
    /// Prefix prepended to every API resource path.
    pub api_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            cookie_path: DEFAULT_COOKIE_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `KEYGATE_API_BASE_URI`: API prefix, default `/api/1.0/`
    /// - `KEYGATE_API_KEY_COOKIE`: credential cookie name, default `some_api`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("KEYGATE_API_BASE_URI"), option_env!("KEYGATE_API_KEY_COOKIE"))
    }

    fn from_values(api_base: Option<&str>, cookie_name: Option<&str>) -> Self {
        Self {
            cookie_name: non_placeholder(cookie_name).unwrap_or(DEFAULT_COOKIE_NAME).to_owned(),
            api_base: resolve_api_base(api_base),
            ..Self::default()
        }
    }

    /// Login URL under the configured login path.
    ///
    /// Same `next=` rules as [`crate::util::login_url::build_login_url`].
    pub fn login_url(&self, current_path: Option<&str>, current_hash: Option<&str>, include_redirect: bool) -> String {
        build_login_url_with_base(&self.login_path, current_path, current_hash, include_redirect)
    }
}

pub(crate) fn resolve_api_base(raw: Option<&str>) -> String {
    non_placeholder(raw).unwrap_or(DEFAULT_API_BASE).to_owned()
}

fn non_placeholder(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !value.starts_with(UNSUBSTITUTED_PREFIX))
}
