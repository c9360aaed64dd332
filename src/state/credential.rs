//! API key credential held in a browser cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sets the API key cookie at login. Its presence is the only
//! "logged in" signal on the client; nothing here validates or caches it, and
//! every query re-reads the cookie jar.
//!
//! Clearing writes an empty, already-expired cookie with the same `path` the
//! server used. Browsers key cookies by name + path, so a delete without the
//! matching path leaves the server's cookie in place without any error.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::cell::RefCell;

use crate::config::AuthConfig;

const EXPIRED_AT: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Read/clear access to the stored credential.
pub trait CredentialStore {
    /// The credential, if the cookie exists and is non-empty.
    fn get(&self) -> Option<String>;

    /// Remove the credential. Repeated calls are harmless.
    fn clear(&self);

    fn has(&self) -> bool {
        self.get().is_some()
    }
}

/// Credential store over `document.cookie`.
#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct CookieCredentialStore {
    name: String,
    path: String,
}

impl CookieCredentialStore {
    pub fn new(config: &AuthConfig) -> Self {
        Self { name: config.cookie_name.clone(), path: config.cookie_path.clone() }
    }
}

impl CredentialStore for CookieCredentialStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            cookie_value(&raw, &self.name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if !self.has() {
                return;
            }
            let Some(document) = html_document() else {
                return;
            };
            if document.set_cookie(&expired_cookie(&self.name, &self.path)).is_err() {
                log::warn!("clearing cookie {} rejected by browser", self.name);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Look up `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// Empty values count as absent.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

/// Cookie assignment that deletes `name` at `path`.
pub fn expired_cookie(name: &str, path: &str) -> String {
    format!("{name}=; path={path}; expires={EXPIRED_AT}")
}

/// In-memory credential store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(value: &str) -> Self {
        let store = Self::new();
        store.set(value);
        store
    }

    /// Store a credential, standing in for the server setting the cookie.
    pub fn set(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone().filter(|v| !v.is_empty())
    }

    fn clear(&self) {
        self.value.borrow_mut().take();
    }
}
