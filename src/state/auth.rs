//! Auth session capabilities for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Interceptors and route guards all need the same three things: the stored
//! credential, the current location, and a way to leave for the login page.
//! `AuthSession` bundles them so each consumer takes one handle instead of
//! reaching for browser globals.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use crate::config::AuthConfig;
use crate::state::credential::{CookieCredentialStore, CredentialStore};
use crate::util::navigator::{LocationSource, Navigator, WindowNavigator};

/// Shared handles for credential, location, and redirect access.
///
/// Cloning is cheap; all clones observe the same underlying capabilities.
#[derive(Clone)]
pub struct AuthSession {
    pub config: AuthConfig,
    pub credentials: Rc<dyn CredentialStore>,
    pub navigator: Rc<dyn Navigator>,
    pub location: Rc<dyn LocationSource>,
}

impl AuthSession {
    pub fn new(
        config: AuthConfig,
        credentials: Rc<dyn CredentialStore>,
        navigator: Rc<dyn Navigator>,
        location: Rc<dyn LocationSource>,
    ) -> Self {
        Self { config, credentials, navigator, location }
    }

    /// Session over `document.cookie` and `window.location`.
    pub fn browser(config: AuthConfig) -> Self {
        let credentials = Rc::new(CookieCredentialStore::new(&config));
        let window = Rc::new(WindowNavigator);
        Self::new(config, credentials, window.clone(), window)
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.has()
    }

    /// Login URL for wherever the browser is right now.
    pub fn login_url(&self, include_redirect: bool) -> String {
        let here = self.location.current();
        self.config
            .login_url(here.pathname.as_deref(), here.hash.as_deref(), include_redirect)
    }

    /// Drop the stored credential.
    pub fn reset(&self) {
        self.credentials.clear();
    }

    /// Leave for the login page, asking to come back here afterwards.
    pub fn redirect_to_login(&self) {
        let url = self.login_url(true);
        self.navigator.redirect_to(&url);
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("config", &self.config)
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
